//! Record collection names shared by the store and service crates.

pub const SHIPPING_EVENTS_COLLECTION: &str = "shipping_events";
pub const ORDERS_COLLECTION: &str = "orders";
pub const LEGACY_ORDERS_COLLECTION: &str = "legacy_orders";
pub const PRODUCTS_COLLECTION: &str = "products";

/// Field holding the manual display position of reorderable records.
pub const SORT_ORDER_FIELD: &str = "sort_order";
