//! Order presentation rules.

pub mod status;

pub use status::{
    FALLBACK_COLOR, LegacyOrderStatus, OrderStatus, StatusDisplay, humanize_status,
    legacy_order_status_display, order_status_display,
};
