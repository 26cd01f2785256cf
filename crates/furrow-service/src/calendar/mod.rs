//! Shipping calendar: ship days, pickup days and closures, optionally recurring.

pub mod model;
pub mod service;

pub use model::{EventKind, ShippingEvent};
pub use service::{
    CreateEventContext, CreateEventResult, create_event, delete_event, delete_series,
    list_events, series,
};
