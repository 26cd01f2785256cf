//! Back-office services. Every operation receives its [`DataStore`]
//! explicitly.
//!
//! [`DataStore`]: furrow_store::store::DataStore

pub mod calendar;
pub mod error;
pub mod optimistic;
pub mod order;
