//! Data access for the shop back office.
//!
//! Callers receive a [`store::DataStore`] explicitly instead of reaching for a
//! shared client, which keeps business logic testable against
//! [`store::memory::MemoryStore`].

pub mod error;
pub mod record;
pub mod store;
