//! Service integration tests against the in-memory store.

mod optimistic;
mod orders;
