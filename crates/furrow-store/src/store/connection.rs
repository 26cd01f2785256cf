use std::sync::Arc;

use furrow_core::config::{StoreBackend, StoreConfig};

use super::DataStore;
use super::memory::MemoryStore;

pub type SharedStore = Arc<dyn DataStore>;

/// ## Summary
/// Builds the data store selected by configuration.
#[tracing::instrument(skip(config), fields(backend = ?config.backend))]
#[must_use]
pub fn create_store(config: &StoreConfig) -> SharedStore {
    tracing::debug!("Creating data store");

    let store: SharedStore = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!("Data store created successfully");

    store
}
