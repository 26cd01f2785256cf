//! Process-local [`DataStore`] backend.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;
use tracing::{Instrument, Span};
use uuid::Uuid;

use super::{DataStore, Filter, StoreFuture};
use crate::error::StoreError;
use crate::record::{Fields, ID_FIELD, Record};

type Collection = BTreeMap<Uuid, Record>;

/// ## Summary
/// In-memory record store.
///
/// Ids are UUIDv7, so iterating a collection yields records in creation order.
/// Each returned future runs inside the span of the call that built it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }
}

impl DataStore for MemoryStore {
    #[tracing::instrument(skip(self, data), fields(field_count = data.len()))]
    fn insert<'a>(&'a self, collection: &'a str, mut data: Fields) -> StoreFuture<'a, Record> {
        Box::pin(async move {
            data.remove(ID_FIELD);
            let record = Record {
                id: Uuid::now_v7(),
                fields: data,
            };

            self.collections
                .write()
                .await
                .entry(collection.to_string())
                .or_default()
                .insert(record.id, record.clone());

            tracing::trace!(id = %record.id, "Inserted record");
            Ok(record)
        }
        .instrument(Span::current()))
    }

    #[tracing::instrument(skip(self))]
    fn get<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, Option<Record>> {
        Box::pin(async move {
            Ok(self
                .collections
                .read()
                .await
                .get(collection)
                .and_then(|records| records.get(&id))
                .cloned())
        }
        .instrument(Span::current()))
    }

    #[tracing::instrument(skip(self, patch), fields(field_count = patch.len()))]
    fn update<'a>(
        &'a self,
        collection: &'a str,
        id: Uuid,
        patch: Fields,
    ) -> StoreFuture<'a, Record> {
        Box::pin(async move {
            let mut collections = self.collections.write().await;
            let record = collections
                .get_mut(collection)
                .and_then(|records| records.get_mut(&id))
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.to_string(),
                    id,
                })?;

            for (key, value) in patch {
                if key != ID_FIELD {
                    record.fields.insert(key, value);
                }
            }

            Ok(record.clone())
        }
        .instrument(Span::current()))
    }

    #[tracing::instrument(skip(self))]
    fn delete<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let removed = self
                .collections
                .write()
                .await
                .get_mut(collection)
                .and_then(|records| records.remove(&id))
                .is_some();
            tracing::trace!(removed, "Delete finished");
            Ok(removed)
        }
        .instrument(Span::current()))
    }

    #[tracing::instrument(skip(self, filter))]
    fn query<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> StoreFuture<'a, Vec<Record>> {
        Box::pin(async move {
            let collections = self.collections.read().await;
            let Some(records) = collections.get(collection) else {
                return Ok(Vec::new());
            };
            let matched = filter.apply(records.values().cloned());
            tracing::trace!(count = matched.len(), "Query finished");
            Ok(matched)
        }
        .instrument(Span::current()))
    }
}
