use std::sync::Arc;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::record::{Fields, Record};

pub mod connection;
pub mod filter;
pub mod memory;

pub use filter::{Condition, Direction, Filter};

pub type StoreFuture<'a, T> = BoxFuture<'a, StoreResult<T>>;

/// ## Summary
/// Generic create/read/update/delete access to named record collections.
///
/// Implementations own persistence and transport. Every method reports
/// failure through its `StoreResult`; callers decide how to recover.
pub trait DataStore: Send + Sync {
    /// Inserts a record and returns it with its assigned id.
    fn insert<'a>(&'a self, collection: &'a str, fields: Fields) -> StoreFuture<'a, Record>;

    fn get<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, Option<Record>>;

    /// Merges `patch` into an existing record and returns the result.
    fn update<'a>(
        &'a self,
        collection: &'a str,
        id: Uuid,
        patch: Fields,
    ) -> StoreFuture<'a, Record>;

    /// Removes a record. Returns `false` if it did not exist.
    fn delete<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, bool>;

    fn query<'a>(&'a self, collection: &'a str, filter: &'a Filter)
    -> StoreFuture<'a, Vec<Record>>;
}

impl<S: DataStore + ?Sized> DataStore for Arc<S> {
    fn insert<'a>(&'a self, collection: &'a str, fields: Fields) -> StoreFuture<'a, Record> {
        (**self).insert(collection, fields)
    }

    fn get<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, Option<Record>> {
        (**self).get(collection, id)
    }

    fn update<'a>(
        &'a self,
        collection: &'a str,
        id: Uuid,
        patch: Fields,
    ) -> StoreFuture<'a, Record> {
        (**self).update(collection, id, patch)
    }

    fn delete<'a>(&'a self, collection: &'a str, id: Uuid) -> StoreFuture<'a, bool> {
        (**self).delete(collection, id)
    }

    fn query<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> StoreFuture<'a, Vec<Record>> {
        (**self).query(collection, filter)
    }
}
