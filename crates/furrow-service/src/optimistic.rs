//! Optimistic edits of locally displayed record lists.
//!
//! An edit is applied to local state first, then committed to the store. If
//! the commit fails, local state is replaced by a fresh read so it matches
//! whatever the store actually holds.

use std::future::Future;

use furrow_core::constants::SORT_ORDER_FIELD;
use furrow_store::error::StoreResult;
use furrow_store::record::{Fields, Record};
use furrow_store::store::{DataStore, Filter};
use futures::future::try_join_all;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// How an optimistic edit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    /// The commit failed and local state was reloaded.
    RolledBack { reason: String },
}

impl Outcome {
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// ## Summary
/// Two-phase optimistic update.
///
/// 1. `state` is replaced with `next`.
/// 2. `commit` is awaited. On failure `refetch` is called and its result
///    replaces `state`.
///
/// ## Errors
/// Returns an error only if the commit fails and the refetch fails too. In
/// that case `state` still holds `next`.
pub async fn apply_optimistic<T, C, R, RFut>(
    state: &mut T,
    next: T,
    commit: C,
    refetch: R,
) -> ServiceResult<Outcome>
where
    C: Future<Output = StoreResult<()>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = StoreResult<T>>,
{
    *state = next;

    match commit.await {
        Ok(()) => Ok(Outcome::Committed),
        Err(err) => {
            tracing::warn!(error = %err, "Optimistic update failed, reloading from store");
            *state = refetch().await?;
            Ok(Outcome::RolledBack {
                reason: err.to_string(),
            })
        }
    }
}

/// ## Summary
/// Drag-and-drop move of `items[from]` to position `to`.
///
/// Positions are rewritten as `sort_order = index` and only records whose
/// position changed are updated. On failure `items` is reloaded with `reload`.
///
/// ## Errors
/// Returns an error if an index is out of bounds, or if both the commit and
/// the reload fail.
#[tracing::instrument(skip(store, items, reload), fields(count = items.len()))]
pub async fn reorder(
    store: &dyn DataStore,
    collection: &str,
    items: &mut Vec<Record>,
    from: usize,
    to: usize,
    reload: &Filter,
) -> ServiceResult<Outcome> {
    if from >= items.len() || to >= items.len() {
        return Err(ServiceError::ValidationError(format!(
            "cannot move item {from} to {to} in a list of {}",
            items.len()
        )));
    }

    let mut next = items.clone();
    let moved = next.remove(from);
    next.insert(to, moved);

    let mut changes: Vec<(Uuid, Fields)> = Vec::new();
    for (position, record) in next.iter_mut().enumerate() {
        let position = Value::from(position);
        if record.get(SORT_ORDER_FIELD) != Some(&position) {
            record
                .fields
                .insert(SORT_ORDER_FIELD.to_string(), position.clone());
            let mut patch = Fields::new();
            patch.insert(SORT_ORDER_FIELD.to_string(), position);
            changes.push((record.id, patch));
        }
    }

    tracing::debug!(changed = changes.len(), "Reordering records");

    let commit = async {
        try_join_all(
            changes
                .into_iter()
                .map(|(id, patch)| store.update(collection, id, patch)),
        )
        .await
        .map(|_| ())
    };

    apply_optimistic(items, next, commit, || store.query(collection, reload)).await
}

/// ## Summary
/// Flips a boolean field (e.g. `active`, `featured`) on one listed record.
///
/// A missing field counts as `false`. On failure `items` is reloaded with `reload`.
///
/// ## Errors
/// Returns an error if `id` is not in `items`, or if both the commit and the
/// reload fail.
#[tracing::instrument(skip(store, items, reload))]
pub async fn toggle_flag(
    store: &dyn DataStore,
    collection: &str,
    items: &mut Vec<Record>,
    id: Uuid,
    field: &str,
    reload: &Filter,
) -> ServiceResult<Outcome> {
    let Some(index) = items.iter().position(|record| record.id == id) else {
        return Err(ServiceError::NotFound(format!("{collection} record {id}")));
    };

    let value = !items[index].get_bool(field).unwrap_or(false);
    let mut next = items.clone();
    next[index]
        .fields
        .insert(field.to_string(), Value::Bool(value));

    let mut patch = Fields::new();
    patch.insert(field.to_string(), Value::Bool(value));
    let commit = async move { store.update(collection, id, patch).await.map(|_| ()) };

    apply_optimistic(items, next, commit, || store.query(collection, reload)).await
}
