//! Tests for optimistic list edits against a store.

use furrow_core::constants::{PRODUCTS_COLLECTION, SORT_ORDER_FIELD};
use furrow_service::error::ServiceError;
use furrow_service::optimistic::{Outcome, reorder, toggle_flag};
use furrow_store::store::{DataStore, Direction, Filter};
use furrow_store::store::memory::MemoryStore;
use serde_json::json;

use super::helpers::*;

fn by_position() -> Filter {
    Filter::new().order_by(SORT_ORDER_FIELD, Direction::Ascending)
}

fn names(items: &[furrow_store::record::Record]) -> Vec<&str> {
    items
        .iter()
        .map(|record| record.get_str("name").unwrap_or_default())
        .collect()
}

async fn seed_products(store: &dyn DataStore) -> Vec<furrow_store::record::Record> {
    seed(
        store,
        PRODUCTS_COLLECTION,
        vec![
            json!({ "name": "Carrots", "sort_order": 0, "active": true }),
            json!({ "name": "Kale", "sort_order": 1, "active": true }),
            json!({ "name": "Leeks", "sort_order": 2, "active": false }),
            json!({ "name": "Radish", "sort_order": 3 }),
        ],
    )
    .await
}

/// ## Summary
/// A committed move rewrites positions locally and in the store.
#[test_log::test(tokio::test)]
async fn reorder_commits_new_positions() {
    let store = MemoryStore::new();
    let mut items = seed_products(&store).await;

    let outcome = reorder(&store, PRODUCTS_COLLECTION, &mut items, 3, 1, &by_position())
        .await
        .expect("Failed to reorder");

    assert_eq!(outcome, Outcome::Committed);
    assert_eq!(names(&items), ["Carrots", "Radish", "Kale", "Leeks"]);

    let stored = store
        .query(PRODUCTS_COLLECTION, &by_position())
        .await
        .expect("query");
    assert_eq!(names(&stored), ["Carrots", "Radish", "Kale", "Leeks"]);
    let positions: Vec<_> = stored
        .iter()
        .map(|record| record.get_i64(SORT_ORDER_FIELD))
        .collect();
    assert_eq!(positions, [Some(0), Some(1), Some(2), Some(3)]);
}

/// ## Summary
/// A failed commit restores the list the store still holds.
#[test_log::test(tokio::test)]
async fn reorder_rolls_back_on_failed_commit() {
    let store = FlakyStore::new();
    let mut items = seed_products(&store).await;
    store.fail_updates(true);

    let outcome = reorder(&store, PRODUCTS_COLLECTION, &mut items, 0, 2, &by_position())
        .await
        .expect("Reload should succeed");

    assert!(matches!(outcome, Outcome::RolledBack { .. }));
    assert_eq!(names(&items), ["Carrots", "Kale", "Leeks", "Radish"]);
}

/// ## Summary
/// Moves outside the list are rejected before anything changes.
#[test_log::test(tokio::test)]
async fn reorder_rejects_out_of_bounds() {
    let store = MemoryStore::new();
    let mut items = seed_products(&store).await;
    let before = items.clone();

    let result = reorder(&store, PRODUCTS_COLLECTION, &mut items, 1, 4, &by_position()).await;

    assert!(matches!(result, Err(ServiceError::ValidationError(_))));
    assert_eq!(items, before);
}

/// ## Summary
/// Toggling treats a missing flag as false and persists the new value.
#[test_log::test(tokio::test)]
async fn toggle_flag_flips_and_persists() {
    let store = MemoryStore::new();
    let mut items = seed_products(&store).await;
    let kale = items[1].id;
    let radish = items[3].id;

    toggle_flag(&store, PRODUCTS_COLLECTION, &mut items, kale, "active", &by_position())
        .await
        .expect("toggle kale");
    toggle_flag(&store, PRODUCTS_COLLECTION, &mut items, radish, "active", &by_position())
        .await
        .expect("toggle radish");

    assert_eq!(items[1].get_bool("active"), Some(false));
    assert_eq!(items[3].get_bool("active"), Some(true));

    let stored = store
        .get(PRODUCTS_COLLECTION, kale)
        .await
        .expect("get")
        .expect("kale exists");
    assert_eq!(stored.get_bool("active"), Some(false));
}

/// ## Summary
/// A failed toggle reloads the list and leaves the stored flag untouched.
#[test_log::test(tokio::test)]
async fn toggle_flag_rolls_back_on_failed_commit() {
    let store = FlakyStore::new();
    let mut items = seed_products(&store).await;
    let leeks = items[2].id;
    store.fail_updates(true);

    let outcome = toggle_flag(&store, PRODUCTS_COLLECTION, &mut items, leeks, "active", &by_position())
        .await
        .expect("Reload should succeed");

    assert!(!outcome.is_committed());
    assert_eq!(items[2].get_bool("active"), Some(false));
}

/// ## Summary
/// Toggling a record that is not listed is an error.
#[test_log::test(tokio::test)]
async fn toggle_flag_unknown_id() {
    let store = MemoryStore::new();
    let mut items = seed_products(&store).await;

    let result = toggle_flag(
        &store,
        PRODUCTS_COLLECTION,
        &mut items,
        uuid::Uuid::now_v7(),
        "featured",
        &by_position(),
    )
    .await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}
