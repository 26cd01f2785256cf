//! Tests for order listings and status changes.

use furrow_core::constants::{LEGACY_ORDERS_COLLECTION, ORDERS_COLLECTION};
use furrow_domain::order::OrderStatus;
use furrow_service::error::ServiceError;
use furrow_service::order::{
    list_legacy_order_summaries, list_order_summaries, update_order_status,
};
use furrow_store::store::memory::MemoryStore;
use serde_json::json;

use super::helpers::*;

async fn seed_orders(store: &MemoryStore) -> Vec<furrow_store::record::Record> {
    seed(
        store,
        ORDERS_COLLECTION,
        vec![
            json!({ "order_number": 1001, "status": "completed", "created_at": "2026-03-01T09:00:00Z" }),
            json!({ "order_number": 1002, "status": "processing", "created_at": "2026-03-02T09:00:00Z" }),
            json!({ "order_number": 1003, "status": "processing", "created_at": "2026-03-03T09:00:00Z" }),
            json!({ "order_number": 1004, "status": "awaiting_pigeon", "created_at": "2026-03-04T09:00:00Z" }),
        ],
    )
    .await
}

/// ## Summary
/// Orders come back newest first, each with its badge.
#[test_log::test(tokio::test)]
async fn list_orders_newest_first_with_badges() {
    let store = MemoryStore::new();
    seed_orders(&store).await;

    let summaries = list_order_summaries(&store, None)
        .await
        .expect("Failed to list orders");

    let rows: Vec<_> = summaries
        .iter()
        .map(|summary| {
            (
                summary.number.as_deref().unwrap_or_default(),
                &*summary.display.label,
                summary.display.color,
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("1004", "awaiting pigeon", "gray"),
            ("1003", "Processing", "blue"),
            ("1002", "Processing", "blue"),
            ("1001", "Completed", "green"),
        ]
    );
}

/// ## Summary
/// A status filter keeps only matching orders.
#[test_log::test(tokio::test)]
async fn list_orders_filtered_by_status() {
    let store = MemoryStore::new();
    seed_orders(&store).await;

    let summaries = list_order_summaries(&store, Some(OrderStatus::Processing))
        .await
        .expect("Failed to list orders");

    let numbers: Vec<_> = summaries
        .iter()
        .filter_map(|summary| summary.number.as_deref())
        .collect();
    assert_eq!(numbers, ["1003", "1002"]);
}

/// ## Summary
/// Status updates are persisted and reflected in the returned summary.
#[test_log::test(tokio::test)]
async fn update_status_persists() {
    let store = MemoryStore::new();
    let orders = seed_orders(&store).await;

    let summary = update_order_status(&store, orders[1].id, OrderStatus::Shipped)
        .await
        .expect("Failed to update status");

    assert_eq!(summary.status_code, "shipped");
    assert_eq!(summary.display.label, "Shipped");
    assert_eq!(summary.display.color, "purple");

    let shipped = list_order_summaries(&store, Some(OrderStatus::Shipped))
        .await
        .expect("list");
    assert_eq!(shipped.len(), 1);
    assert_eq!(shipped[0].id, orders[1].id);
}

/// ## Summary
/// Updating a missing order is reported, not created.
#[test_log::test(tokio::test)]
async fn update_status_of_missing_order() {
    let store = MemoryStore::new();

    let result = update_order_status(&store, uuid::Uuid::now_v7(), OrderStatus::Cancelled).await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(store.is_empty(ORDERS_COLLECTION).await);
}

/// ## Summary
/// Legacy orders use the legacy label table, prefixed or not.
#[test_log::test(tokio::test)]
async fn list_legacy_orders() {
    let store = MemoryStore::new();
    seed(
        &store,
        LEGACY_ORDERS_COLLECTION,
        vec![
            json!({ "order_number": "WC-10", "status": "wc-on-hold", "created_at": "2024-05-01T00:00:00Z" }),
            json!({ "order_number": "WC-11", "status": "checkout-draft", "created_at": "2024-05-02T00:00:00Z" }),
            json!({ "order_number": "WC-12", "created_at": "2024-05-03T00:00:00Z" }),
        ],
    )
    .await;

    let summaries = list_legacy_order_summaries(&store)
        .await
        .expect("Failed to list legacy orders");

    let labels: Vec<_> = summaries
        .iter()
        .map(|summary| &*summary.display.label)
        .collect();
    assert_eq!(labels, ["unknown", "Draft", "On Hold"]);
}
