//! Order listings with display-ready status badges.

use furrow_core::constants::{LEGACY_ORDERS_COLLECTION, ORDERS_COLLECTION};
use furrow_domain::order::{
    OrderStatus, StatusDisplay, legacy_order_status_display, order_status_display,
};
use furrow_store::record::{Fields, Record};
use furrow_store::store::{DataStore, Direction, Filter};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

const STATUS_FIELD: &str = "status";
const NUMBER_FIELD: &str = "order_number";
const CREATED_FIELD: &str = "created_at";
const UNKNOWN_STATUS: &str = "unknown";

/// One row of an order table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub number: Option<String>,
    pub status_code: String,
    pub display: StatusDisplay,
}

fn order_number(record: &Record) -> Option<String> {
    match record.get(NUMBER_FIELD)? {
        Value::String(number) => Some(number.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn summarize_with(record: &Record, display: fn(&str) -> StatusDisplay) -> OrderSummary {
    let status_code = record
        .get_str(STATUS_FIELD)
        .unwrap_or(UNKNOWN_STATUS)
        .to_string();
    OrderSummary {
        id: record.id,
        number: order_number(record),
        display: display(&status_code),
        status_code,
    }
}

/// Summary of a storefront order record.
#[must_use]
pub fn summarize_order(record: &Record) -> OrderSummary {
    summarize_with(record, order_status_display)
}

/// Summary of an order imported from the previous shop.
#[must_use]
pub fn summarize_legacy_order(record: &Record) -> OrderSummary {
    summarize_with(record, legacy_order_status_display)
}

/// ## Summary
/// Lists storefront orders, newest first, optionally restricted to one status.
///
/// ## Errors
/// Returns an error if the query fails.
#[tracing::instrument(skip(store))]
pub async fn list_order_summaries(
    store: &dyn DataStore,
    status: Option<OrderStatus>,
) -> ServiceResult<Vec<OrderSummary>> {
    let mut filter = Filter::new().order_by(CREATED_FIELD, Direction::Descending);
    if let Some(status) = status {
        filter = filter.eq(STATUS_FIELD, status.as_str());
    }

    let records = store.query(ORDERS_COLLECTION, &filter).await?;
    Ok(records.iter().map(summarize_order).collect())
}

/// ## Summary
/// Lists imported legacy orders, newest first.
///
/// ## Errors
/// Returns an error if the query fails.
#[tracing::instrument(skip(store))]
pub async fn list_legacy_order_summaries(
    store: &dyn DataStore,
) -> ServiceResult<Vec<OrderSummary>> {
    let filter = Filter::new().order_by(CREATED_FIELD, Direction::Descending);
    let records = store.query(LEGACY_ORDERS_COLLECTION, &filter).await?;
    Ok(records.iter().map(summarize_legacy_order).collect())
}

/// ## Summary
/// Sets the status of a storefront order.
///
/// Any status may follow any other; the admin decides.
///
/// ## Errors
/// Returns an error if the order does not exist or the update fails.
#[tracing::instrument(skip(store))]
pub async fn update_order_status(
    store: &dyn DataStore,
    id: Uuid,
    status: OrderStatus,
) -> ServiceResult<OrderSummary> {
    if store.get(ORDERS_COLLECTION, id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("order {id}")));
    }

    let mut patch = Fields::new();
    patch.insert(STATUS_FIELD.to_string(), Value::from(status.as_str()));
    let updated = store.update(ORDERS_COLLECTION, id, patch).await?;

    tracing::info!(status = %status, "Order status updated");
    Ok(summarize_order(&updated))
}
