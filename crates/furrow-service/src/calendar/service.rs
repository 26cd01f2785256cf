//! Shipping calendar persistence.

use chrono::NaiveDate;
use furrow_core::constants::SHIPPING_EVENTS_COLLECTION;
use furrow_domain::recurrence::{ExpansionLimits, RecurrenceRule, expand_with_limits};
use furrow_store::record::to_fields;
use furrow_store::store::{DataStore, Direction, Filter};
use serde::Serialize;
use uuid::Uuid;

use super::model::{EventKind, ShippingEvent};
use crate::error::{ServiceError, ServiceResult};

const EVENT_DATE_FIELD: &str = "event_date";
const PARENT_FIELD: &str = "parent_event_id";

/// Input for creating a calendar event, recurring or not.
#[derive(Debug, Clone)]
pub struct CreateEventContext {
    pub title: String,
    pub kind: EventKind,
    pub notes: Option<String>,
    pub start_date: NaiveDate,
    pub recurrence: RecurrenceRule,
}

/// Result of creating a calendar event.
#[derive(Debug, Clone)]
pub struct CreateEventResult {
    /// The first occurrence. Carries the rule when the event recurs.
    pub parent_id: Uuid,
    /// Remaining occurrences, in date order.
    pub child_ids: Vec<Uuid>,
    /// Every persisted date, parent first.
    pub dates: Vec<NaiveDate>,
}

/// Row layout written to the store.
#[derive(Serialize)]
struct EventRow<'a> {
    title: &'a str,
    event_date: NaiveDate,
    kind: EventKind,
    notes: Option<&'a str>,
    recurrence: Option<&'a RecurrenceRule>,
    parent_event_id: Option<Uuid>,
}

/// ## Summary
/// Creates a calendar event, expanding recurring rules into one parent record
/// and one child record per further occurrence.
///
/// The rule is expanded exactly once, here. Later edits replace the series
/// rather than re-expanding it.
///
/// ## Side Effects
/// - Inserts the parent record, then each child record
/// - On a failed child insert, deletes the records inserted so far
///
/// ## Errors
/// Returns an error if:
/// - The rule yields no dates (end date before the first occurrence)
/// - Any insert fails
#[tracing::instrument(skip(store, ctx), fields(
    title = %ctx.title,
    start_date = %ctx.start_date,
    recurrence = %ctx.recurrence.kind
))]
pub async fn create_event(
    store: &dyn DataStore,
    ctx: &CreateEventContext,
    limits: ExpansionLimits,
) -> ServiceResult<CreateEventResult> {
    let dates = expand_with_limits(ctx.start_date, &ctx.recurrence, limits);
    let Some((&first, rest)) = dates.split_first() else {
        tracing::warn!("Recurrence rule produced no dates");
        return Err(ServiceError::ValidationError(
            "recurrence rule produces no occurrences".to_string(),
        ));
    };

    let parent_row = EventRow {
        title: &ctx.title,
        event_date: first,
        kind: ctx.kind,
        notes: ctx.notes.as_deref(),
        recurrence: ctx
            .recurrence
            .is_recurring()
            .then_some(&ctx.recurrence),
        parent_event_id: None,
    };
    let parent = store
        .insert(SHIPPING_EVENTS_COLLECTION, to_fields(&parent_row)?)
        .await?;

    tracing::debug!(parent_id = %parent.id, children = rest.len(), "Parent event created");

    let mut child_ids = Vec::with_capacity(rest.len());
    for &event_date in rest {
        let child_row = EventRow {
            event_date,
            recurrence: None,
            parent_event_id: Some(parent.id),
            ..parent_row
        };
        let inserted = match to_fields(&child_row) {
            Ok(fields) => store.insert(SHIPPING_EVENTS_COLLECTION, fields).await,
            Err(err) => Err(err),
        };

        match inserted {
            Ok(child) => child_ids.push(child.id),
            Err(err) => {
                tracing::warn!(error = %err, %event_date, "Child insert failed, removing partial series");
                remove_records(store, child_ids.iter().copied().chain([parent.id])).await;
                return Err(err.into());
            }
        }
    }

    tracing::info!(parent_id = %parent.id, occurrences = dates.len(), "Calendar event created");

    Ok(CreateEventResult {
        parent_id: parent.id,
        child_ids,
        dates,
    })
}

/// Best-effort cleanup; failures are logged and skipped.
async fn remove_records(store: &dyn DataStore, ids: impl IntoIterator<Item = Uuid>) {
    for id in ids {
        if let Err(err) = store.delete(SHIPPING_EVENTS_COLLECTION, id).await {
            tracing::warn!(error = %err, %id, "Failed to remove event during cleanup");
        }
    }
}

/// ## Summary
/// Lists events between `from` and `to` (inclusive), ordered by date.
///
/// ## Errors
/// Returns an error if the query fails or a stored record is malformed.
#[tracing::instrument(skip(store))]
pub async fn list_events(
    store: &dyn DataStore,
    from: NaiveDate,
    to: NaiveDate,
) -> ServiceResult<Vec<ShippingEvent>> {
    let filter = Filter::new()
        .gte(EVENT_DATE_FIELD, from.to_string())
        .lte(EVENT_DATE_FIELD, to.to_string())
        .order_by(EVENT_DATE_FIELD, Direction::Ascending);

    let events = store
        .query(SHIPPING_EVENTS_COLLECTION, &filter)
        .await?
        .into_iter()
        .map(|record| record.into_model::<ShippingEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = events.len(), "Listed calendar events");
    Ok(events)
}

/// ## Summary
/// Returns a series: the parent followed by its children in date order.
///
/// A non-recurring event is returned on its own.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has `parent_id`.
#[tracing::instrument(skip(store))]
pub async fn series(store: &dyn DataStore, parent_id: Uuid) -> ServiceResult<Vec<ShippingEvent>> {
    let parent: ShippingEvent = store
        .get(SHIPPING_EVENTS_COLLECTION, parent_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("calendar event {parent_id}")))?
        .into_model()?;

    let mut events = vec![parent];
    for record in children(store, parent_id).await? {
        events.push(record.into_model()?);
    }
    Ok(events)
}

async fn children(
    store: &dyn DataStore,
    parent_id: Uuid,
) -> ServiceResult<Vec<furrow_store::record::Record>> {
    let filter = Filter::new()
        .eq(PARENT_FIELD, parent_id.to_string())
        .order_by(EVENT_DATE_FIELD, Direction::Ascending);
    Ok(store.query(SHIPPING_EVENTS_COLLECTION, &filter).await?)
}

/// ## Summary
/// Deletes a series parent together with all of its children.
///
/// ## Side Effects
/// - Removes every child, then the parent
///
/// ## Errors
/// Returns an error if:
/// - No event has `parent_id`
/// - The event is itself a child of another series
/// - A delete fails
#[tracing::instrument(skip(store))]
pub async fn delete_series(store: &dyn DataStore, parent_id: Uuid) -> ServiceResult<usize> {
    let parent = store
        .get(SHIPPING_EVENTS_COLLECTION, parent_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("calendar event {parent_id}")))?;

    if let Some(owner) = parent.get_uuid(PARENT_FIELD) {
        return Err(ServiceError::ValidationError(format!(
            "event {parent_id} belongs to series {owner}"
        )));
    }

    let mut removed = 0;
    for child in children(store, parent_id).await? {
        if store.delete(SHIPPING_EVENTS_COLLECTION, child.id).await? {
            removed += 1;
        }
    }
    if store.delete(SHIPPING_EVENTS_COLLECTION, parent_id).await? {
        removed += 1;
    }

    tracing::info!(removed, "Calendar series deleted");
    Ok(removed)
}

/// ## Summary
/// Deletes a single event. Deleting a child skips that one date of its series.
///
/// ## Errors
/// Returns an error if:
/// - No event has `id`
/// - The event still has children (use [`delete_series`])
/// - The delete fails
#[tracing::instrument(skip(store))]
pub async fn delete_event(store: &dyn DataStore, id: Uuid) -> ServiceResult<()> {
    if !children(store, id).await?.is_empty() {
        return Err(ServiceError::ValidationError(format!(
            "event {id} heads a series; delete the series instead"
        )));
    }

    if store.delete(SHIPPING_EVENTS_COLLECTION, id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("calendar event {id}")))
    }
}
