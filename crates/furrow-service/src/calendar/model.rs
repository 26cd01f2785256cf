use std::fmt;

use chrono::NaiveDate;
use furrow_domain::recurrence::RecurrenceRule;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happens on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Orders are packed and handed to the carrier.
    #[default]
    ShipDay,
    /// Customers collect orders at the farm.
    Pickup,
    /// No shipping or pickup.
    Closed,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShipDay => "ship_day",
            Self::Pickup => "pickup",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// A stored shipping-calendar event.
///
/// The first occurrence of a recurring series is the parent and carries the
/// rule. Later occurrences are children: they copy the display fields, have
/// no rule, and point back at the parent through `parent_event_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingEvent {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
    #[serde(default)]
    pub parent_event_id: Option<Uuid>,
}

impl ShippingEvent {
    /// Whether this event heads a recurring series.
    #[must_use]
    pub fn is_series_parent(&self) -> bool {
        self.recurrence
            .as_ref()
            .is_some_and(RecurrenceRule::is_recurring)
    }

    #[must_use]
    pub const fn is_series_child(&self) -> bool {
        self.parent_event_id.is_some()
    }
}
