//! Recurring shipping-calendar events.

mod expand;
mod rule;

pub use expand::{ExpansionLimits, expand, expand_with_limits};
pub use rule::{EndType, RecurrenceRule, RecurrenceType, weekday_from_index};
