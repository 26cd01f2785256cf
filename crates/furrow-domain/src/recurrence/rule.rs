//! Recurrence rule value types for shipping-calendar events.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    /// A single, non-recurring event.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Stop condition for a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndType {
    /// Runs until the expansion horizon.
    #[default]
    Never,
    /// Stops after `end_after_occurrences` dates.
    After,
    /// Stops after `end_date`.
    OnDate,
}

impl EndType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::After => "after",
            Self::OnDate => "on_date",
        }
    }
}

impl fmt::Display for EndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// ## Summary
/// Declarative description of how a calendar event repeats.
///
/// Rules are plain values built from user input when an event is created.
/// Editing a series builds a new rule rather than mutating this one.
///
/// Field names serialize in camelCase (`type`, `daysOfWeek`, `endType`, ...)
/// to match the records stored by the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    /// Repeat every N days, weeks or months. Values below 1 are treated as 1.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Weekday indices, 0 = Sunday through 6 = Saturday. Only used for weekly
    /// rules; empty means the start date's weekday.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub end_type: EndType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_after_occurrences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

const fn default_interval() -> u32 {
    1
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::none()
    }
}

impl RecurrenceRule {
    /// A rule for a one-off event.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RecurrenceType::None,
            interval: 1,
            days_of_week: Vec::new(),
            end_type: EndType::Never,
            end_after_occurrences: None,
            end_date: None,
        }
    }

    #[must_use]
    pub fn daily(interval: u32) -> Self {
        Self {
            kind: RecurrenceType::Daily,
            interval,
            ..Self::none()
        }
    }

    /// Weekly rule on the given weekday indices (0 = Sunday).
    #[must_use]
    pub fn weekly(interval: u32, days_of_week: &[u8]) -> Self {
        Self {
            kind: RecurrenceType::Weekly,
            interval,
            days_of_week: days_of_week.to_vec(),
            ..Self::none()
        }
    }

    #[must_use]
    pub fn monthly(interval: u32) -> Self {
        Self {
            kind: RecurrenceType::Monthly,
            interval,
            ..Self::none()
        }
    }

    /// Stops the series after `occurrences` dates.
    #[must_use]
    pub fn ending_after(mut self, occurrences: u32) -> Self {
        self.end_type = EndType::After;
        self.end_after_occurrences = Some(occurrences);
        self
    }

    /// Stops the series after `date` (inclusive).
    #[must_use]
    pub fn ending_on(mut self, date: NaiveDate) -> Self {
        self.end_type = EndType::OnDate;
        self.end_date = Some(date);
        self
    }

    /// Whether this rule produces more than a single event.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.kind != RecurrenceType::None
    }

    /// Interval clamped to at least 1.
    #[must_use]
    pub fn effective_interval(&self) -> u32 {
        self.interval.max(1)
    }

    /// ## Summary
    /// Resolves `days_of_week` into chrono weekdays.
    ///
    /// Indices outside 0..=6 are dropped. An empty (or fully invalid) set falls
    /// back to the weekday of `start`.
    #[must_use]
    pub fn weekdays(&self, start: NaiveDate) -> Vec<Weekday> {
        let mut days: Vec<Weekday> = self
            .days_of_week
            .iter()
            .filter_map(|&index| weekday_from_index(index))
            .collect();
        if days.is_empty() {
            days.push(start.weekday());
        }
        days
    }
}

/// Maps 0 = Sunday .. 6 = Saturday onto chrono's weekday enum.
#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
