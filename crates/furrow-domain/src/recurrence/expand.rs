//! Expansion of a recurrence rule into concrete calendar dates.
//!
//! Expansion is bounded twice: by a date ceiling `horizon_months` after the
//! start date, and by an occurrence cap. Both bounds always apply, so rules
//! with `EndType::Never` still terminate.
//!
//! Monthly rules are anchored on the start date: the k-th date is
//! `start + k * interval` months, with the day clamped to the last day of the
//! target month. A series starting on January 31st therefore yields
//! Feb 28 (or 29), Mar 31, Apr 30, ... and never drifts to an earlier day.

use chrono::{Datelike, Days, Months, NaiveDate};
use furrow_core::config::{DEFAULT_HORIZON_MONTHS, DEFAULT_MAX_OCCURRENCES, ScheduleConfig};

use super::rule::{EndType, RecurrenceRule, RecurrenceType};

/// Bounds applied to every expansion. Values above the defaults are clamped
/// down to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Dates after `start + horizon_months` are never produced.
    pub horizon_months: u32,
    /// Upper bound on produced dates, also caps `EndType::After` counts.
    pub max_occurrences: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            max_occurrences: DEFAULT_MAX_OCCURRENCES as usize,
        }
    }
}

impl ExpansionLimits {
    /// Limits with both bounds clamped into `1..=default`. Configuration may
    /// shrink the window but never widen it.
    #[must_use]
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            horizon_months: self.horizon_months.clamp(1, defaults.horizon_months),
            max_occurrences: self.max_occurrences.clamp(1, defaults.max_occurrences),
        }
    }
}

impl From<&ScheduleConfig> for ExpansionLimits {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            horizon_months: config.horizon_months,
            max_occurrences: usize::try_from(config.max_occurrences).unwrap_or(usize::MAX),
        }
        .clamped()
    }
}

/// ## Summary
/// Expands `rule` from `start` using the default 12 month / 365 date limits.
///
/// See [`expand_with_limits`].
#[must_use]
pub fn expand(start: NaiveDate, rule: &RecurrenceRule) -> Vec<NaiveDate> {
    expand_with_limits(start, rule, ExpansionLimits::default())
}

/// ## Summary
/// Produces the ordered dates on which a recurring event occurs.
///
/// - `none` yields exactly `[start]`.
/// - `daily` yields `start + k * interval` days.
/// - `weekly` scans 7-day windows anchored at `start`, considering only every
///   `interval`-th window, and yields days whose weekday is in the rule's set.
/// - `monthly` yields `start + k * interval` months (day clamped).
///
/// Output is strictly increasing and never passes the horizon ceiling, the
/// rule's end date, or the occurrence cap. Malformed values are clamped:
/// interval and occurrence counts to at least 1. An end date before `start`
/// yields an empty sequence.
#[must_use]
pub fn expand_with_limits(
    start: NaiveDate,
    rule: &RecurrenceRule,
    limits: ExpansionLimits,
) -> Vec<NaiveDate> {
    let limits = limits.clamped();
    let end = effective_end(start, rule, limits);
    let max_count = effective_max_count(rule, limits);
    let interval = rule.effective_interval();

    let dates = match rule.kind {
        RecurrenceType::None => vec![start],
        RecurrenceType::Daily => daily(start, interval, end, max_count),
        RecurrenceType::Weekly => weekly(start, rule, interval, end, max_count),
        RecurrenceType::Monthly => monthly(start, interval, end, max_count),
    };

    tracing::trace!(
        kind = %rule.kind,
        interval,
        %start,
        %end,
        max_count,
        count = dates.len(),
        "Expanded recurrence rule"
    );

    dates
}

/// Last date the expansion may produce.
fn effective_end(start: NaiveDate, rule: &RecurrenceRule, limits: ExpansionLimits) -> NaiveDate {
    let ceiling = start
        .checked_add_months(Months::new(limits.horizon_months))
        .unwrap_or(NaiveDate::MAX);

    match (rule.end_type, rule.end_date) {
        (EndType::OnDate, Some(end_date)) => end_date.min(ceiling),
        _ => ceiling,
    }
}

fn effective_max_count(rule: &RecurrenceRule, limits: ExpansionLimits) -> usize {
    let cap = limits.max_occurrences;
    match rule.end_type {
        EndType::After => {
            let requested = rule.end_after_occurrences.unwrap_or(1).max(1);
            usize::try_from(requested).unwrap_or(usize::MAX).min(cap)
        }
        EndType::Never | EndType::OnDate => cap,
    }
}

fn daily(start: NaiveDate, interval: u32, end: NaiveDate, max_count: usize) -> Vec<NaiveDate> {
    let step = Days::new(u64::from(interval));
    std::iter::successors(Some(start), |date| date.checked_add_days(step))
        .take_while(|date| *date <= end)
        .take(max_count)
        .collect()
}

fn weekly(
    start: NaiveDate,
    rule: &RecurrenceRule,
    interval: u32,
    end: NaiveDate,
    max_count: usize,
) -> Vec<NaiveDate> {
    let weekdays = rule.weekdays(start);
    let stride = u64::from(interval) * 7;

    (0_u64..)
        .map_while(|window| {
            window
                .checked_mul(stride)
                .and_then(|offset| start.checked_add_days(Days::new(offset)))
        })
        .take_while(|window_start| *window_start <= end)
        .flat_map(|window_start| {
            (0..7_u64).filter_map(move |offset| window_start.checked_add_days(Days::new(offset)))
        })
        .filter(|date| weekdays.contains(&date.weekday()))
        .take_while(|date| *date <= end)
        .take(max_count)
        .collect()
}

fn monthly(start: NaiveDate, interval: u32, end: NaiveDate, max_count: usize) -> Vec<NaiveDate> {
    (0_u32..)
        .map_while(|step| {
            step.checked_mul(interval)
                .and_then(|months| start.checked_add_months(Months::new(months)))
        })
        .take_while(|date| *date <= end)
        .take(max_count)
        .collect()
}
