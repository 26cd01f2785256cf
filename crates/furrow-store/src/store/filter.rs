//! Filtered queries over a record collection.

use std::cmp::Ordering;

use serde_json::Value;

use crate::record::Record;

/// A single predicate on a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq(String, Value),
    /// Field is greater than or equal to the value.
    Gte(String, Value),
    /// Field is less than or equal to the value.
    Lte(String, Value),
    /// Field is missing or JSON `null`.
    IsNull(String),
}

impl Condition {
    /// Evaluates the predicate. Range conditions never match values that are
    /// not comparable (different JSON types, missing fields).
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Eq(field, expected) => record.get(field) == Some(expected),
            Self::Gte(field, bound) => record
                .get(field)
                .and_then(|value| compare_values(value, bound))
                .is_some_and(Ordering::is_ge),
            Self::Lte(field, bound) => record
                .get(field)
                .and_then(|value| compare_values(value, bound))
                .is_some_and(Ordering::is_le),
            Self::IsNull(field) => record.get(field).is_none_or(Value::is_null),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// ## Summary
/// Conjunction of conditions with optional ordering and limit.
///
/// Dates are stored as ISO-8601 strings, so string comparison orders them
/// chronologically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq(field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn gte(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Gte(field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn lte(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Lte(field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn is_null(mut self, field: impl Into<String>) -> Self {
        self.conditions.push(Condition::IsNull(field.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|condition| condition.matches(record))
    }

    /// ## Summary
    /// Applies the filter to an already collected set of records.
    ///
    /// Sorting is stable, so ties keep their incoming order. Records missing
    /// the sort field go last regardless of direction.
    #[must_use]
    pub fn apply(&self, records: impl IntoIterator<Item = Record>) -> Vec<Record> {
        let mut matched: Vec<Record> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();

        if let Some((field, direction)) = &self.order_by {
            matched.sort_by(|left, right| {
                match (left.get(field), right.get(field)) {
                    (Some(l), Some(r)) => {
                        let ordering = compare_values(l, r).unwrap_or(Ordering::Equal);
                        match direction {
                            Direction::Ascending => ordering,
                            Direction::Descending => ordering.reverse(),
                        }
                    }
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        matched
    }
}

/// Orders two JSON values of the same kind. Returns `None` across kinds.
#[must_use]
pub fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => match (l.as_i64(), r.as_i64()) {
            (Some(l), Some(r)) => Some(l.cmp(&r)),
            _ => l.as_f64()?.partial_cmp(&r.as_f64()?),
        },
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}
