//! JSON request documents read by the `preview` and `schedule` commands.

use chrono::NaiveDate;
use furrow_domain::recurrence::RecurrenceRule;
use furrow_service::calendar::{CreateEventContext, EventKind};
use serde::Deserialize;
use tokio::io::AsyncReadExt;

use crate::error::AppResult;

/// `{ "startDate": "2026-01-05", "rule": { "type": "weekly", ... } }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub rule: RecurrenceRule,
}

/// A preview request plus the display fields of the event to create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub title: String,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub preview: PreviewRequest,
}

impl From<ScheduleRequest> for CreateEventContext {
    fn from(request: ScheduleRequest) -> Self {
        Self {
            title: request.title,
            kind: request.kind,
            notes: request.notes,
            start_date: request.preview.start_date,
            recurrence: request.preview.rule,
        }
    }
}

/// ## Summary
/// Reads a request document from `path`, or from stdin when `path` is `None`
/// or `-`.
///
/// ## Errors
/// Returns an error if the input cannot be read.
pub async fn read_input(path: Option<&str>) -> AppResult<String> {
    match path {
        Some(path) if path != "-" => {
            tracing::debug!(path, "Reading request file");
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            tracing::debug!("Reading request from stdin");
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            Ok(input)
        }
    }
}

/// ## Errors
/// Returns an error if `input` is not a valid preview request.
pub fn parse_preview(input: &str) -> AppResult<PreviewRequest> {
    Ok(serde_json::from_str(input)?)
}

/// ## Errors
/// Returns an error if `input` is not a valid schedule request.
pub fn parse_schedule(input: &str) -> AppResult<ScheduleRequest> {
    Ok(serde_json::from_str(input)?)
}
