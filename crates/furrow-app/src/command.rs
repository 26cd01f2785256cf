//! Command parsing and dispatch for the `furrow` binary.

use furrow_core::config::Settings;
use furrow_domain::order::{StatusDisplay, legacy_order_status_display, order_status_display};
use furrow_domain::recurrence::{ExpansionLimits, expand_with_limits};
use furrow_service::calendar::{CreateEventContext, create_event, series};
use furrow_store::store::connection::create_store;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::request::{parse_preview, parse_schedule, read_input};

pub const USAGE: &str = "\
usage: furrow <command> [args]

commands:
  preview [FILE]         expand {\"startDate\", \"rule\"} into dates
  schedule [FILE]        create a calendar event and print its series
  status <CODE>          label and colour of an order status
  legacy-status <CODE>   label and colour of a legacy order status

FILE defaults to stdin.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Preview { input: Option<String> },
    Schedule { input: Option<String> },
    Status { code: String },
    LegacyStatus { code: String },
    Help,
}

impl Command {
    /// ## Summary
    /// Parses the arguments that follow the program name.
    ///
    /// ## Errors
    /// Returns `AppError::Usage` for unknown commands or missing arguments.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Self::Help);
        };

        let command = match name.as_str() {
            "preview" => Self::Preview { input: args.next() },
            "schedule" => Self::Schedule { input: args.next() },
            "status" => Self::Status {
                code: required(args.next(), "status")?,
            },
            "legacy-status" => Self::LegacyStatus {
                code: required(args.next(), "legacy-status")?,
            },
            "help" | "-h" | "--help" => Self::Help,
            other => return Err(AppError::Usage(format!("unknown command `{other}`"))),
        };

        if let Some(extra) = args.next() {
            return Err(AppError::Usage(format!("unexpected argument `{extra}`")));
        }

        Ok(command)
    }
}

fn required(arg: Option<String>, command: &str) -> AppResult<String> {
    arg.ok_or_else(|| AppError::Usage(format!("`{command}` needs a status code")))
}

fn render<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(AppError::Output)
}

fn status_line(code: &str, display: &StatusDisplay) -> String {
    format!("{code}\t{}\t{}", display.label, display.color)
}

/// ## Summary
/// Runs `command` and returns what should be printed on stdout.
///
/// ## Errors
/// Returns an error if input cannot be read or parsed, or a store operation
/// fails.
#[tracing::instrument(skip(settings))]
pub async fn run(command: Command, settings: &Settings) -> AppResult<String> {
    let limits = ExpansionLimits::from(&settings.schedule);

    match command {
        Command::Preview { input } => {
            let request = parse_preview(&read_input(input.as_deref()).await?)?;
            let dates = expand_with_limits(request.start_date, &request.rule, limits);
            tracing::info!(count = dates.len(), "Previewed recurrence");
            render(&dates)
        }
        Command::Schedule { input } => {
            let ctx = CreateEventContext::from(parse_schedule(&read_input(input.as_deref()).await?)?);
            let store = create_store(&settings.store);
            let created = create_event(&*store, &ctx, limits).await?;
            let events = series(&*store, created.parent_id).await?;
            render(&events)
        }
        Command::Status { code } => Ok(status_line(&code, &order_status_display(&code))),
        Command::LegacyStatus { code } => {
            Ok(status_line(&code, &legacy_order_status_display(&code)))
        }
        Command::Help => Ok(USAGE.to_string()),
    }
}
