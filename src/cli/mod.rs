//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the snapshot loader, the engine and the
//! output formatters. Handlers write to any `Write` so they can be driven
//! from tests.

pub mod budget;
pub mod dashboard;
pub mod report;
pub mod transaction;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use std::ops::RangeInclusive;

use crate::error::{FintrackError, FintrackResult};
use crate::models::dates::API_DATE_FORMAT;

pub use budget::{handle_budgets_command, BudgetsArgs};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transactions_command, TransactionsArgs};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width terminal tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

/// Years accepted for command-line dates
pub const DATE_ARG_YEARS: RangeInclusive<i32> = 1..=9999;

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date_arg(input: &str) -> FintrackResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), API_DATE_FORMAT)
        .map_err(|_| FintrackError::invalid_date(input))?;
    if !DATE_ARG_YEARS.contains(&date.year()) {
        return Err(FintrackError::Validation(format!(
            "Date '{}' is out of range, years {} to {} are supported",
            input,
            DATE_ARG_YEARS.start(),
            DATE_ARG_YEARS.end()
        )));
    }
    Ok(date)
}

/// Parse an optional date argument, falling back to `default`
pub fn parse_date_or(input: Option<&str>, default: NaiveDate) -> FintrackResult<NaiveDate> {
    input.map(parse_date_arg).transpose().map(|d| d.unwrap_or(default))
}

fn unsupported_format(command: &str, format: OutputFormat) -> FintrackError {
    FintrackError::Validation(format!(
        "The {} command does not support {:?} output",
        command, format
    ))
}
