//! Report CLI command
//!
//! Builds the trailing-months financial report from a snapshot, whole or
//! one section at a time.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use super::{parse_date_or, OutputFormat};
use crate::config::settings::Settings;
use crate::display::format_financial_report;
use crate::display::report::{format_breakdown, format_time_series};
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_breakdown_csv, export_json, export_report_csv, export_time_series_csv};
use crate::reports::{Breakdown, FinancialReport};
use crate::models::period::MAX_TRAILING_MONTHS;
use crate::snapshot::Snapshot;

/// Part of the report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportSection {
    /// Totals, monthly chart, breakdowns and series
    #[default]
    All,
    /// Expenses by category
    ExpenseBreakdown,
    /// Income by category
    IncomeBreakdown,
    /// Savings by category
    SavingsBreakdown,
    /// Category totals per month
    OverTime,
}

impl ReportSection {
    fn breakdown<'r>(&self, report: &'r FinancialReport) -> Option<(&'static str, &'r Breakdown)> {
        match self {
            Self::ExpenseBreakdown => Some(("Expenses by category", &report.expense_breakdown)),
            Self::IncomeBreakdown => Some(("Income by category", &report.income_breakdown)),
            Self::SavingsBreakdown => Some(("Savings by category", &report.savings_breakdown)),
            Self::All | Self::OverTime => None,
        }
    }
}

/// Arguments for `fintrack report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Number of trailing months, including the current one
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,

    /// Only print one section of the report
    #[arg(long, value_enum, default_value_t = ReportSection::All)]
    pub section: ReportSection,
}

/// Handle the report command
pub fn handle_report_command<W: Write>(
    args: ReportArgs,
    settings: &Settings,
    format: OutputFormat,
    clock_today: NaiveDate,
    out: &mut W,
) -> FintrackResult<()> {
    let today = parse_date_or(args.today.as_deref(), clock_today)?;
    let months = args.months.unwrap_or(settings.default_range_months);
    if months > MAX_TRAILING_MONTHS {
        return Err(FintrackError::Validation(format!(
            "--months must be at most {}",
            MAX_TRAILING_MONTHS
        )));
    }

    let snapshot = Snapshot::load(&args.snapshot)?;
    let report = settings.report_builder().range_months(months).build(
        &snapshot.expenses,
        &snapshot.incomes,
        &snapshot.savings,
        today,
    );

    let symbol = &settings.currency_symbol;
    if let Some((title, breakdown)) = args.section.breakdown(&report) {
        match format {
            OutputFormat::Table => write!(out, "{}", format_breakdown(title, breakdown, symbol))?,
            OutputFormat::Json => export_json(breakdown, today, out)?,
            OutputFormat::Csv => export_breakdown_csv(breakdown, out)?,
        }
        return Ok(());
    }

    let series = &report.category_spending_over_time;
    match (args.section, format) {
        (ReportSection::OverTime, OutputFormat::Table) => {
            write!(out, "{}", format_time_series(series, symbol))?;
        }
        (ReportSection::OverTime, OutputFormat::Json) => export_json(series, today, out)?,
        (ReportSection::OverTime, OutputFormat::Csv) => export_time_series_csv(series, out)?,
        (_, OutputFormat::Table) => {
            write!(out, "{}", format_financial_report(&report, symbol))?;
        }
        (_, OutputFormat::Json) => export_json(&report, today, out)?,
        (_, OutputFormat::Csv) => export_report_csv(&report, out)?,
    }

    Ok(())
}
