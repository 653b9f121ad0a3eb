//! Dashboard CLI command

use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::{parse_date_arg, parse_date_or, unsupported_format, OutputFormat};
use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_json;
use crate::models::DateRange;
use crate::reports::dashboard::DEFAULT_RANGE_DAYS;
use crate::reports::DashboardInput;
use crate::snapshot::Snapshot;

/// Arguments for `fintrack dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// First day of the range (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

/// Resolve the inclusive dashboard range from the arguments
///
/// A missing end is `today`; a missing start is thirty days before the end.
pub fn resolve_range(args: &DashboardArgs, clock_today: NaiveDate) -> FintrackResult<DateRange> {
    let today = parse_date_or(args.today.as_deref(), clock_today)?;
    let end = parse_date_or(args.end.as_deref(), today)?;
    let start = match args.start.as_deref() {
        Some(s) => parse_date_arg(s)?,
        None => DateRange::trailing_days(end, DEFAULT_RANGE_DAYS).start,
    };

    if start > end {
        return Err(FintrackError::Validation(format!(
            "Start date {} is after end date {}",
            start, end
        )));
    }
    Ok(DateRange::new(start, end))
}

/// Handle the dashboard command
pub fn handle_dashboard_command<W: Write>(
    args: DashboardArgs,
    settings: &Settings,
    format: OutputFormat,
    clock_today: NaiveDate,
    out: &mut W,
) -> FintrackResult<()> {
    if format == OutputFormat::Csv {
        return Err(unsupported_format("dashboard", format));
    }

    let range = resolve_range(&args, clock_today)?;
    let snapshot = Snapshot::load(&args.snapshot)?;
    let input = DashboardInput {
        expenses: &snapshot.expenses,
        incomes: &snapshot.incomes,
        savings: &snapshot.savings,
        budgets: &snapshot.budgets,
        categories: &snapshot.categories,
    };
    let summary = settings.dashboard_builder().build(input, range);

    match format {
        OutputFormat::Json => export_json(&summary, range.end, out)?,
        _ => write!(
            out,
            "{}",
            format_dashboard(&summary, &settings.currency_symbol, &settings.date_format)
        )?,
    }

    Ok(())
}
