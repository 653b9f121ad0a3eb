//! Transactions CLI command
//!
//! Lists and filters the transactions of a snapshot.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use super::{parse_date_or, OutputFormat};
use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_json, export_transactions_csv};
use crate::models::{CategoryId, DateRange, Transaction, TransactionType};
use crate::services::{sort_transactions, TransactionFilter, TransactionOrder};
use crate::snapshot::Snapshot;

/// Amount ordering for `--sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmountSort {
    /// Smallest amount first
    AmountAsc,
    /// Largest amount first
    AmountDesc,
}

impl From<Option<AmountSort>> for TransactionOrder {
    fn from(sort: Option<AmountSort>) -> Self {
        match sort {
            None => TransactionOrder::Newest,
            Some(AmountSort::AmountAsc) => TransactionOrder::AmountAscending,
            Some(AmountSort::AmountDesc) => TransactionOrder::AmountDescending,
        }
    }
}

/// Arguments for `fintrack transactions`
#[derive(Args, Debug, Default)]
pub struct TransactionsArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Only descriptions containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only one kind: income, expense or savings
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Only this category id
    #[arg(short, long)]
    pub category: Option<i64>,

    /// First day included (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day included (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Order by amount instead of newest first
    #[arg(long, value_enum)]
    pub sort: Option<AmountSort>,
}

/// Build the filter described by the arguments
pub fn build_filter(args: &TransactionsArgs) -> FintrackResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();

    if let Some(ref term) = args.search {
        filter = filter.search(term.clone());
    }

    if let Some(ref kind) = args.kind {
        let kind: TransactionType = kind.parse().map_err(FintrackError::Validation)?;
        filter = filter.transaction_type(kind);
    }

    if let Some(id) = args.category {
        filter = filter.category(CategoryId::new(id));
    }

    if args.start.is_some() || args.end.is_some() {
        let start = parse_date_or(args.start.as_deref(), NaiveDate::MIN)?;
        let end = parse_date_or(args.end.as_deref(), NaiveDate::MAX)?;
        if start > end {
            return Err(FintrackError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        filter = filter.within_range(DateRange::new(start, end));
    }

    Ok(filter)
}

/// Handle the transactions command
pub fn handle_transactions_command<W: Write>(
    args: TransactionsArgs,
    settings: &Settings,
    format: OutputFormat,
    today: NaiveDate,
    out: &mut W,
) -> FintrackResult<()> {
    let filter = build_filter(&args)?;
    let snapshot = Snapshot::load(&args.snapshot)?;

    let mut matches: Vec<&Transaction> = snapshot
        .all_transactions()
        .filter(|t| filter.matches(t))
        .collect();
    sort_transactions(&mut matches, args.sort.into());
    tracing::debug!(matched = matches.len(), "filtered transactions");

    match format {
        OutputFormat::Table => write!(
            out,
            "{}",
            format_transaction_list(
                matches.iter().copied(),
                &settings.currency_symbol,
                &settings.date_format
            )
        )?,
        OutputFormat::Json => export_json(&matches, today, out)?,
        OutputFormat::Csv => export_transactions_csv(matches.iter().copied(), out)?,
    }

    Ok(())
}
