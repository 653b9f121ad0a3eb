//! Budget CLI command
//!
//! Evaluates every budget in a snapshot against its expenses.

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::settings::Settings;
use crate::display::format_budget_statuses;
use crate::error::FintrackResult;
use crate::export::{export_budget_statuses_csv, export_json};
use crate::services::BudgetEvaluator;
use crate::snapshot::Snapshot;

/// Arguments for `fintrack budgets`
#[derive(Args, Debug)]
pub struct BudgetsArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Only show budgets that are over their limit
    #[arg(long)]
    pub over: bool,
}

/// Handle the budgets command
pub fn handle_budgets_command<W: Write>(
    args: BudgetsArgs,
    settings: &Settings,
    format: OutputFormat,
    today: chrono::NaiveDate,
    out: &mut W,
) -> FintrackResult<()> {
    let snapshot = Snapshot::load(&args.snapshot)?;

    let evaluator = BudgetEvaluator::new(&snapshot.expenses, &snapshot.categories);
    let mut statuses = evaluator.evaluate_all(&snapshot.budgets);
    if args.over {
        statuses.retain(|s| s.is_over_budget());
    }

    match format {
        OutputFormat::Table => {
            write!(out, "{}", format_budget_statuses(&statuses, &settings.currency_symbol))?;
        }
        OutputFormat::Json => export_json(&statuses, today, out)?,
        OutputFormat::Csv => export_budget_statuses_csv(&statuses, out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn snapshot_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{
                "budgets": [
                    {"id": 1, "category": {"id": 4, "name": "Groceries"}, "amount": "500",
                     "period": "monthly", "start_date": "2025-01-01"},
                    {"id": 2, "category": 5, "amount": "20", "period": "weekly",
                     "start_date": "2025-01-01"}
                ],
                "categories": [{"id": 5, "name": "Coffee"}],
                "expenses": [
                    {"id": 1, "amount": "200", "date": "2025-01-05", "category": 4},
                    {"id": 2, "amount": "10", "date": "2025-01-31", "category": 4},
                    {"id": 3, "amount": "35", "date": "2025-01-02", "category": 5}
                ]
            }"#,
        )
        .unwrap();
        path
    }

    fn run(args: BudgetsArgs, format: OutputFormat) -> String {
        let mut out = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        handle_budgets_command(args, &Settings::default(), format, today, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_budget_table() {
        let dir = TempDir::new().unwrap();
        let output = run(
            BudgetsArgs { snapshot: snapshot_file(&dir), over: false },
            OutputFormat::Table,
        );
        assert!(output.contains("Groceries"));
        assert!(output.contains("$210.00"));
        assert!(output.contains("42.0%"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("1 budget(s) over limit"));
    }

    #[test]
    fn test_over_only_json() {
        let dir = TempDir::new().unwrap();
        let output = run(
            BudgetsArgs { snapshot: snapshot_file(&dir), over: true },
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["category_name"], "Coffee");
        assert_eq!(data[0]["percent"], "100");
    }
}
