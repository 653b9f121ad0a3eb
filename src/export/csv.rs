//! CSV export functionality
//!
//! Amounts are written as plain decimals with two places so spreadsheets
//! read them as numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::reports::{Breakdown, FinancialReport, IncomeVsExpenses, TimeSeries};
use crate::models::Transaction;
use crate::services::BudgetStatus;

fn amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn writer<W: Write>(out: W) -> ::csv::Writer<W> {
    ::csv::Writer::from_writer(out)
}

fn finish<W: Write>(mut wtr: ::csv::Writer<W>) -> FintrackResult<()> {
    wtr.flush()
        .map_err(|e| FintrackError::Export(format!("Failed to flush CSV: {}", e)))
}

/// Export a category breakdown: `Category,Amount,Percent,Color`
pub fn export_breakdown_csv<W: Write>(breakdown: &Breakdown, out: W) -> FintrackResult<()> {
    let mut wtr = writer(out);
    wtr.write_record(["Category", "Amount", "Percent", "Color"])?;
    for (label, value, pct, color) in breakdown.rows() {
        wtr.write_record([label, amount(value).as_str(), format!("{:.1}", pct).as_str(), color])?;
    }
    finish(wtr)
}

/// Export the monthly series: one row per month, one column per dataset
pub fn export_time_series_csv<W: Write>(series: &TimeSeries, out: W) -> FintrackResult<()> {
    let mut wtr = writer(out);

    let mut header = vec!["Month".to_string()];
    header.extend(series.datasets.iter().map(|s| s.label.clone()));
    wtr.write_record(&header)?;

    for (i, label) in series.labels.iter().enumerate() {
        let mut row = vec![label.clone()];
        row.extend(
            series
                .datasets
                .iter()
                .map(|s| amount(s.data.get(i).copied().unwrap_or_default())),
        );
        wtr.write_record(&row)?;
    }
    finish(wtr)
}

fn write_income_vs_expenses<W: Write>(
    wtr: &mut ::csv::Writer<W>,
    chart: &IncomeVsExpenses,
) -> FintrackResult<()> {
    for (label, income, expenses) in chart.rows() {
        wtr.write_record(["month", label, "Income", amount(income).as_str(), ""])?;
        wtr.write_record(["month", label, "Expenses", amount(expenses).as_str(), ""])?;
    }
    Ok(())
}

fn write_breakdown<W: Write>(
    wtr: &mut ::csv::Writer<W>,
    section: &str,
    breakdown: &Breakdown,
) -> FintrackResult<()> {
    for (label, value, pct, _) in breakdown.rows() {
        wtr.write_record([section, label, "", amount(value).as_str(), format!("{:.1}", pct).as_str()])?;
    }
    Ok(())
}

/// Export a whole report as `Section,Key,Series,Amount,Percent` rows
pub fn export_report_csv<W: Write>(report: &FinancialReport, out: W) -> FintrackResult<()> {
    let mut wtr = writer(out);
    wtr.write_record(["Section", "Key", "Series", "Amount", "Percent"])?;

    wtr.write_record(["total", "income", "", amount(report.totals.income).as_str(), ""])?;
    wtr.write_record(["total", "expenses", "", amount(report.totals.expenses).as_str(), ""])?;
    wtr.write_record(["total", "savings", "", amount(report.totals.savings).as_str(), ""])?;
    wtr.write_record(["total", "net_balance", "", amount(report.net_balance).as_str(), ""])?;

    write_income_vs_expenses(&mut wtr, &report.income_vs_expenses)?;
    write_breakdown(&mut wtr, "expense", &report.expense_breakdown)?;
    write_breakdown(&mut wtr, "income", &report.income_breakdown)?;
    write_breakdown(&mut wtr, "savings", &report.savings_breakdown)?;

    let over_time = &report.category_spending_over_time;
    for dataset in &over_time.datasets {
        for (label, value) in over_time.labels.iter().zip(&dataset.data) {
            wtr.write_record(["series", label.as_str(), dataset.label.as_str(), amount(*value).as_str(), ""])?;
        }
    }

    finish(wtr)
}

/// Export transactions: `ID,Date,Type,Description,Category,Amount`
pub fn export_transactions_csv<'a, I, W>(transactions: I, out: W) -> FintrackResult<()>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut wtr = writer(out);
    wtr.write_record(["ID", "Date", "Type", "Description", "Category", "Amount"])?;
    for txn in transactions {
        let date = txn.date.map(|d: NaiveDate| d.to_string()).unwrap_or_default();
        wtr.write_record([
            txn.id.get().to_string(),
            date,
            txn.transaction_type.to_string(),
            txn.description.clone(),
            txn.category_label().to_string(),
            amount(txn.amount),
        ])?;
    }
    finish(wtr)
}

/// Export budget statuses: `Budget,Category,Period,Start,End,Amount,Spent,Remaining,Percent`
pub fn export_budget_statuses_csv<W: Write>(statuses: &[BudgetStatus], out: W) -> FintrackResult<()> {
    let mut wtr = writer(out);
    wtr.write_record([
        "Budget", "Category", "Period", "Start", "End", "Amount", "Spent", "Remaining", "Percent",
    ])?;
    for status in statuses {
        let (start, end) = status
            .window
            .map(|w| (w.start.to_string(), w.end.to_string()))
            .unwrap_or_default();
        wtr.write_record([
            status.budget_id.get().to_string(),
            status.category_name.clone(),
            status.period.to_string(),
            start,
            end,
            amount(status.amount),
            amount(status.spent),
            amount(status.remaining),
            format!("{:.1}", status.percent),
        ])?;
    }
    finish(wtr)
}
