//! Financial report formatting

use crate::display::table::{double_separator, format_header, format_percent, separator, truncate};
use crate::models::format_money;
use crate::reports::{Breakdown, FinancialReport, IncomeVsExpenses, TimeSeries};

const WIDTH: usize = 60;

/// Format a category breakdown section
pub fn format_breakdown(title: &str, breakdown: &Breakdown, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if breakdown.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for (label, value, pct, _) in breakdown.rows() {
        output.push_str(&format!(
            "  {:<30} {:>14} {:>8}\n",
            truncate(label, 30),
            format_money(value, symbol),
            format_percent(pct)
        ));
    }
    output
}

/// Format the monthly income vs expenses table
pub fn format_income_vs_expenses(chart: &IncomeVsExpenses, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<10} {:>14} {:>14}\n", "Month", "Income", "Expenses"));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for (label, income, expenses) in chart.rows() {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            label,
            format_money(income, symbol),
            format_money(expenses, symbol)
        ));
    }
    output
}

/// Format category totals over time, one line per series
pub fn format_time_series(series: &TimeSeries, symbol: &str) -> String {
    let mut output = String::new();
    for dataset in &series.datasets {
        let values: Vec<String> = dataset
            .data
            .iter()
            .map(|v| format_money(*v, symbol))
            .collect();
        output.push_str(&format!("  {:<28} {}\n", truncate(&dataset.label, 28), values.join("  ")));
    }
    output
}

/// Format a complete financial report
pub fn format_financial_report(report: &FinancialReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_header("FINANCIAL REPORT", WIDTH));
    output.push('\n');
    output.push_str(&format_header(&report.range.to_string(), WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push_str("\n\n");

    output.push_str(&format!("  {:<20} {:>14}\n", "Income:", format_money(report.totals.income, symbol)));
    output.push_str(&format!("  {:<20} {:>14}\n", "Expenses:", format_money(report.totals.expenses, symbol)));
    output.push_str(&format!("  {:<20} {:>14}\n", "Savings:", format_money(report.totals.savings, symbol)));
    output.push_str(&format!("  {:<20} {:>14}\n\n", "Net balance:", format_money(report.net_balance, symbol)));

    output.push_str(&format_income_vs_expenses(&report.income_vs_expenses, symbol));
    output.push('\n');
    output.push_str(&format_breakdown("Expenses by category", &report.expense_breakdown, symbol));
    output.push('\n');
    output.push_str(&format_breakdown("Income by category", &report.income_breakdown, symbol));
    output.push('\n');
    output.push_str(&format_breakdown("Savings by category", &report.savings_breakdown, symbol));

    if !report.category_spending_over_time.datasets.is_empty() {
        output.push('\n');
        output.push_str(&format!("Over time ({})\n", report.labels().join(", ")));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format_time_series(&report.category_spending_over_time, symbol));
    }

    output
}
