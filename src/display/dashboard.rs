//! Dashboard formatting

use crate::display::budget::format_budget_row;
use crate::display::report::{format_breakdown, format_income_vs_expenses};
use crate::display::table::{double_separator, format_header, separator};
use crate::display::transaction::format_transaction_row;
use crate::models::format_money;
use crate::reports::DashboardSummary;

const WIDTH: usize = 60;

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_header("DASHBOARD", WIDTH));
    output.push('\n');
    output.push_str(&format_header(&summary.range.to_string(), WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push_str("\n\n");

    output.push_str(&format!(
        "  {:<20} {:>14}\n",
        "Current balance:",
        format_money(summary.current_balance, symbol)
    ));
    output.push_str(&format!("  {:<20} {:>14}\n", "Income:", format_money(summary.totals.income, symbol)));
    output.push_str(&format!("  {:<20} {:>14}\n", "Expenses:", format_money(summary.totals.expenses, symbol)));
    output.push_str(&format!("  {:<20} {:>14}\n\n", "Savings:", format_money(summary.totals.savings, symbol)));

    output.push_str(&format_income_vs_expenses(&summary.income_vs_expenses, symbol));
    output.push('\n');
    output.push_str(&format_breakdown("Expenses by category", &summary.expense_breakdown, symbol));
    output.push('\n');

    output.push_str("Recent transactions\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if summary.recent_transactions.is_empty() {
        output.push_str("  (none)\n");
    }
    for txn in &summary.recent_transactions {
        output.push_str(&format!("  {}\n", format_transaction_row(txn, symbol, date_format)));
    }
    output.push('\n');

    output.push_str("Recent budgets\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if summary.recent_budgets.is_empty() {
        output.push_str("  (none)\n");
    }
    for status in &summary.recent_budgets {
        output.push_str(&format!("  {}\n", format_budget_row(status, symbol)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, DateRange, Transaction, TransactionId, TransactionType};
    use crate::reports::{DashboardBuilder, DashboardInput, Palettes};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_dashboard() {
        let incomes = vec![Transaction::new(
            TransactionId::new(1),
            TransactionType::Income,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            dec!(2500),
        )
        .with_description("Salary")
        .with_category(CategoryId::new(9), "Job")];

        let palettes = Palettes::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let summary = DashboardBuilder::new(&palettes).build(
            DashboardInput {
                incomes: &incomes,
                ..Default::default()
            },
            DateRange::trailing_days(today, 30),
        );
        let formatted = format_dashboard(&summary, "$", "%Y-%m-%d");

        assert!(formatted.contains("DASHBOARD"));
        assert!(formatted.contains("$2500.00"));
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("Recent budgets"));
    }
}
