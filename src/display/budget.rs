//! Budget status display formatting

use crate::display::table::{format_bar, format_percent, separator, truncate};
use crate::models::format_money;
use crate::services::{BudgetStatus, BudgetTier};

const BAR_WIDTH: usize = 10;

fn tier_marker(status: &BudgetStatus) -> &'static str {
    if status.is_over_budget() {
        return "OVER";
    }
    match status.tier() {
        BudgetTier::Healthy => "",
        BudgetTier::Warning => "!",
        BudgetTier::Critical => "!!",
    }
}

/// Format one budget as a table row
pub fn format_budget_row(status: &BudgetStatus, symbol: &str) -> String {
    format!(
        "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7} {} {}",
        truncate(&status.category_name, 20),
        status.period.to_string(),
        format_money(status.amount, symbol),
        format_money(status.spent, symbol),
        format_money(status.remaining, symbol),
        format_percent(status.percent),
        format_bar(status.percent, BAR_WIDTH),
        tier_marker(status)
    )
    .trim_end()
    .to_string()
}

/// Format a list of budget statuses as a table
pub fn format_budget_statuses(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:<8} {:>12} {:>12} {:>12} {:>7}\n",
        "Category", "Period", "Budgeted", "Spent", "Remaining", "Used"
    ));
    output.push_str(&separator(86));
    output.push('\n');

    for status in statuses {
        output.push_str(&format_budget_row(status, symbol));
        output.push('\n');
    }

    let over = statuses.iter().filter(|s| s.is_over_budget()).count();
    if over > 0 {
        output.push_str(&format!("\n{} budget(s) over limit\n", over));
    }

    output
}
