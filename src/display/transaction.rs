//! Transaction display formatting

use crate::display::table::{separator, truncate};
use crate::models::dates::format_date;
use crate::models::{format_money, Transaction};

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let date = txn
        .date
        .map(|d| format_date(d, date_format))
        .unwrap_or_else(|| "-".to_string());

    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        &txn.description
    };

    format!(
        "{:<12} {:<8} {:<24} {:<16} {:>12}",
        date,
        txn.transaction_type.to_string(),
        truncate(description, 24),
        truncate(txn.category_label(), 16),
        format_money(txn.amount, symbol)
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_list<'a, I>(transactions: I, symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = String::new();
    let mut count = 0usize;
    for txn in transactions {
        rows.push_str(&format_transaction_row(txn, symbol, date_format));
        rows.push('\n');
        count += 1;
    }

    if count == 0 {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<8} {:<24} {:<16} {:>12}\n",
        "Date", "Type", "Description", "Category", "Amount"
    ));
    output.push_str(&separator(76));
    output.push('\n');
    output.push_str(&rows);
    output.push_str(&format!("\n{} transaction(s)\n", count));
    output
}
