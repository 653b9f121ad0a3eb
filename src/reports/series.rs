//! Monthly time series
//!
//! Month-bucketed sums for charts: income against expenses, and one
//! series per category for each transaction kind.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::dates::month_label;
use crate::models::{DateRange, Transaction, TransactionType};
use crate::reports::breakdown::Palettes;

/// `"Mon YYYY"` labels for every month a range touches
pub fn month_labels(range: &DateRange) -> Vec<String> {
    range.months().into_iter().map(month_label).collect()
}

/// Sums per month label, dropping transactions outside the labels
struct MonthBuckets<'a> {
    labels: &'a [String],
    positions: HashMap<&'a str, usize>,
}

impl<'a> MonthBuckets<'a> {
    fn new(labels: &'a [String]) -> Self {
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        Self { labels, positions }
    }

    fn position(&self, txn: &Transaction) -> Option<usize> {
        let date = txn.date?;
        self.positions.get(month_label(date).as_str()).copied()
    }

    fn sums<'t, I>(&self, transactions: I) -> Vec<Decimal>
    where
        I: IntoIterator<Item = &'t Transaction>,
    {
        let mut data = vec![Decimal::ZERO; self.labels.len()];
        let mut dropped = 0usize;
        for txn in transactions {
            match self.position(txn) {
                Some(i) => data[i] = data[i].saturating_add(txn.amount),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::trace!(dropped, "transactions outside the month buckets");
        }
        data
    }
}

/// Income and expense totals per month
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeVsExpenses {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expenses: Vec<Decimal>,
}

impl IncomeVsExpenses {
    /// Bucket incomes and expenses by month label
    pub fn build(labels: &[String], incomes: &[Transaction], expenses: &[Transaction]) -> Self {
        let buckets = MonthBuckets::new(labels);
        Self {
            labels: labels.to_vec(),
            income: buckets.sums(incomes),
            expenses: buckets.sums(expenses),
        }
    }

    /// Iterate over `(label, income, expenses)` rows
    pub fn rows(&self) -> impl Iterator<Item = (&str, Decimal, Decimal)> {
        self.labels
            .iter()
            .zip(&self.income)
            .zip(&self.expenses)
            .map(|((label, income), expenses)| (label.as_str(), *income, *expenses))
    }
}

/// One chart dataset: a category's monthly totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// e.g. "Expense: Food"
    pub label: String,
    /// One value per month label
    pub data: Vec<Decimal>,
    /// Kind of transaction summed
    pub kind: TransactionType,
    /// Stack the dataset belongs to ("Expenses", "Income", "Savings")
    pub stack: String,
    pub color: String,
}

/// Category totals over time for every transaction kind
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

impl TimeSeries {
    /// Build one series per distinct category of each kind
    ///
    /// Categories appear in first-seen order within their kind; colors
    /// cycle through that kind's palette.
    pub fn build(
        labels: &[String],
        expenses: &[Transaction],
        incomes: &[Transaction],
        savings: &[Transaction],
        palettes: &Palettes,
    ) -> Self {
        let buckets = MonthBuckets::new(labels);
        let mut datasets = Vec::new();

        for (kind, transactions) in [
            (TransactionType::Expense, expenses),
            (TransactionType::Income, incomes),
            (TransactionType::Savings, savings),
        ] {
            let palette = palettes.for_kind(kind);
            for (i, category) in distinct_categories(transactions).into_iter().enumerate() {
                let data = buckets.sums(
                    transactions
                        .iter()
                        .filter(|t| t.category_label() == category),
                );
                datasets.push(Series {
                    label: format!("{}: {}", kind.series_prefix(), category),
                    data,
                    kind,
                    stack: kind.stack_name().to_string(),
                    color: super::breakdown::cycle_color(&palette, i),
                });
            }
        }

        Self {
            labels: labels.to_vec(),
            datasets,
        }
    }
}

fn distinct_categories(transactions: &[Transaction]) -> Vec<&str> {
    let mut seen = Vec::new();
    for txn in transactions {
        let label = txn.category_label();
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}
