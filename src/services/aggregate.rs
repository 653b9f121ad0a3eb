//! Reductions over transaction lists
//!
//! Sums, ordered group sums and percentage shares. Group keys keep the
//! order in which they first appear in the input; breakdown labels and
//! color assignment depend on it.

use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::Transaction;

/// Decimal places kept on percentage shares
pub const PERCENT_DECIMALS: u32 = 1;

/// Sum of the amounts
pub fn sum<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

/// Per-key totals in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedTotals {
    labels: Vec<String>,
    values: Vec<Decimal>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GroupedTotals {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, appending the key if it is new
    pub fn add(&mut self, key: impl Into<String>, amount: Decimal) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.values[i] = self.values[i].saturating_add(amount),
            None => {
                self.index.insert(key.clone(), self.labels.len());
                self.labels.push(key);
                self.values.push(amount);
            }
        }
    }

    /// Total for `key`, if it was seen
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.index.get(key).map(|&i| self.values[i])
    }

    /// Keys in first-occurrence order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Totals, index-aligned with [`labels`](Self::labels)
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Iterate over `(key, total)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum of every group
    pub fn total(&self) -> Decimal {
        self.values
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no group was seen
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Split into `(labels, values)`
    pub fn into_parts(self) -> (Vec<String>, Vec<Decimal>) {
        (self.labels, self.values)
    }
}

/// Sum amounts per key
pub fn group_sum<'a, I, K, F>(transactions: I, mut key_fn: F) -> GroupedTotals
where
    I: IntoIterator<Item = &'a Transaction>,
    F: FnMut(&Transaction) -> K,
    K: Into<String>,
{
    let mut totals = GroupedTotals::new();
    for txn in transactions {
        totals.add(key_fn(txn), txn.amount);
    }
    totals
}

/// Sum amounts per category name ("Uncategorized" when missing)
pub fn group_by_category<'a, I>(transactions: I) -> GroupedTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_sum(transactions, |t| t.category_label().to_string())
}

/// Share of the total for each value, in percent with one decimal
///
/// A zero total yields zero for every entry rather than an undefined
/// share.
pub fn percentages(values: &[Decimal]) -> Vec<Decimal> {
    let total = values
        .iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v));
    values.iter().map(|v| percent_of(*v, total)).collect()
}

/// `value / total * 100`, rounded to one decimal; zero when undefined
pub fn percent_of(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .map(|share| {
            share.round_dp_with_strategy(PERCENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        })
        .unwrap_or(Decimal::ZERO)
}
