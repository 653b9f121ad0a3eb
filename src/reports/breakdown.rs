//! Category breakdowns
//!
//! A breakdown splits a transaction set by category into four parallel
//! sequences: labels, totals, percentage shares and chart colors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::models::{Transaction, TransactionType};
use crate::services::aggregate::{group_by_category, percentages};

/// Default expense palette
pub const EXPENSE_PALETTE: [&str; 7] = [
    "#ff6767", "#ff7878", "#ff8989", "#ffaaaa", "#ffcfcf", "#ffe3e3", "#ffeeee",
];

/// Default income palette
pub const INCOME_PALETTE: [&str; 5] = ["#47894b", "#5ea758", "#8bbd78", "#98c377", "#7be382"];

/// Default savings palette
pub const SAVINGS_PALETTE: [&str; 6] = [
    "#1c96c5", "#20a7db", "#62c1e5", "#a0d9ef", "#cfecf7", "#d2ebff",
];

/// Chart colors per transaction kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palettes {
    #[serde(default = "default_expense_palette")]
    pub expense: Vec<String>,
    #[serde(default = "default_income_palette")]
    pub income: Vec<String>,
    #[serde(default = "default_savings_palette")]
    pub savings: Vec<String>,
}

fn to_owned_palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

fn default_expense_palette() -> Vec<String> {
    to_owned_palette(&EXPENSE_PALETTE)
}

fn default_income_palette() -> Vec<String> {
    to_owned_palette(&INCOME_PALETTE)
}

fn default_savings_palette() -> Vec<String> {
    to_owned_palette(&SAVINGS_PALETTE)
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            expense: default_expense_palette(),
            income: default_income_palette(),
            savings: default_savings_palette(),
        }
    }
}

impl Palettes {
    /// Palette for a transaction kind
    ///
    /// An empty configured palette falls back to the built-in one so every
    /// label still gets a color.
    pub fn for_kind(&self, kind: TransactionType) -> Cow<'_, [String]> {
        let (configured, fallback): (&Vec<String>, &[&str]) = match kind {
            TransactionType::Expense => (&self.expense, &EXPENSE_PALETTE[..]),
            TransactionType::Income => (&self.income, &INCOME_PALETTE[..]),
            TransactionType::Savings => (&self.savings, &SAVINGS_PALETTE[..]),
        };
        if configured.is_empty() {
            Cow::Owned(to_owned_palette(fallback))
        } else {
            Cow::Borrowed(configured.as_slice())
        }
    }

    /// Color for the `index`-th series or label, cycling through the palette
    pub fn color(&self, kind: TransactionType, index: usize) -> String {
        cycle_color(&self.for_kind(kind), index)
    }
}

/// `palette[index % len]`; empty when the palette is empty
pub fn cycle_color(palette: &[String], index: usize) -> String {
    if palette.is_empty() {
        return String::new();
    }
    palette[index % palette.len()].clone()
}

/// Category breakdown of a transaction set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Breakdown {
    /// Category names in first-seen order
    pub labels: Vec<String>,
    /// Total per category
    pub values: Vec<Decimal>,
    /// Share of the total in percent, one decimal
    pub percentages: Vec<Decimal>,
    /// Chart color per category
    pub colors: Vec<String>,
}

impl Breakdown {
    /// Group transactions by category and assign palette colors by position
    pub fn from_transactions<'a, I>(transactions: I, palette: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (labels, values) = group_by_category(transactions).into_parts();
        let percentages = percentages(&values);
        let colors = (0..labels.len()).map(|i| cycle_color(palette, i)).collect();

        Self {
            labels,
            values,
            percentages,
            colors,
        }
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the breakdown has no categories
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all category totals
    pub fn total(&self) -> Decimal {
        self.values
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }

    /// Iterate over rows as `(label, value, percentage, color)`
    pub fn rows(&self) -> impl Iterator<Item = (&str, Decimal, Decimal, &str)> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.percentages)
            .zip(&self.colors)
            .map(|(((label, value), pct), color)| (label.as_str(), *value, *pct, color.as_str()))
    }
}
