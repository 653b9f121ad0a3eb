//! Transaction filtering
//!
//! Criteria combine as a conjunction; an unset criterion lets everything
//! through. Filtering borrows from the input and never reorders it.

use chrono::NaiveDate;

use crate::models::{CategoryId, DateRange, PeriodWindow, Transaction, TransactionType};

/// Date criterion with its boundary policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCriterion {
    /// Budget period: `[start, end)`
    Window(PeriodWindow),
    /// Report or dashboard range: `[start, end]`
    Inclusive(DateRange),
}

impl DateCriterion {
    /// Check if a transaction date satisfies the criterion
    ///
    /// Undated transactions never do.
    pub fn matches(&self, date: Option<NaiveDate>) -> bool {
        match (self, date) {
            (_, None) => false,
            (Self::Window(window), Some(date)) => window.contains(date),
            (Self::Inclusive(range), Some(date)) => range.contains(date),
        }
    }
}

/// Filter options for transaction lists
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only transactions in this category
    pub category: Option<CategoryId>,
    /// Only transactions dated inside this window or range
    pub date: Option<DateCriterion>,
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Only transactions of this kind
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    /// A filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category
    pub fn category(mut self, id: CategoryId) -> Self {
        self.category = Some(id);
        self
    }

    /// Restrict to a half-open budget window
    pub fn within_window(mut self, window: PeriodWindow) -> Self {
        self.date = Some(DateCriterion::Window(window));
        self
    }

    /// Restrict to an inclusive date range
    pub fn within_range(mut self, range: DateRange) -> Self {
        self.date = Some(DateCriterion::Inclusive(range));
        self
    }

    /// Restrict to descriptions containing `term` (ignoring case)
    ///
    /// An empty term is treated as no search at all.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    /// Restrict to one transaction kind
    pub fn transaction_type(mut self, kind: TransactionType) -> Self {
        self.transaction_type = Some(kind);
        self
    }

    /// Check if a transaction matches this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(cat_id) = self.category {
            if txn.category_id() != Some(cat_id) {
                return false;
            }
        }

        if let Some(ref criterion) = self.date {
            if !criterion.matches(txn.date) {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            if !txn
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(kind) = self.transaction_type {
            if txn.transaction_type != kind {
                return false;
            }
        }

        true
    }

    /// The matching transactions, in input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}
