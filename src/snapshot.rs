//! Record snapshots
//!
//! A snapshot is one JSON document holding everything the engine reads:
//! categories, budgets and the three transaction lists, in the shapes the
//! finance API returns them. Every key is optional.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, Category, Transaction, TransactionType};

/// Already-fetched records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
    #[serde(default)]
    pub incomes: Vec<Transaction>,
    #[serde(default)]
    pub savings: Vec<Transaction>,
}

impl Snapshot {
    /// Read a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> FintrackResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FintrackError::Snapshot(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            FintrackError::Snapshot(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            FintrackError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let snapshot = snapshot.normalized();
        tracing::debug!(
            path = %path.display(),
            categories = snapshot.categories.len(),
            budgets = snapshot.budgets.len(),
            expenses = snapshot.expenses.len(),
            incomes = snapshot.incomes.len(),
            savings = snapshot.savings.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> FintrackResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| FintrackError::Snapshot(format!("Failed to parse snapshot: {}", e)))?;
        Ok(snapshot.normalized())
    }

    /// Tag each transaction with the kind of the list it came from
    fn normalized(mut self) -> Self {
        for (kind, list) in [
            (TransactionType::Expense, &mut self.expenses),
            (TransactionType::Income, &mut self.incomes),
            (TransactionType::Savings, &mut self.savings),
        ] {
            for txn in list.iter_mut() {
                txn.transaction_type = kind;
            }
        }
        self
    }

    /// Every transaction, expenses first, then incomes, then savings
    pub fn all_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.expenses
            .iter()
            .chain(&self.incomes)
            .chain(&self.savings)
    }
}
