//! Transaction model
//!
//! Transactions are read-only snapshots of API records. Every field that
//! old or hand-edited records may get wrong is read leniently: see
//! [`deserialize_amount`], [`deserialize_date`] and
//! [`deserialize_category_ref`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::{deserialize_category_ref, CategoryRef, UNCATEGORIZED_LABEL};
use super::dates::{deserialize_date, deserialize_timestamp};
use super::ids::{CategoryId, TransactionId};
use super::money::deserialize_amount;

/// Kind of a transaction (and of the category that classifies it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
    Savings,
}

impl TransactionType {
    /// Singular label used to prefix time-series names ("Expense: Food")
    pub fn series_prefix(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Savings => "Savings",
        }
    }

    /// Stack name used to group time-series of the same kind
    pub fn stack_name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
            Self::Savings => "Savings",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            "savings" | "saving" => Ok(Self::Savings),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for kind fields; unknown or missing kinds are the default
pub fn deserialize_transaction_type<'de, D>(deserializer: D) -> Result<TransactionType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawText::deserialize(deserializer)? {
        RawText::Text(text) => text.parse().unwrap_or_default(),
        RawText::Other(_) => TransactionType::default(),
    })
}

/// Serde adapter for free-text fields; `null` and non-strings are empty
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawText::deserialize(deserializer)? {
        RawText::Text(text) => text,
        RawText::Other(_) => String::new(),
    })
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,

    /// Amount; unreadable values are zero
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Decimal,

    /// Transaction date; unreadable values are `None`
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,

    /// Category reference (id or inlined object)
    #[serde(default, deserialize_with = "deserialize_category_ref")]
    pub category: Option<CategoryRef>,

    /// Category name denormalized by the API
    #[serde(default)]
    pub category_name: Option<String>,

    /// Income, expense or savings
    #[serde(default, deserialize_with = "deserialize_transaction_type")]
    pub transaction_type: TransactionType,

    /// When the record was created; unreadable values are `None`
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        transaction_type: TransactionType,
        date: NaiveDate,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            description: String::new(),
            amount,
            date: Some(date),
            category: None,
            category_name: None,
            transaction_type,
            created_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a category by id together with its denormalized name
    pub fn with_category(mut self, id: CategoryId, name: impl Into<String>) -> Self {
        self.category = Some(CategoryRef::ById(id));
        self.category_name = Some(name.into());
        self
    }

    /// The normalized category id, if the record has a usable category
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(CategoryRef::id)
    }

    /// Name used for grouping: the denormalized name, then the inlined
    /// name, then "Uncategorized"
    pub fn category_label(&self) -> &str {
        self.category_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.category.as_ref().and_then(CategoryRef::inline_name))
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{} {} {}", date, self.description, self.amount),
            None => write!(f, "(undated) {} {}", self.description, self.amount),
        }
    }
}
