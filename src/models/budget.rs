//! Budget model
//!
//! A budget caps spending in one category over a recurring period that
//! starts on `start_date`. Its current window and spent amount are
//! derived on every read and never stored.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{deserialize_category_ref, CategoryRef};
use super::dates::{deserialize_date, deserialize_timestamp};
use super::ids::BudgetId;
use super::money::deserialize_amount;

/// How often a budget recurs
///
/// The API also emits `yearly`; like any value the window math does not
/// know, it deserializes to [`BudgetPeriodKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriodKind {
    #[default]
    Monthly,
    Weekly,
    Once,
    #[serde(other)]
    Other,
}

impl fmt::Display for BudgetPeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Once => write!(f, "Once"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A spending budget for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The budgeted category
    #[serde(default, deserialize_with = "deserialize_category_ref")]
    pub category: Option<CategoryRef>,

    /// Budgeted amount per period
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Decimal,

    /// Recurrence
    #[serde(default)]
    pub period: BudgetPeriodKind,

    /// First day of the first period
    #[serde(default, deserialize_with = "deserialize_date")]
    pub start_date: Option<NaiveDate>,

    /// When the budget was created; unreadable values are `None`
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        id: BudgetId,
        category: impl Into<CategoryRef>,
        amount: Decimal,
        period: BudgetPeriodKind,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category: Some(category.into()),
            amount,
            period,
            start_date: Some(start_date),
            created_at: None,
        }
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::CategoryId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_api_budget() {
        let json = r#"{
            "id": 5,
            "user": 1,
            "category": {"id": 3, "name": "Food", "transaction_type": "expense"},
            "amount": "500.00",
            "period": "monthly",
            "start_date": "2025-01-01",
            "created_at": "2025-01-01T09:00:00Z"
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();

        assert_eq!(budget.id, BudgetId::new(5));
        assert_eq!(budget.amount, dec!(500.00));
        assert_eq!(budget.period, BudgetPeriodKind::Monthly);
        assert_eq!(
            budget.category.as_ref().map(CategoryRef::id),
            Some(CategoryId::new(3))
        );
        assert_eq!(budget.start_date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(budget.created_at.is_some());
    }

    #[test]
    fn test_unreadable_created_at_is_none() {
        let json = r#"{"id": 6, "amount": "10", "created_at": "not a time"}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.created_at, None);
        assert_eq!(budget.amount, dec!(10));
    }

    #[test]
    fn test_unknown_period_kinds() {
        let yearly: BudgetPeriodKind = serde_json::from_str(r#""yearly""#).unwrap();
        let once: BudgetPeriodKind = serde_json::from_str(r#""once""#).unwrap();
        assert_eq!(yearly, BudgetPeriodKind::Other);
        assert_eq!(once, BudgetPeriodKind::Once);
    }
}
