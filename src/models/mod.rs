//! Core data models for fintrack
//!
//! This module contains the records handed over by the finance API
//! (transactions, categories, budgets) and the date spans the engine
//! reasons about.

pub mod budget;
pub mod category;
pub mod dates;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetPeriodKind};
pub use category::{Category, CategoryRef, UNCATEGORIZED_LABEL};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::{format_money, parse_amount};
pub use period::{DateRange, PeriodWindow};
pub use transaction::{Transaction, TransactionType};
