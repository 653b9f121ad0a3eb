//! Aggregation engine
//!
//! Pure functions over already-fetched records: filtering, ordering,
//! reductions and budget evaluation. Nothing in this layer performs I/O
//! or reads the clock.

pub mod aggregate;
pub mod budget;
pub mod filter;
pub mod order;

pub use aggregate::{group_by_category, group_sum, percentages, sum, GroupedTotals};
pub use budget::{evaluate, most_recent, BudgetEvaluator, BudgetStatus, BudgetTier};
pub use filter::{DateCriterion, TransactionFilter};
pub use order::{sort_newest_first, sort_transactions, TransactionOrder};
