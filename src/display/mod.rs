//! Display formatting for terminal output
//!
//! Fixed-width tables for budget statuses, reports, dashboards and
//! transaction lists. Money is printed with the currency symbol from the
//! user's settings.

pub mod budget;
pub mod dashboard;
pub mod report;
pub mod table;
pub mod transaction;

pub use budget::format_budget_statuses;
pub use dashboard::format_dashboard;
pub use report::format_financial_report;
pub use transaction::format_transaction_list;
