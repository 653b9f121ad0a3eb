//! Reports for fintrack
//!
//! View models built from already-fetched records: category breakdowns,
//! monthly series, the trailing-months financial report and the
//! dashboard summary.

pub mod breakdown;
pub mod dashboard;
pub mod financial;
pub mod series;

pub use breakdown::{Breakdown, Palettes};
pub use dashboard::{DashboardBuilder, DashboardInput, DashboardSummary};
pub use financial::{build_report, FinancialReport, ReportBuilder, Totals};
pub use series::{month_labels, IncomeVsExpenses, Series, TimeSeries};
