//! Export module for fintrack
//!
//! Writes the view models in machine-readable formats:
//! - CSV: breakdowns, the monthly series and transaction lists
//! - JSON: any view model, with export metadata

pub mod csv;
pub mod json;

pub use self::csv::{
    export_breakdown_csv, export_budget_statuses_csv, export_report_csv, export_time_series_csv,
    export_transactions_csv,
};
pub use json::{export_json, JsonExport, EXPORT_SCHEMA_VERSION};
