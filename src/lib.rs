//! fintrack - budget tracking and financial reports over record snapshots
//!
//! This library evaluates spending budgets against their period windows
//! and aggregates income, expense and savings records into breakdowns,
//! monthly series and dashboard summaries. Every computation works on
//! already-fetched records and an explicit reference date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Records (transactions, categories, budgets) and date spans
//! - `services`: Filtering, aggregation and budget evaluation
//! - `reports`: Breakdowns, time series, financial report, dashboard
//! - `snapshot`: Loading records from a JSON snapshot
//! - `config`: Configuration and path management
//! - `display`: Terminal table formatting
//! - `export`: CSV and JSON writers
//! - `cli`: Command handlers for the `fintrack` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::reports::{build_report, Palettes};
//! use fintrack::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::load("snapshot.json")?;
//! let report = build_report(
//!     &snapshot.expenses,
//!     &snapshot.incomes,
//!     &snapshot.savings,
//!     6,
//!     today,
//!     &Palettes::default(),
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod snapshot;

pub use error::{FintrackError, FintrackResult};
pub use snapshot::Snapshot;
