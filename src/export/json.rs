//! JSON export functionality
//!
//! Wraps a view model with schema and generation metadata.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Envelope around an exported view model
#[derive(Debug, Clone, Serialize)]
pub struct JsonExport<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Date the figures were computed for
    pub as_of: NaiveDate,

    /// The exported view model
    pub data: &'a T,
}

impl<'a, T: Serialize> JsonExport<'a, T> {
    pub fn new(data: &'a T, as_of: NaiveDate) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            as_of,
            data,
        }
    }
}

/// Write a view model as pretty-printed JSON
pub fn export_json<T, W>(data: &T, as_of: NaiveDate, writer: &mut W) -> FintrackResult<()>
where
    T: Serialize,
    W: Write,
{
    let export = JsonExport::new(data, as_of);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FintrackError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}
