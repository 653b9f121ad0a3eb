//! Custom error types for fintrack
//!
//! The aggregation engine itself is infallible: malformed records degrade
//! silently at the deserialization boundary. This error type covers the
//! fallible edges around it (settings, snapshot files, CLI arguments and
//! exporters).

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A snapshot file could not be read as a record snapshot
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid user input (dates, ranges, filter values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FintrackError {
    /// Create a validation error for an unparsable date argument
    pub fn invalid_date(input: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            input.as_ref()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FintrackError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
