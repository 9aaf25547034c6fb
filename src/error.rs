//! Custom error types for the money tracker
//!
//! Everything in the core is non-fatal: a parse error rejects one input or
//! skips one stored line, an I/O error aborts one operation and leaves the
//! in-memory ledger as it was.

use thiserror::Error;

use crate::models::MoneyParseError;

/// The main error type for money tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Invalid amount text, transaction kind, date, or stored line
    #[error("Parse error: {0}")]
    Parse(String),

    /// Transaction file unreadable or unwritable
    #[error("I/O error: {0}")]
    Io(String),

    /// Input that parses but cannot be stored faithfully
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for money tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
