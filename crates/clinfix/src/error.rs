//! Error types for the ClinFix library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ClinFix operations.
///
/// Only loading and exporting can fail. The rule engine itself never
/// returns an error: data-quality problems are findings, not failures.
#[derive(Debug, Error)]
pub enum ClinfixError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed row in delimited data. `row` is the 1-based line number.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error exporting cleaned data or reports.
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for ClinFix operations.
pub type Result<T> = std::result::Result<T, ClinfixError>;
