//! Error types for the Lapidary library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Lapidary operations.
#[derive(Debug, Error)]
pub enum LapidaryError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the spreadsheet reader.
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// A required sheet is not present in the workbook.
    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),

    /// A required column is not present in a sheet header.
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// Empty sheet or no header row.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A cost cell that could not be read as a number.
    #[error("Invalid cost '{value}' for record '{id}'")]
    InvalidCost { id: String, value: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure moving a finished output file into place.
    #[error("Failed to persist '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Lapidary operations.
pub type Result<T> = std::result::Result<T, LapidaryError>;
