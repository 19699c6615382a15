//! Error types for schedule ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a schedule table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Schedule file not found.
    #[error("schedule file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// No header row could be found.
    #[error("schedule {source_name} is empty")]
    EmptySchedule { source_name: String },

    /// Neither designator column is present.
    #[error("schedule {source_name} has no arrival or departure flight column")]
    MissingFlightColumns { source_name: String },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
