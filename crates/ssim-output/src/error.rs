//! Error types for SSIM output.

use std::path::PathBuf;

use ssim_record::RecordError;
use thiserror::Error;

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum OutputError {
    /// None of the requested airlines has rows in the schedule.
    #[error("no matching records for {selection}")]
    NoMatchingRecords { selection: String },

    /// An assembled line does not have the record shape.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Writing to the output stream failed.
    #[error("failed to write SSIM output: {0}")]
    Write(#[from] std::io::Error),

    /// A file system operation on the output path failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temp file could not replace the target.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
