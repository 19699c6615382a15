//! Error types for SSIM record checks.

use thiserror::Error;

/// Errors reported when a line does not honor the fixed record shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Line is not exactly one record wide.
    #[error("record {line} is {length} characters wide, expected {expected}")]
    WrongLength {
        line: usize,
        length: usize,
        expected: usize,
    },

    /// Line contains a byte outside printable ASCII.
    #[error("record {line} has a non-ASCII character at offset {offset}")]
    NonAscii { line: usize, offset: usize },
}

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;
