//! Encoded records.

use std::fmt;

use tracing::warn;

use crate::error::{RecordError, Result};
use crate::layout::RECORD_LEN;

/// A finished SSIM line and its serial number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    line: String,
    serial: u32,
}

impl EncodedRecord {
    /// Wraps a line, forcing it to exactly [`RECORD_LEN`] characters.
    ///
    /// Layout-built lines always fit; a mismatch is logged and repaired by
    /// truncating or space-padding.
    pub fn new(line: String, serial: u32) -> Self {
        let length = line.chars().count();
        if length == RECORD_LEN {
            return Self { line, serial };
        }
        warn!(serial, length, "record has the wrong width, adjusted");
        let mut fitted: String = line.chars().take(RECORD_LEN).collect();
        fitted.extend(std::iter::repeat_n(' ', RECORD_LEN.saturating_sub(length)));
        Self {
            line: fitted,
            serial,
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn into_line(self) -> String {
        self.line
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Checks that a line is one printable-ASCII record wide.
///
/// `line_number` is only used for error reporting.
pub fn check_record(line: &str, line_number: usize) -> Result<()> {
    if let Some(offset) = line
        .bytes()
        .position(|byte| !byte.is_ascii() || byte.is_ascii_control())
    {
        return Err(RecordError::NonAscii {
            line: line_number,
            offset,
        });
    }
    if line.len() != RECORD_LEN {
        return Err(RecordError::WrongLength {
            line: line_number,
            length: line.len(),
            expected: RECORD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_padded() {
        let record = EncodedRecord::new("3 KL".to_string(), 7);
        assert_eq!(record.line().len(), RECORD_LEN);
        assert!(record.line().starts_with("3 KL "));
        assert_eq!(record.serial(), 7);
    }

    #[test]
    fn long_lines_are_truncated() {
        let record = EncodedRecord::new("x".repeat(RECORD_LEN + 5), 1);
        assert_eq!(record.into_line(), "x".repeat(RECORD_LEN));
    }

    #[test]
    fn check_reports_problems() {
        assert!(check_record(&"0".repeat(RECORD_LEN), 1).is_ok());
        assert_eq!(
            check_record("0", 3),
            Err(RecordError::WrongLength {
                line: 3,
                length: 1,
                expected: RECORD_LEN
            })
        );
        assert_eq!(
            check_record("ab\tc", 4),
            Err(RecordError::NonAscii { line: 4, offset: 2 })
        );
    }
}
