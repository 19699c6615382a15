//! Line-oriented SSIM writer.

use std::io::{BufWriter, Write};

use ssim_record::{EncodedRecord, check_record};

use crate::error::Result;

/// Writes records one per line, `\n` terminated.
///
/// Every line is checked against the record shape before it is written.
pub struct SsimWriter<W: Write> {
    writer: BufWriter<W>,
    lines: usize,
}

impl<W: Write> SsimWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            lines: 0,
        }
    }

    pub fn write_record(&mut self, record: &EncodedRecord) -> Result<()> {
        check_record(record.line(), self.lines + 1)?;
        self.writer.write_all(record.line().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| err.into_error().into())
    }
}
