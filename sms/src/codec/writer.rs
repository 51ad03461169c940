//! SMS stream writer

use crate::error::{Error, Result};
use sms_core::format::constants::TERMINATOR;
use sms_core::SmsHeader;
use std::fmt::Display;
use std::io::Write;

/// Emits an SMS stream
///
/// The header is written on [`SmsWriter::open`]. Entries are appended in the
/// order given; canonical producers write ascending (row, column) but this is
/// not enforced. The terminator is only written by [`SmsWriter::finish`], so
/// a writer dropped on an error path leaves a visibly incomplete stream.
pub struct SmsWriter<W: Write> {
    output: W,
    header: SmsHeader,
    written: usize,
}

impl<W: Write> SmsWriter<W> {
    /// Begin a stream for an `nrows` x `ncols` matrix
    pub fn open(mut output: W, nrows: usize, ncols: usize) -> Result<Self> {
        let header = SmsHeader::new(nrows, ncols);
        writeln!(output, "{header}").map_err(|e| Error::io("Error writing SMS header", e))?;
        Ok(Self {
            output,
            header,
            written: 0,
        })
    }

    /// Dimensions written in the header
    pub fn header(&self) -> SmsHeader {
        self.header
    }

    /// Number of entries written so far
    pub fn entries_written(&self) -> usize {
        self.written
    }

    /// Append one `row col value` line
    pub fn write_entry<V: Display + ?Sized>(&mut self, row: usize, col: usize, value: &V) -> Result<()> {
        writeln!(self.output, "{row} {col} {value}")
            .map_err(|e| Error::io("Error writing SMS entry", e))?;
        self.written += 1;
        Ok(())
    }

    /// Write the terminator, flush, and hand back the stream
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.output, "{TERMINATOR}")
            .and_then(|()| self.output.flush())
            .map_err(|e| Error::io("Error writing SMS terminator", e))?;
        Ok(self.output)
    }
}
