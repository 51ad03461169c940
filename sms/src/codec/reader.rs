//! Single-pass SMS stream reader

use crate::error::{Error, Result};
use sms_core::{
    is_terminator, parse_entry_line, parse_header_line, validate_coordinates, Entry,
    MatrixElement, SmsError, SmsHeader,
};
use std::io::BufRead;
use std::marker::PhantomData;

/// Lazily decodes an SMS stream
///
/// Opening consumes the header line. Each call to [`SmsReader::next_entry`]
/// (or the `Iterator` implementation) consumes one entry line. The sequence
/// ends at the terminator and cannot be restarted; after the terminator or
/// the first error the reader yields nothing more.
pub struct SmsReader<R, V> {
    input: R,
    header: SmsHeader,
    line: String,
    line_no: u64,
    finished: bool,
    _value: PhantomData<V>,
}

impl<R: BufRead, V: MatrixElement> SmsReader<R, V> {
    /// Read the SMS header from `input`
    pub fn open(input: R) -> Result<Self> {
        let mut reader = Self {
            input,
            header: SmsHeader::default(),
            line: String::new(),
            line_no: 0,
            finished: false,
            _value: PhantomData,
        };

        if !reader.next_line()? {
            return Err(SmsError::MalformedHeader {
                line: reader.line_no,
            }
            .into());
        }
        reader.header = parse_header_line(&reader.line, reader.line_no)?;
        Ok(reader)
    }

    /// Dimensions declared by the stream
    pub fn header(&self) -> SmsHeader {
        self.header
    }

    /// Number of input lines consumed so far
    pub fn line_number(&self) -> u64 {
        self.line_no
    }

    /// Whether the terminator has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Decode the next entry; `Ok(None)` once the terminator has been read
    pub fn next_entry(&mut self) -> Result<Option<Entry<V>>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.decode_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Release the underlying stream
    pub fn into_inner(self) -> R {
        self.input
    }

    fn decode_next(&mut self) -> Result<Option<Entry<V>>> {
        if !self.next_line()? {
            return Err(SmsError::UnexpectedEof {
                line: self.line_no,
            }
            .into());
        }

        let (row, col, token) = parse_entry_line(&self.line, self.line_no)?;
        if is_terminator(row, col) {
            return Ok(None);
        }
        validate_coordinates(&self.header, row, col)?;

        let value = V::parse_token(token).ok_or(SmsError::MalformedEntry {
            line: self.line_no,
        })?;
        Ok(Some(Entry::new(row, col, value)))
    }

    /// Load the next non-blank line into `self.line`; `false` at end of input
    fn next_line(&mut self) -> Result<bool> {
        loop {
            self.line.clear();
            let read = self
                .input
                .read_line(&mut self.line)
                .map_err(|e| Error::io("Error reading SMS stream", e))?;
            if read == 0 {
                return Ok(false);
            }
            self.line_no += 1;
            if !self.line.trim().is_empty() {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead, V: MatrixElement> Iterator for SmsReader<R, V> {
    type Item = Result<Entry<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}

impl<R: BufRead, V: MatrixElement> std::iter::FusedIterator for SmsReader<R, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_core::{ErrorCategory, Token};

    fn read_all<V: MatrixElement>(input: &str) -> Result<(SmsHeader, Vec<Entry<V>>)> {
        let reader = SmsReader::<_, V>::open(input.as_bytes())?;
        let header = reader.header();
        let entries = reader.collect::<Result<Vec<_>>>()?;
        Ok((header, entries))
    }

    fn sms_error(err: Error) -> SmsError {
        match err {
            Error::Sms(e) => e,
            other => panic!("expected an SMS error, got {other:?}"),
        }
    }

    #[test]
    fn test_reads_header_and_entries() {
        let (header, entries) = read_all::<f64>("2 3 M\n1 3 2.5\n2 1 -1\n0 0 0\n").unwrap();
        assert_eq!(header, SmsHeader::new(2, 3));
        assert_eq!(
            entries,
            vec![Entry::new(1, 3, 2.5), Entry::new(2, 1, -1.0)]
        );
    }

    #[test]
    fn test_unsorted_input_and_blank_lines() {
        let (_, entries) = read_all::<i64>("3 3 M\n\n3 3 1\n1 1 2\n   \n2 2 3\n0 0 0\n").unwrap();
        let positions: Vec<_> = entries.iter().map(Entry::position).collect();
        assert_eq!(positions, vec![(3, 3), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_terminator_detected_on_coordinates_only() {
        // an opaque value on the terminator line still ends the stream
        let (_, entries) = read_all::<Token>("1 1 M\n1 1 x\n0 0 end\n1 1 y\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value.as_str(), "x");

        // a numeric zero value elsewhere is ordinary data
        let (_, entries) = read_all::<f64>("1 1 M\n1 1 0\n0 0 0\n").unwrap();
        assert_eq!(entries, vec![Entry::new(1, 1, 0.0)]);
    }

    #[test]
    fn test_trailing_content_is_not_read() {
        let (_, entries) = read_all::<f64>("1 1 M\n0 0 0\ngarbage that is never parsed\n").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_header_errors() {
        let err = sms_error(read_all::<f64>("2 2 X\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::MissingMarker { line: 1 });
        assert_eq!(err.category(), ErrorCategory::Format);

        let err = sms_error(read_all::<f64>("").unwrap_err());
        assert_eq!(err, SmsError::MalformedHeader { line: 0 });
    }

    #[test]
    fn test_malformed_entry() {
        let err = sms_error(read_all::<f64>("2 2 M\n1 1 1\n1 x 1\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::MalformedEntry { line: 3 });

        let err = sms_error(read_all::<f64>("2 2 M\n1 1 one\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::MalformedEntry { line: 2 });
    }

    #[test]
    fn test_missing_terminator() {
        let err = sms_error(read_all::<f64>("2 2 M\n1 1 1\n").unwrap_err());
        assert_eq!(err, SmsError::UnexpectedEof { line: 2 });
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let err = sms_error(read_all::<f64>("2 2 M\n3 1 1\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::RowOutOfRange { row: 3, nrows: 2 });
        assert_eq!(err.category(), ErrorCategory::Range);

        let err = sms_error(read_all::<f64>("2 2 M\n0 1 1\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::RowOutOfRange { row: 0, nrows: 2 });

        let err = sms_error(read_all::<f64>("2 2 M\n1 5 1\n0 0 0\n").unwrap_err());
        assert_eq!(err, SmsError::ColumnOutOfRange { col: 5, ncols: 2 });
    }

    #[test]
    fn test_reader_is_fused_after_error() {
        let mut reader = SmsReader::<_, f64>::open("2 2 M\n1 1 bad\n1 1 1\n0 0 0\n".as_bytes()).unwrap();
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
        assert!(reader.is_finished());
    }
}
