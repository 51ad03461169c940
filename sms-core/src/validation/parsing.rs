//! Line parsing for SMS header and entry lines
//!
//! Lines are split on ASCII whitespace. Both line kinds carry exactly three
//! fields; the caller supplies the 1-based line number for error reports.

use crate::format::constants::{FIELDS_PER_LINE, MARKER};
use crate::{SmsError, SmsHeader};

/// Parse a non-negative decimal index
///
/// Signs, blanks and anything that overflows `usize` are rejected.
pub fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}

/// Split a line into exactly three fields
fn split_fields(line: &str) -> Option<[&str; FIELDS_PER_LINE]> {
    let mut fields = line.split_ascii_whitespace();
    let first = fields.next()?;
    let second = fields.next()?;
    let third = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

/// Parse a `<rows> <cols> M` header line
pub fn parse_header_line(line: &str, line_no: u64) -> Result<SmsHeader, SmsError> {
    let mut fields = line.split_ascii_whitespace();

    let nrows = fields.next().and_then(parse_index);
    let ncols = fields.next().and_then(parse_index);
    let (Some(nrows), Some(ncols)) = (nrows, ncols) else {
        return Err(SmsError::MalformedHeader { line: line_no });
    };

    match fields.next() {
        Some(MARKER) => {}
        _ => return Err(SmsError::MissingMarker { line: line_no }),
    }
    if fields.next().is_some() {
        return Err(SmsError::MalformedHeader { line: line_no });
    }

    Ok(SmsHeader::new(nrows, ncols))
}

/// Parse a `<row> <col> <value>` line into coordinates and the raw value token
///
/// The value token is returned unparsed so that the caller decides its type;
/// the terminator `0 0 0` parses like any other line.
pub fn parse_entry_line(line: &str, line_no: u64) -> Result<(usize, usize, &str), SmsError> {
    let malformed = SmsError::MalformedEntry { line: line_no };
    let [row, col, value] = split_fields(line).ok_or(malformed)?;
    let row = parse_index(row).ok_or(malformed)?;
    let col = parse_index(col).ok_or(malformed)?;
    Ok((row, col, value))
}
