//! Streaming codec for the SMS exchange format
//!
//! [`SmsReader`] yields entries lazily from any `BufRead` and stops at the
//! `0 0 0` terminator; [`SmsWriter`] emits header, entries and terminator to
//! any `Write`. Neither buffers more than the current line.

mod reader;
mod writer;

pub use reader::SmsReader;
pub use writer::SmsWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use sms_core::{Entry, SmsHeader};
    use std::collections::BTreeSet;

    #[test]
    fn test_write_then_read_preserves_entries() {
        let entries = [(2usize, 1usize, 4.0f64), (1, 3, -2.5), (3, 3, 1e-3)];

        let mut writer = SmsWriter::open(Vec::new(), 3, 3).unwrap();
        for &(row, col, value) in &entries {
            writer.write_entry(row, col, &value).unwrap();
        }
        let bytes = writer.finish().unwrap();

        let reader = SmsReader::<_, f64>::open(bytes.as_slice()).unwrap();
        assert_eq!(reader.header(), SmsHeader::new(3, 3));
        let read: Vec<Entry<f64>> = reader.collect::<Result<_, _>>().unwrap();

        let expected: BTreeSet<String> = entries
            .iter()
            .map(|(r, c, v)| format!("{r} {c} {v}"))
            .collect();
        let actual: BTreeSet<String> = read
            .iter()
            .map(|e| format!("{} {} {}", e.row, e.col, e.value))
            .collect();
        assert_eq!(expected, actual);
    }
}
