//! Matrix statistics gathered in one pass over an SMS stream

use crate::codec::SmsReader;
use crate::error::Result;
use sms_core::MatrixElement;
use std::fmt;
use std::io::BufRead;

/// Dimensions and fill of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixInfo {
    pub nrows: usize,
    pub ncols: usize,
    /// Entries whose value is not zero
    pub nnz: usize,
}

impl MatrixInfo {
    /// Percentage of nonzero positions
    pub fn density(&self) -> f64 {
        100.0 * self.nnz as f64 / self.nrows as f64 / self.ncols as f64
    }

    /// Consume `reader` and count its nonzero entries
    ///
    /// Duplicate coordinates are counted once per line, as they appear.
    pub fn from_reader<R: BufRead, V: MatrixElement>(mut reader: SmsReader<R, V>) -> Result<Self> {
        let header = reader.header();
        let mut nnz = 0;
        while let Some(entry) = reader.next_entry()? {
            if !entry.value.is_zero() {
                nnz += 1;
            }
        }
        Ok(Self {
            nrows: header.nrows,
            ncols: header.ncols,
            nnz,
        })
    }

    /// One-line rendering
    pub fn short(&self) -> ShortInfo<'_> {
        ShortInfo(self)
    }
}

impl fmt::Display for MatrixInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.nrows)?;
        writeln!(f, "Columns: {}", self.ncols)?;
        writeln!(f, "Non-zeros: {}", self.nnz)?;
        writeln!(f, "Density%: {}", self.density())
    }
}

/// `rows:.. columns:.. nonzero:.. density:..` rendering of [`MatrixInfo`]
pub struct ShortInfo<'a>(&'a MatrixInfo);

impl fmt::Display for ShortInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.0;
        write!(
            f,
            "rows:{} columns:{} nonzero:{} density:{}",
            info.nrows,
            info.ncols,
            info.nnz,
            info.density()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_core::Token;

    #[test]
    fn test_counts_nonzero_values() {
        let input = "2 4 M\n1 1 3\n1 2 0\n2 4 -1\n0 0 0\n";
        let info = MatrixInfo::from_reader(SmsReader::<_, f64>::open(input.as_bytes()).unwrap()).unwrap();
        assert_eq!(info, MatrixInfo { nrows: 2, ncols: 4, nnz: 2 });
        assert_eq!(info.density(), 25.0);
        assert_eq!(
            info.to_string(),
            "Rows: 2\nColumns: 4\nNon-zeros: 2\nDensity%: 25\n"
        );
        assert_eq!(
            info.short().to_string(),
            "rows:2 columns:4 nonzero:2 density:25"
        );
    }

    #[test]
    fn test_opaque_values_all_count() {
        let input = "2 2 M\n1 1 0\n2 2 a\n0 0 0\n";
        let info = MatrixInfo::from_reader(SmsReader::<_, Token>::open(input.as_bytes()).unwrap()).unwrap();
        assert_eq!(info.nnz, 2);
    }
}
