//! SMS header line definition
//!
//! The header is the first non-blank line of a stream: `<rows> <cols> M`.

use super::constants::MARKER;

/// Dimensions declared by an SMS stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmsHeader {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl SmsHeader {
    /// Create a header for an `nrows` x `ncols` matrix
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Whether `(row, col)` is an addressable 1-based position
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && row <= self.nrows && col >= 1 && col <= self.ncols
    }

    /// Header of the transposed matrix
    pub const fn transposed(&self) -> Self {
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

impl core::fmt::Display for SmsHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.nrows, self.ncols, MARKER)
    }
}
