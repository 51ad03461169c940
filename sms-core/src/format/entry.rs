//! SMS entry line definition

/// One `row col value` triple of an SMS stream
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<V> {
    /// 1-based row index
    pub row: usize,
    /// 1-based column index
    pub col: usize,
    /// Stored value
    pub value: V,
}

impl<V> Entry<V> {
    /// Create a new entry
    pub const fn new(row: usize, col: usize, value: V) -> Self {
        Self { row, col, value }
    }

    /// Coordinates as a `(row, col)` pair
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// End-of-stream test on coordinates only; the value is never inspected.
pub const fn is_terminator(row: usize, col: usize) -> bool {
    row == super::constants::RESERVED_INDEX && col == super::constants::RESERVED_INDEX
}
