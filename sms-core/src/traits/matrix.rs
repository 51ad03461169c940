//! Core matrix abstraction traits

use super::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
///
/// Coordinates are 1-based, matching the SMS stream.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is not stored or if the position is
    /// out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored elements
    fn nnz(&self) -> usize;

    /// Fraction of stored positions, in percent
    fn density(&self) -> f64 {
        let (nrows, ncols) = self.dimensions();
        100.0 * self.nnz() as f64 / nrows as f64 / ncols as f64
    }
}
