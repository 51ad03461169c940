//! In-memory sparse matrix with row and column nonzero counts
//!
//! [`SparseStore`] keeps one ordered column map per row, addressed with the
//! same 1-based coordinates as the SMS stream, together with per-row and
//! per-column entry counts that every mutation keeps exact.

use crate::codec::{SmsReader, SmsWriter};
use crate::error::Result;
use sms_core::{validate_coordinates, MatrixElement, SmsError, SmsHeader, SparseMatrix};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// A sparse row: column index to value, ascending by column
pub type SparseRow<V> = BTreeMap<usize, V>;

/// Owned sparse matrix store
///
/// Slot 0 of the row and count vectors is never used so that public indices
/// match stream coordinates. Index arguments outside the declared dimensions
/// panic, like slice indexing; only [`SparseStore::set`] validates and
/// reports a range error, since it receives untrusted coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseStore<V> {
    header: SmsHeader,
    rows: Vec<SparseRow<V>>,
    row_stat: Vec<usize>,
    col_stat: Vec<usize>,
    nnz: usize,
}

impl<V> SparseStore<V> {
    /// Create an empty `nrows` x `ncols` store
    ///
    /// Aborts like `Vec` when the row and column slots cannot be allocated;
    /// use [`SparseStore::try_new`] for dimensions read from untrusted input.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            header: SmsHeader::new(nrows, ncols),
            rows: (0..=nrows).map(|_| SparseRow::new()).collect(),
            row_stat: vec![0; nrows + 1],
            col_stat: vec![0; ncols + 1],
            nnz: 0,
        }
    }

    /// Create an empty store, reporting dimensions that cannot be allocated
    /// as [`SmsError::DimensionsTooLarge`]
    pub fn try_new(nrows: usize, ncols: usize) -> Result<Self> {
        let too_large = SmsError::DimensionsTooLarge { nrows, ncols };
        let row_slots = nrows.checked_add(1).ok_or(too_large)?;
        let col_slots = ncols.checked_add(1).ok_or(too_large)?;

        let mut rows = Vec::new();
        rows.try_reserve_exact(row_slots).map_err(|_| too_large)?;
        rows.resize_with(row_slots, SparseRow::new);
        let mut row_stat = Vec::new();
        row_stat.try_reserve_exact(row_slots).map_err(|_| too_large)?;
        row_stat.resize(row_slots, 0);
        let mut col_stat = Vec::new();
        col_stat.try_reserve_exact(col_slots).map_err(|_| too_large)?;
        col_stat.resize(col_slots, 0);

        Ok(Self {
            header: SmsHeader::new(nrows, ncols),
            rows,
            row_stat,
            col_stat,
            nnz: 0,
        })
    }

    /// Declared dimensions
    pub fn header(&self) -> SmsHeader {
        self.header
    }

    pub fn nrows(&self) -> usize {
        self.header.nrows
    }

    pub fn ncols(&self) -> usize {
        self.header.ncols
    }

    /// Insert or overwrite the value at `(row, col)`, returning the old value
    ///
    /// Counts only change when the position was previously empty.
    pub fn set(&mut self, row: usize, col: usize, value: V) -> Result<Option<V>> {
        validate_coordinates(&self.header, row, col)?;
        let previous = self.rows[row].insert(col, value);
        if previous.is_none() {
            self.row_stat[row] += 1;
            self.col_stat[col] += 1;
            self.nnz += 1;
        }
        Ok(previous)
    }

    /// Value stored at `(row, col)`, if any
    pub fn get(&self, row: usize, col: usize) -> Option<&V> {
        if !self.header.contains(row, col) {
            return None;
        }
        self.rows[row].get(&col)
    }

    /// Read-only view of row `i`
    pub fn row(&self, i: usize) -> &SparseRow<V> {
        assert!(i >= 1 && i <= self.nrows(), "row {i} out of range");
        &self.rows[i]
    }

    /// Number of entries stored in row `i`
    pub fn row_stat(&self, i: usize) -> usize {
        self.row_stat[i]
    }

    /// Number of entries stored in column `j`
    pub fn col_stat(&self, j: usize) -> usize {
        self.col_stat[j]
    }

    /// Largest row count
    pub fn max_row_stat(&self) -> usize {
        self.row_stat.iter().copied().max().unwrap_or(0)
    }

    /// Total number of stored entries
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// Exchange rows `i` and `k`, moving whole rows rather than entries
    pub fn swap_rows(&mut self, i: usize, k: usize) {
        assert!(i >= 1 && k >= 1, "row indices are 1-based");
        self.rows.swap(i, k);
        self.row_stat.swap(i, k);
    }

    /// Exchange columns `j` and `k` in every row
    ///
    /// A row holding only one of the two columns has that entry relocated
    /// and the original slot cleared.
    pub fn swap_columns(&mut self, j: usize, k: usize) {
        assert!(
            j >= 1 && k >= 1 && j <= self.ncols() && k <= self.ncols(),
            "column indices {j}, {k} out of range"
        );
        if j == k {
            return;
        }
        for row in self.rows.iter_mut().skip(1) {
            let at_j = row.remove(&j);
            let at_k = row.remove(&k);
            if let Some(value) = at_j {
                row.insert(k, value);
            }
            if let Some(value) = at_k {
                row.insert(j, value);
            }
        }
        self.col_stat.swap(j, k);
    }

    /// All entries in ascending (row, column) order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &V)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .flat_map(|(i, row)| row.iter().map(move |(&j, value)| (i, j, value)))
    }

    /// Recount rows and columns from the stored entries and compare
    pub fn counts_consistent(&self) -> bool {
        let mut rows = vec![0usize; self.nrows() + 1];
        let mut cols = vec![0usize; self.ncols() + 1];
        for (i, j, _) in self.entries() {
            rows[i] += 1;
            cols[j] += 1;
        }
        rows == self.row_stat && cols == self.col_stat && rows.iter().sum::<usize>() == self.nnz
    }
}

impl<V: Clone> SparseStore<V> {
    /// A new store holding the transpose of this matrix
    pub fn transposed(&self) -> Self {
        let header = self.header.transposed();
        let mut transposed = Self::new(header.nrows, header.ncols);
        for (i, j, value) in self.entries() {
            transposed.rows[j].insert(i, value.clone());
        }
        transposed.row_stat = self.col_stat.clone();
        transposed.col_stat = self.row_stat.clone();
        transposed.nnz = self.nnz;
        transposed
    }
}

impl<V: MatrixElement> SparseStore<V> {
    /// Drain `reader` into a new store; later duplicates overwrite earlier ones
    pub fn from_reader<R: BufRead>(mut reader: SmsReader<R, V>) -> Result<Self> {
        let header = reader.header();
        let mut store = Self::try_new(header.nrows, header.ncols)?;
        while let Some(entry) = reader.next_entry()? {
            if store.set(entry.row, entry.col, entry.value)?.is_some() {
                tracing::warn!(
                    row = entry.row,
                    col = entry.col,
                    line = reader.line_number(),
                    "duplicate entry overwrites earlier value"
                );
            }
        }
        tracing::info!(
            nrows = header.nrows,
            ncols = header.ncols,
            nnz = store.nnz(),
            "matrix loaded"
        );
        Ok(store)
    }

    /// Write the whole matrix to `output` in canonical order
    pub fn write_to<W: Write>(&self, output: W) -> Result<W> {
        let mut writer = SmsWriter::open(output, self.nrows(), self.ncols())?;
        for (i, j, value) in self.entries() {
            writer.write_entry(i, j, value)?;
        }
        writer.finish()
    }
}

impl<V: MatrixElement> SparseMatrix for SparseStore<V> {
    type Element = V;

    fn get_element(&self, row: usize, col: usize) -> Option<V> {
        self.get(row, col).cloned()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn nnz(&self) -> usize {
        self.nnz
    }
}
