//! Greedy row reordering for Gaussian elimination
//!
//! For each cursor position `i` the reorderer scores every unplaced row with
//! a nonzero entry, moves the least "bad" row to position `i`, and swaps its
//! pivot column into column `i`. The score mixes five criteria whose weights
//! come from [`ReorderConfig`]:
//!
//! ```text
//! badness = 100·a·r/max_r + 100·b·c1/r + 100·c·c2/r + 100·d·c3/r + 100·e·exp(-ncols/l)
//! ```
//!
//! where `r` is the row's nonzero count, `c1`/`c2` count nonzeros left of /
//! at-or-right of the cursor, `c3` counts nonzeros in columns that no placed
//! row touches, and `l` is the distance from the cursor to the nearest
//! non-pivot nonzero at or right of it (`ncols` if there is none).
//!
//! The heuristic is greedy and makes no optimality claim.

use crate::config::{ReorderConfig, Weights};
use crate::store::{SparseRow, SparseStore};
use sms_core::{MatrixElement, SmsError};

/// Outcome of one cursor advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderStep {
    /// Position that was filled
    pub cursor: usize,
    /// Row (as indexed before this step) moved into `cursor`
    pub row: usize,
    /// Column swapped into `cursor`, if the chosen row had one at or right of it
    pub pivot: Option<usize>,
    /// Score of the chosen row
    pub badness: f64,
}

/// All steps of a reordering run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderReport {
    pub nrows: usize,
    pub steps: Vec<ReorderStep>,
}

impl ReorderReport {
    /// Number of row swaps that moved a different row into place
    pub fn row_swaps(&self) -> usize {
        self.steps.iter().filter(|s| s.row != s.cursor).count()
    }

    /// Number of column swaps that exchanged two distinct columns
    pub fn column_swaps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.pivot.is_some_and(|p| p != s.cursor))
            .count()
    }

    /// `perm[k]` is the original index of the row now at position `k`
    ///
    /// Index 0 is unused so positions match stream coordinates.
    pub fn row_permutation(&self) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..=self.nrows).collect();
        for step in &self.steps {
            perm.swap(step.cursor, step.row);
        }
        perm
    }
}

/// Scored candidate row
#[derive(Debug, Clone, Copy)]
struct Candidate {
    row: usize,
    pivot: Option<usize>,
    badness: f64,
}

/// Step-wise greedy reorderer
///
/// Holds the state that persists across cursor positions: which columns are
/// already covered by placed rows, and the densest row count observed before
/// any swap.
#[derive(Debug, Clone)]
pub struct Reorderer {
    weights: Weights,
    seen: Vec<bool>,
    max_r: usize,
    cursor: usize,
    nrows: usize,
    ncols: usize,
    exhausted: bool,
}

impl Reorderer {
    /// Prepare a run over `store`; fails if the weights are degenerate
    pub fn new<V>(config: &ReorderConfig, store: &SparseStore<V>) -> Result<Self, SmsError> {
        let weights = config.weights.normalized()?;
        Ok(Self {
            weights,
            seen: vec![false; store.ncols() + 1],
            max_r: store.max_row_stat(),
            cursor: 1,
            nrows: store.nrows(),
            ncols: store.ncols(),
            exhausted: false,
        })
    }

    /// Next position to be filled
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Normalized weights in use
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Whether column `j` holds a nonzero in some placed row
    pub fn is_seen(&self, j: usize) -> bool {
        self.seen.get(j).copied().unwrap_or(false)
    }

    /// Fill the current cursor position
    ///
    /// Returns `None` when every position is filled or when no unplaced row
    /// has a nonzero left; in the latter case the remaining rows keep their
    /// relative order and later calls also return `None`.
    pub fn step<V>(&mut self, store: &mut SparseStore<V>) -> Option<ReorderStep>
    where
        V: MatrixElement + PartialOrd,
    {
        if self.exhausted || self.cursor > self.nrows {
            return None;
        }
        let i = self.cursor;

        let mut best: Option<Candidate> = None;
        for ii in i..=self.nrows {
            let r = store.row_stat(ii);
            if r == 0 {
                continue;
            }
            let candidate = self.score(store, ii, r);
            if best.map_or(true, |b| candidate.badness < b.badness) {
                best = Some(candidate);
            }
        }

        let Some(chosen) = best else {
            self.exhausted = true;
            tracing::debug!(cursor = i, "no row with nonzeros left");
            return None;
        };

        store.swap_rows(chosen.row, i);
        if let Some(pivot) = chosen.pivot {
            store.swap_columns(pivot, i);
        }
        for &j in store.row(i).keys() {
            self.seen[j] = true;
        }
        self.cursor += 1;

        tracing::debug!(
            cursor = i,
            row = chosen.row,
            pivot = ?chosen.pivot,
            badness = chosen.badness,
            "placed row"
        );
        Some(ReorderStep {
            cursor: i,
            row: chosen.row,
            pivot: chosen.pivot,
            badness: chosen.badness,
        })
    }

    /// Run to completion
    pub fn run<V>(mut self, store: &mut SparseStore<V>) -> ReorderReport
    where
        V: MatrixElement + PartialOrd,
    {
        let mut report = ReorderReport {
            nrows: self.nrows,
            steps: Vec::with_capacity(self.nrows),
        };
        while let Some(step) = self.step(store) {
            report.steps.push(step);
        }
        tracing::info!(
            steps = report.steps.len(),
            row_swaps = report.row_swaps(),
            column_swaps = report.column_swaps(),
            "reordering finished"
        );
        report
    }

    fn score<V>(&self, store: &SparseStore<V>, ii: usize, r: usize) -> Candidate
    where
        V: MatrixElement + PartialOrd,
    {
        let i = self.cursor;
        let row = store.row(ii);
        let pivot = pivot_column(store, row, i);

        let mut c1 = 0usize;
        let mut c2 = 0usize;
        let mut c3 = 0usize;
        let mut l = self.ncols;
        for &j in row.keys() {
            if j < i {
                c1 += 1;
            } else {
                c2 += 1;
                if Some(j) != pivot && j - i < l {
                    l = j - i;
                }
            }
            if !self.seen[j] {
                c3 += 1;
            }
        }

        let w = &self.weights;
        let (r, max_r, ncols) = (r as f64, self.max_r as f64, self.ncols as f64);
        let badness = (100.0 * r / max_r) * w.a
            + (100.0 * c1 as f64 / r) * w.b
            + (100.0 * c2 as f64 / r) * w.c
            + (100.0 * c3 as f64 / r) * w.d
            + (100.0 * (-1.0 * ncols / l as f64).exp()) * w.e;

        Candidate {
            row: ii,
            pivot,
            badness,
        }
    }
}

/// Column of `row` at or right of `i` with the fewest nonzeros overall
///
/// Ties go to the column whose value in this row is smaller than the value
/// at the current pick.
fn pivot_column<V>(store: &SparseStore<V>, row: &SparseRow<V>, i: usize) -> Option<usize>
where
    V: PartialOrd,
{
    let mut best: Option<(usize, usize, &V)> = None;
    for (&j, value) in row.range(i..) {
        let count = store.col_stat(j);
        let better = match best {
            None => true,
            Some((_, best_count, best_value)) => {
                count < best_count || (count == best_count && value < best_value)
            }
        };
        if better {
            best = Some((j, count, value));
        }
    }
    best.map(|(j, _, _)| j)
}

/// Reorder `store` in place with `config`
pub fn reorder<V>(store: &mut SparseStore<V>, config: &ReorderConfig) -> Result<ReorderReport, SmsError>
where
    V: MatrixElement + PartialOrd,
{
    Ok(Reorderer::new(config, store)?.run(store))
}
