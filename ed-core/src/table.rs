//! The DP table filled by the table based engines.
use ed_types::{len_cost, Cost};
use std::ops::Index;

/// Costs for all pairs of prefixes of two sequences `a` and `b`.
///
/// Entry `(i, j)` is the distance between the first `i` symbols of `a` and the
/// first `j` symbols of `b`, so the table has `|a|+1` rows and `|b|+1` columns.
/// The first row and column hold `0..=|b|` and `0..=|a|`.
///
/// Tables are only written by the engine that creates them and are read-only
/// once returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    rows: usize,
    cols: usize,
    /// Row-major.
    cells: Vec<Cost>,
}

impl CostTable {
    /// A `(m+1) × (n+1)` table with the first row and column initialized.
    /// The interior is filled by the caller in row-major order.
    pub(crate) fn with_boundary(m: usize, n: usize) -> Self {
        let (rows, cols) = (m + 1, n + 1);
        let mut table = CostTable {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };
        // Deleting the first `i` symbols of `a`.
        for i in 0..rows {
            table.set(i, 0, len_cost(i));
        }
        // Inserting the first `j` symbols of `b`.
        for j in 0..cols {
            table.set(0, j, len_cost(j));
        }
        table
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.rows && j < self.cols,
            "({i}, {j}) is outside a {}x{} table",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, cost: Cost) {
        let idx = self.idx(i, j);
        self.cells[idx] = cost;
    }

    /// Number of rows, `|a| + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|b| + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The entry at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Cost> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> &[Cost] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub fn first_column(&self) -> Vec<Cost> {
        self.iter_rows().map(|row| row[0]).collect()
    }

    /// The bottom-right entry: the distance between `a` and `b`.
    pub fn distance(&self) -> Cost {
        self[(self.rows - 1, self.cols - 1)]
    }
}

impl Index<(usize, usize)> for CostTable {
    type Output = Cost;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        &self.cells[self.idx(i, j)]
    }
}
