//! Dense time tables for the flowshop recurrences.

use std::ops::{Index, IndexMut};

use crate::instance::Time;

/// Row-major `rows × cols` table of times.
///
/// Row `i` / column `j` follow the 1-based sequence position and machine
/// index of the recurrences, so row 0 and column 0 are the zero
/// boundary of a completion table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeTable {
    rows: usize,
    cols: usize,
    data: Vec<Time>,
}

impl TimeTable {
    /// Creates a zero-filled table.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Resizes to `rows × cols` and zero-fills, reusing the allocation.
    pub(crate) fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, 0);
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[Time] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Bottom-right entry. For a completion table this is the makespan.
    pub fn last(&self) -> Time {
        self.data.last().copied().unwrap_or(0)
    }

    /// Copies the table into nested vectors, one per row.
    pub fn to_rows(&self) -> Vec<Vec<Time>> {
        self.data.chunks_exact(self.cols.max(1)).map(<[Time]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for TimeTable {
    type Output = Time;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Time {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for TimeTable {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Time {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}
