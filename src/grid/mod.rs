//! The 2D integer grid both traversals read from.
//!
//! Cells live in one contiguous row-major buffer, so `(i, j)` sits at
//! `i * cols + j`. Walking `j` is stride 1; walking `i` jumps `cols`
//! elements per step.

pub mod init;

use crate::error::LocalityError;

/// Default number of rows for the reference experiment.
pub const ROWS: usize = 200;

/// Default number of columns for the reference experiment.
pub const COLS: usize = 500_000;

/// Exclusive upper bound for every cell value.
pub const VALUE_BOUND: i32 = 10;

/// Row-major grid of values in `[0, VALUE_BOUND)`.
///
/// Immutable once built. Both summation passes borrow it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Build a grid filled from a PRNG seeded with `seed`.
    ///
    /// See [`init::fill_random`].
    pub fn random(rows: usize, cols: usize, seed: u64) -> Result<Self, LocalityError> {
        let cells = init::fill_random(rows, cols, seed)?;
        Ok(Self { rows, cols, cells })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use locality::grid::Grid;
    ///
    /// let grid = Grid::from_vec(2, 3, vec![1, 2, 3,
    ///                                      4, 5, 6]).unwrap();
    /// assert_eq!(grid.get(1, 0), 4);
    /// assert_eq!(grid.row(0), &[1, 2, 3]);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<i32>) -> Result<Self, LocalityError> {
        let expected = init::cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(LocalityError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(0..VALUE_BOUND).contains(&v))
        {
            return Err(LocalityError::ValueOutOfRange {
                index,
                value,
                bound: VALUE_BOUND,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid with a zero dimension can't be constructed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} grid",
            i,
            j,
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[i32] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// The whole row-major buffer.
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }
}
