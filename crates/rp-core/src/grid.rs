use std::ops::{Index, IndexMut};

use crate::geometry::GridDims;

/// A fixed-size, row-major grid of `f64` values.
///
/// The dimensions are set at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dims: GridDims,
    data: Vec<f64>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell set to `0.0`.
    pub fn zeros(dims: GridDims) -> Self {
        Self {
            dims,
            data: vec![0.0; dims.cell_count()],
        }
    }

    /// The grid's dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.dims.cols + col
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.dims
            .contains(row, col)
            .then(|| self.data[self.idx(row, col)])
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// One row as a slice.
    ///
    /// # Panics
    /// Panics if `row` is outside the grid.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.dims.cols;
        &self.data[start..start + self.dims.cols]
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(self.dims.contains(row, col), "({row}, {col}) outside {}", self.dims);
        &self.data[self.idx(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(self.dims.contains(row, col), "({row}, {col}) outside {}", self.dims);
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }
}
