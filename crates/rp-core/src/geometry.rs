use serde::{Deserialize, Serialize};

/// A physical extent in abstract distance units (typically window pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size from a width and a height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both extents are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Grid dimensions in cells, including the one-cell border on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl GridDims {
    /// Create grid dimensions from a column and a row count.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Total number of cells, border included.
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Number of interior (non-border) columns.
    pub fn interior_cols(&self) -> usize {
        self.cols.saturating_sub(2)
    }

    /// Number of interior (non-border) rows.
    pub fn interior_rows(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    /// True when the grid has at least one interior cell.
    pub fn has_interior(&self) -> bool {
        self.interior_cols() > 0 && self.interior_rows() > 0
    }

    /// True when `(row, col)` addresses a cell of the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// True when `(row, col)` is inside the grid but not on its border.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row + 1 < self.rows && col + 1 < self.cols
    }

    /// True when `(row, col)` is one of the reserved border cells.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && !self.is_interior(row, col)
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// The physical rectangle a rendered cell occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (the tile size).
    pub w: f64,
    /// Height (the tile size).
    pub h: f64,
}

impl CellRect {
    /// Create a rectangle from its top-left corner and extent.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}
