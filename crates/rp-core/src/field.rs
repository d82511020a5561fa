use tracing::{debug, trace};

use crate::config::{DEFAULT_RIPPLE_STRENGTH, FieldConfig};
use crate::error::{FieldError, FieldResult};
use crate::geometry::{CellRect, GridDims, Size};
use crate::grid::Grid;

/// Number of ripple-strength units that map to the full display range.
const DISPLAY_SPAN: f64 = 6.0;

/// Largest grid, border included, a field will allocate. Each of the three
/// buffers holds this many `f64` values.
pub const MAX_CELLS: usize = 1 << 26;

/// Compute the tile size and grid dimensions for a physical size and resolution.
///
/// The grid carries a one-cell border on every side, so a usable grid has at
/// least three rows and three columns.
pub(crate) fn layout(size: Size, resolution: u32) -> FieldResult<(f64, GridDims)> {
    if resolution == 0 {
        return Err(FieldError::InvalidConfig(
            "resolution must be greater than zero".into(),
        ));
    }
    if !size.is_positive() {
        return Err(FieldError::InvalidConfig(format!(
            "physical size must be finite and positive, got {size}"
        )));
    }

    let tile_size = size.width / f64::from(resolution);
    let too_large = || {
        FieldError::InvalidConfig(format!(
            "a {size} field at resolution {resolution} needs more than {MAX_CELLS} cells"
        ))
    };
    let cols = cell_span(size.width, tile_size).ok_or_else(too_large)?;
    let rows = cell_span(size.height, tile_size).ok_or_else(too_large)?;
    let dims = GridDims::new(cols, rows);

    if !dims.has_interior() {
        return Err(FieldError::InvalidConfig(format!(
            "a {size} field at resolution {resolution} has no interior cells"
        )));
    }
    match cols.checked_mul(rows) {
        Some(cells) if cells <= MAX_CELLS => Ok((tile_size, dims)),
        _ => Err(too_large()),
    }
}

/// Cells along one axis, border included: `floor(extent / tile) + 2`.
/// `None` when the count is not finite or does not fit in a `usize`.
fn cell_span(extent: f64, tile_size: f64) -> Option<usize> {
    let cells = (extent / tile_size).floor();
    if !cells.is_finite() || cells >= usize::MAX as f64 {
        return None;
    }
    (cells as usize).checked_add(2)
}

/// Smallest and largest interior value produced by a [`RippleField::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStats {
    /// Smallest interior value.
    pub min: f64,
    /// Largest interior value.
    pub max: f64,
}

impl StepStats {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Largest absolute value seen.
    pub fn peak(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }
}

/// A discrete 2D ripple simulation.
///
/// The field owns three same-shaped buffers that play the roles of the
/// current field, the field one step earlier, and a scratch buffer for the
/// next step. The roles rotate by index after every [`step`](Self::step), so
/// no buffer is ever copied or shared between two roles.
///
/// Row 0, column 0, the last row, and the last column form a border that is
/// never written and never rendered. It gives every interior cell four real
/// neighbors.
///
/// `damping` outside `(0, 1]` makes amplitudes grow or flip sign every step,
/// and a `flow_factor` of `-1` divides by zero. Neither is rejected.
#[derive(Clone)]
pub struct RippleField {
    physical_size: Size,
    resolution: u32,
    tile_size: f64,
    dims: GridDims,
    flow_factor: f64,
    damping: f64,
    ripple_strength: f64,
    buffers: [Grid; 3],
    /// Index of the current buffer. The next buffer is `current + 1` and the
    /// previous one is `current + 2`, both modulo 3.
    current: usize,
}

impl std::fmt::Debug for RippleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RippleField")
            .field("physical_size", &self.physical_size)
            .field("resolution", &self.resolution)
            .field("tile_size", &self.tile_size)
            .field("dims", &self.dims)
            .field("flow_factor", &self.flow_factor)
            .field("damping", &self.damping)
            .field("ripple_strength", &self.ripple_strength)
            .finish_non_exhaustive()
    }
}

impl RippleField {
    /// Create a zero-filled field.
    ///
    /// Fails with [`FieldError::InvalidConfig`] when `resolution` is zero,
    /// when the physical size is not positive, or when the derived grid
    /// would have no interior cells.
    pub fn new(
        physical_size: impl Into<Size>,
        resolution: u32,
        flow_factor: f64,
        damping: f64,
    ) -> FieldResult<Self> {
        let physical_size = physical_size.into();
        let (tile_size, dims) = layout(physical_size, resolution)?;

        debug!(
            size = %physical_size,
            resolution,
            tile_size,
            dims = %dims,
            flow_factor,
            damping,
            "created ripple field"
        );

        Ok(Self {
            physical_size,
            resolution,
            tile_size,
            dims,
            flow_factor,
            damping,
            ripple_strength: DEFAULT_RIPPLE_STRENGTH,
            buffers: [Grid::zeros(dims), Grid::zeros(dims), Grid::zeros(dims)],
            current: 0,
        })
    }

    /// Create a field from a [`FieldConfig`].
    pub fn from_config(config: &FieldConfig) -> FieldResult<Self> {
        Ok(Self::new(
            config.size,
            config.resolution,
            config.flow_factor,
            config.damping,
        )?
        .with_ripple_strength(config.ripple_strength))
    }

    /// Override the amount each injection adds per covered cell.
    pub fn with_ripple_strength(mut self, strength: f64) -> Self {
        self.ripple_strength = strength;
        self
    }

    // -----------------------------------------------------------------------
    // Buffer roles
    // -----------------------------------------------------------------------

    fn previous_index(&self) -> usize {
        (self.current + 2) % 3
    }

    /// Borrow the buffers as `(current, previous, next)`.
    fn roles_mut(&mut self) -> (&Grid, &Grid, &mut Grid) {
        let [a, b, c] = &mut self.buffers;
        match self.current {
            0 => (&*a, &*c, b),
            1 => (&*b, &*a, c),
            _ => (&*c, &*b, a),
        }
    }

    /// The current field.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// The field as it was one step before [`current`](Self::current).
    pub fn previous(&self) -> &Grid {
        &self.buffers[self.previous_index()]
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Add an impulse centered on the cell containing `position`.
    ///
    /// Every interior cell whose squared distance from the center cell is
    /// strictly less than `radius²` gains the ripple strength. Cells that
    /// would fall on the border or outside the grid are skipped, so any
    /// position and radius are safe. Only the current buffer changes; the
    /// impulse propagates on the next [`step`](Self::step).
    ///
    /// Returns the number of cells that were changed.
    pub fn inject(&mut self, position: (f64, f64), radius: i32) -> usize {
        let (x, y) = position;
        if radius <= 0 || !x.is_finite() || !y.is_finite() {
            return 0;
        }

        let center_col = (x / self.tile_size).floor() as i128;
        let center_row = (y / self.tile_size).floor() as i128;
        let radius = i128::from(radius);
        let radius_sq = radius * radius;

        // Offsets of magnitude `radius` can never satisfy `d² < radius²`.
        let reach = radius - 1;
        let last_row = self.dims.rows as i128 - 2;
        let last_col = self.dims.cols as i128 - 2;
        let row_range = (center_row - reach).max(1)..=(center_row + reach).min(last_row);
        let col_range = (center_col - reach).max(1)..=(center_col + reach).min(last_col);

        let strength = self.ripple_strength;
        let current = &mut self.buffers[self.current];
        let mut touched = 0;
        for row in row_range {
            let dr = row - center_row;
            for col in col_range.clone() {
                let dc = col - center_col;
                if dr * dr + dc * dc < radius_sq {
                    current[(row as usize, col as usize)] += strength;
                    touched += 1;
                }
            }
        }

        debug!(x, y, radius = %radius, touched, "injected ripple");
        touched
    }

    /// Advance every interior cell by one discrete time unit.
    ///
    /// Each new value is computed from the unmodified current and previous
    /// buffers, so the visiting order does not matter. Afterwards the old
    /// current buffer becomes the previous one, the freshly written buffer
    /// becomes current, and the stale previous buffer is reused as scratch.
    pub fn step(&mut self) -> StepStats {
        let flow_factor = self.flow_factor;
        let damping = self.damping;
        let dims = self.dims;
        let (current, previous, next) = self.roles_mut();

        let mut stats = StepStats::empty();
        for row in 1..dims.rows - 1 {
            for col in 1..dims.cols - 1 {
                let flow = (current[(row + 1, col)]
                    + current[(row - 1, col)]
                    + current[(row, col + 1)]
                    + current[(row, col - 1)])
                    / 4.0;
                let blended = flow * flow_factor + current[(row, col)];
                let value = (2.0 * blended / (flow_factor + 1.0) - previous[(row, col)]) * damping;
                next[(row, col)] = value;
                stats.include(value);
            }
        }

        self.current = (self.current + 1) % 3;
        trace!(min = stats.min, max = stats.max, "stepped ripple field");
        stats
    }

    /// Zero every buffer, returning the field to its freshly constructed state.
    pub fn reset(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0.0);
        }
        self.current = 0;
        debug!("reset ripple field");
    }

    // -----------------------------------------------------------------------
    // Read-out
    // -----------------------------------------------------------------------

    /// Map a displacement to a display intensity in `0.0..=1.0`.
    fn intensity(&self, value: f64) -> f64 {
        let factor = value / (self.ripple_strength * DISPLAY_SPAN) + 0.5;
        if factor.is_nan() {
            0.5
        } else {
            factor.clamp(0.0, 1.0)
        }
    }

    /// Display intensity of a cell in `0.0..=1.0`, with `0.5` at rest.
    pub fn sample(&self, row: usize, col: usize) -> FieldResult<f64> {
        self.value(row, col)
            .map(|value| self.intensity(value))
            .ok_or(FieldError::OutOfBounds { row, col })
    }

    /// Call `visitor` once per interior cell with its physical rectangle and
    /// display intensity.
    ///
    /// Rectangles are shifted by one cell so the first interior cell starts
    /// at the physical origin.
    pub fn render<F>(&self, mut visitor: F)
    where
        F: FnMut(CellRect, f64),
    {
        let tile = self.tile_size;
        let current = self.current();
        for row in 1..self.dims.rows - 1 {
            let y = (row - 1) as f64 * tile;
            let cells = current
                .row(row)
                .iter()
                .enumerate()
                .take(self.dims.cols - 1)
                .skip(1);
            for (col, value) in cells {
                let rect = CellRect::new((col - 1) as f64 * tile, y, tile, tile);
                visitor(rect, self.intensity(*value));
            }
        }
    }

    /// Raw displacement of a cell, or `None` outside the grid.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.current().get(row, col)
    }

    /// The `(row, col)` of the cell containing a physical position, using the
    /// same mapping as [`inject`](Self::inject). `None` outside the grid.
    pub fn cell_at(&self, position: (f64, f64)) -> Option<(usize, usize)> {
        let (x, y) = position;
        let col = (x / self.tile_size).floor();
        let row = (y / self.tile_size).floor();
        if col.is_nan() || row.is_nan() || col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.dims.contains(row, col).then_some((row, col))
    }

    /// Largest absolute displacement over the interior of the current field.
    pub fn max_amplitude(&self) -> f64 {
        let current = self.current();
        (1..self.dims.rows - 1)
            .flat_map(|row| current.row(row)[1..self.dims.cols - 1].iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Physical extent the field covers.
    pub fn physical_size(&self) -> Size {
        self.physical_size
    }

    /// Requested number of tiles across the width.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Physical edge length of one cell.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Grid dimensions, border included.
    pub fn grid_dimensions(&self) -> GridDims {
        self.dims
    }

    /// Weight of the neighbor average in the update rule.
    pub fn flow_factor(&self) -> f64 {
        self.flow_factor
    }

    /// Per-step multiplicative decay.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Amount added to each cell covered by an injection.
    pub fn ripple_strength(&self) -> f64 {
        self.ripple_strength
    }
}
