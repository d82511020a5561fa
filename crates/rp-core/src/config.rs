use serde::{Deserialize, Serialize};

use crate::error::FieldResult;
use crate::field;
use crate::geometry::Size;

/// Default ripple strength added per injected cell.
pub const DEFAULT_RIPPLE_STRENGTH: f64 = 100.0;

/// Parameters for building a [`RippleField`](crate::RippleField).
///
/// Missing fields fall back to [`FieldConfig::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Physical extent of the field.
    pub size: Size,
    /// Number of tiles across the width.
    pub resolution: u32,
    /// Pull toward the neighbor average versus the cell's own history.
    pub flow_factor: f64,
    /// Per-step multiplicative decay. Values outside `(0, 1]` grow or invert.
    pub damping: f64,
    /// Amount added to each cell covered by an injection.
    pub ripple_strength: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size: Size::new(400.0, 400.0),
            resolution: 133,
            flow_factor: 1.0,
            damping: 0.99,
            ripple_strength: DEFAULT_RIPPLE_STRENGTH,
        }
    }
}

impl FieldConfig {
    /// Set the physical extent.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the number of tiles across the width.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the flow factor.
    pub fn with_flow_factor(mut self, flow_factor: f64) -> Self {
        self.flow_factor = flow_factor;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the ripple strength.
    pub fn with_ripple_strength(mut self, strength: f64) -> Self {
        self.ripple_strength = strength;
        self
    }

    /// Check that the size and resolution produce a usable grid.
    ///
    /// Flow factor and damping are tuning values and are never rejected.
    pub fn validate(&self) -> FieldResult<()> {
        field::layout(self.size, self.resolution).map(|_| ())
    }
}
