//! Core types for Ripples: the ripple field and the values it exchanges with a host.
//!
//! A [`RippleField`] owns three same-shaped scalar grids and advances them one
//! discrete tick at a time with a damped diffusion/wave rule. Hosts push
//! impulses in with [`RippleField::inject`], call [`RippleField::step`] once
//! per tick, and read a display intensity back with [`RippleField::sample`]
//! or [`RippleField::render`]. The crate performs no I/O and knows nothing
//! about windows or frame timing.

/// Serializable field parameters.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The ripple field and its update rule.
pub mod field;
/// Physical sizes, grid dimensions, and cell rectangles.
pub mod geometry;
/// Row-major scalar grid storage.
pub mod grid;
/// Mapping from display intensity to RGB colors.
pub mod palette;

/// Re-export of [`config::FieldConfig`].
pub use config::FieldConfig;
/// Re-exports of [`error::FieldError`] and [`error::FieldResult`].
pub use error::{FieldError, FieldResult};
/// Re-exports of [`field::RippleField`] and [`field::StepStats`].
pub use field::{RippleField, StepStats};
/// Re-exports of the geometry value types.
pub use geometry::{CellRect, GridDims, Size};
/// Re-export of [`grid::Grid`].
pub use grid::Grid;
/// Re-exports of [`palette::Palette`] and [`palette::Rgb`].
pub use palette::{Palette, Rgb};
