//! Interactive window for Ripples.
//!
//! A macroquad host loop around [`rp_simulation::Simulation`]: pointer and
//! keyboard input become injections, the simulation advances once per frame
//! or at a fixed rate, and the field is painted as colored tiles scaled to
//! fit the window.

pub mod app;
pub mod args;
pub mod input;
pub mod theme;
