//! Host-independent driver for the Ripples field.
//!
//! Wraps an [`rp_core::RippleField`] with the pieces every host loop needs:
//! a tick clock and scheduler that decouple simulation rate from display
//! rate, a reusable cooldown timer, seeded random ripple autogeneration,
//! and a serializable run configuration. Nothing here touches a window or a
//! terminal.

/// Random ripple autogeneration.
pub mod autogen;
/// Simulation clock and tick scheduling.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Reusable countdown timer.
pub mod cooldown;
/// Error types for the simulation crate.
pub mod error;
/// Top-level simulation orchestrator.
pub mod simulation;

/// Re-exports of [`autogen::AutoRipples`] and [`autogen::Ripple`].
pub use autogen::{AutoRipples, Ripple};
/// Re-exports of [`clock::SimClock`], [`clock::TickRate`], and [`clock::TickScheduler`].
pub use clock::{SimClock, TickRate, TickScheduler};
/// Re-exports of [`config::SimConfig`] and [`config::AutoRippleConfig`].
pub use config::{AutoRippleConfig, SimConfig};
/// Re-export of [`cooldown::Cooldown`].
pub use cooldown::Cooldown;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
