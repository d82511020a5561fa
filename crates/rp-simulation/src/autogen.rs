use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rp_core::Size;

use crate::config::AutoRippleConfig;
use crate::cooldown::Cooldown;

/// A generated impulse: where to inject and how wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Physical position of the impulse center.
    pub position: (f64, f64),
    /// Radius in cells.
    pub radius: i32,
}

/// Emits randomly placed ripples on a fixed interval.
///
/// Driven by simulated time, so the same seed and the same sequence of
/// updates always produce the same ripples.
#[derive(Debug, Clone)]
pub struct AutoRipples {
    enabled: bool,
    min_radius: i32,
    max_radius: i32,
    cooldown: Cooldown,
    rng: StdRng,
}

impl AutoRipples {
    /// Create a generator from its config and an RNG seed.
    pub fn new(config: &AutoRippleConfig, seed: u64) -> Self {
        let min_radius = config.min_radius.max(1);
        Self {
            enabled: config.enabled,
            min_radius,
            max_radius: config.max_radius.max(min_radius),
            cooldown: Cooldown::new(config.interval_secs),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Whether ripples are currently being generated.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch generation on or off. Switching on fires on the next update.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.cooldown.reset();
        }
        self.enabled = enabled;
    }

    /// Flip generation on or off. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Let `dt` seconds pass. Returns a ripple somewhere inside `area` when the
    /// interval has elapsed and generation is enabled.
    pub fn update(&mut self, dt: f64, area: Size) -> Option<Ripple> {
        if !self.enabled {
            return None;
        }
        self.cooldown.update(dt);
        if !self.cooldown.try_fire() {
            return None;
        }

        let x = self.rng.random_range(0.0..area.width);
        let y = self.rng.random_range(0.0..area.height);
        let radius = self.rng.random_range(self.min_radius..=self.max_radius);
        Some(Ripple {
            position: (x, y),
            radius,
        })
    }
}
