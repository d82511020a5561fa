use std::path::Path;

use rp_core::{FieldConfig, Palette};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Settings for random ripple autogeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRippleConfig {
    /// Whether autogeneration starts switched on.
    pub enabled: bool,
    /// Simulated seconds between generated ripples.
    pub interval_secs: f64,
    /// Smallest generated radius, in cells.
    pub min_radius: i32,
    /// Largest generated radius, in cells (inclusive).
    pub max_radius: i32,
}

impl Default for AutoRippleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: 0.5,
            min_radius: 2,
            max_radius: 6,
        }
    }
}

/// Configuration for a simulation run.
///
/// Missing fields fall back to [`SimConfig::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for deterministic autogeneration.
    pub seed: u64,
    /// Ripple field parameters.
    pub field: FieldConfig,
    /// Ticks per second. `None` steps once per displayed frame.
    pub tick_rate: Option<f64>,
    /// Upper bound on ticks run for a single frame in fixed-rate mode.
    pub max_ticks_per_frame: u32,
    /// Radius, in cells, used for host-initiated injections.
    pub ripple_radius: i32,
    /// Display palette.
    pub palette: Palette,
    /// Random ripple autogeneration.
    pub autogen: AutoRippleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldConfig::default(),
            tick_rate: None,
            max_ticks_per_frame: 8,
            ripple_radius: 4,
            palette: Palette::default(),
            autogen: AutoRippleConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic autogeneration.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the field parameters.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    /// Step at a fixed number of ticks per second, or once per frame with `None`.
    pub fn with_tick_rate(mut self, hz: Option<f64>) -> Self {
        self.tick_rate = hz;
        self
    }

    /// Set the radius used for host-initiated injections.
    pub fn with_ripple_radius(mut self, radius: i32) -> Self {
        self.ripple_radius = radius;
        self
    }

    /// Set the display palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Switch random ripple autogeneration on or off.
    pub fn with_autogen(mut self, enabled: bool) -> Self {
        self.autogen.enabled = enabled;
        self
    }

    /// Check every setting, including the field parameters.
    pub fn validate(&self) -> SimResult<()> {
        self.field.validate()?;

        if let Some(hz) = self.tick_rate
            && (!hz.is_finite() || hz <= 0.0)
        {
            return Err(SimError::Config(format!(
                "tick rate must be a positive number of ticks per second, got {hz}"
            )));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(SimError::Config(
                "max ticks per frame must be at least 1".into(),
            ));
        }
        if self.ripple_radius <= 0 {
            return Err(SimError::Config(format!(
                "ripple radius must be positive, got {}",
                self.ripple_radius
            )));
        }

        let autogen = &self.autogen;
        if !autogen.interval_secs.is_finite() || autogen.interval_secs < 0.0 {
            return Err(SimError::Config(format!(
                "autogen interval must be a non-negative number of seconds, got {}",
                autogen.interval_secs
            )));
        }
        if autogen.min_radius <= 0 || autogen.min_radius > autogen.max_radius {
            return Err(SimError::Config(format!(
                "autogen radius range {}..={} is empty or not positive",
                autogen.min_radius, autogen.max_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> SimResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json + "\n").map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
