pub mod check;
pub mod config;
pub mod preview;
pub mod run;

use std::path::PathBuf;

use clap::Args;
use rp_simulation::{SimConfig, Simulation};

/// Options shared by every command that runs the simulation.
#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    /// Number of ticks to simulate
    #[arg(short, long, default_value = "120")]
    pub ticks: u64,

    /// RNG seed for autogenerated ripples (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON configuration file (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Inject a ripple at X,Y before the first tick (repeatable)
    #[arg(long = "at", value_name = "X,Y", value_parser = parse_point)]
    pub at: Vec<(f64, f64)>,

    /// Radius, in cells, of ripples injected with --at
    #[arg(short, long)]
    pub radius: Option<i32>,

    /// Enable random ripple autogeneration
    #[arg(long)]
    pub autogen: bool,
}

/// Parse an `X,Y` pair of physical coordinates.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got \"{s}\""))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate \"{}\"", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate \"{}\"", y.trim()))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got \"{s}\""));
    }
    Ok((x, y))
}

/// Resolve the configuration for a run: file or defaults, then CLI overrides.
fn resolve_config(options: &RunOptions) -> Result<SimConfig, String> {
    let mut config = match &options.config {
        Some(path) => SimConfig::load(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(radius) = options.radius {
        config = config.with_ripple_radius(radius);
    }
    if options.autogen {
        config = config.with_autogen(true);
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Build a simulation and apply the `--at` injections. No ticks are run yet.
fn prepare(options: &RunOptions) -> Result<(SimConfig, Simulation), String> {
    let config = resolve_config(options)?;
    let mut sim =
        Simulation::new(&config).map_err(|e| format!("simulation setup failed: {e}"))?;
    for point in &options.at {
        sim.inject(*point);
    }
    Ok((config, sim))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RunOptions {
        RunOptions {
            ticks: 10,
            seed: None,
            config: None,
            at: Vec::new(),
            radius: None,
            autogen: false,
        }
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("200,150"), Ok((200.0, 150.0)));
        assert_eq!(parse_point(" 1.5 , -2 "), Ok((1.5, -2.0)));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("200").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,b").is_err());
        assert!(parse_point("inf,1").is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let opts = RunOptions {
            seed: Some(9),
            radius: Some(7),
            autogen: true,
            ..options()
        };
        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.ripple_radius, 7);
        assert!(config.autogen.enabled);
    }

    #[test]
    fn invalid_override_is_reported() {
        let opts = RunOptions {
            radius: Some(0),
            ..options()
        };
        let err = resolve_config(&opts).unwrap_err();
        assert!(err.contains("ripple radius"));
    }

    #[test]
    fn prepare_applies_injections() {
        let opts = RunOptions {
            at: vec![(200.0, 200.0), (-900.0, 0.0)],
            ..options()
        };
        let (_, sim) = prepare(&opts).unwrap();
        assert_eq!(sim.injections(), 1);
        assert_eq!(sim.current_tick(), 0);
    }
}
