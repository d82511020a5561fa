//! Command-line arguments for the window.

use std::path::PathBuf;

use clap::Parser;
use rp_simulation::SimConfig;

/// Interactive ripple simulator window.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "rp-gui", version)]
pub struct GuiArgs {
    /// JSON configuration file (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Step at a fixed number of ticks per second instead of once per frame
    #[arg(long, value_name = "HZ")]
    pub fixed: Option<f64>,

    /// Start with random ripple autogeneration switched on
    #[arg(long)]
    pub autogen: bool,
}

impl GuiArgs {
    /// Load the configuration file (or defaults) and apply the overrides.
    pub fn load_config(&self) -> Result<SimConfig, String> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path).map_err(|e| e.to_string())?,
            None => SimConfig::default(),
        };
        if self.fixed.is_some() {
            config = config.with_tick_rate(self.fixed);
        }
        if self.autogen {
            config = config.with_autogen(true);
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<GuiArgs, clap::Error> {
        GuiArgs::try_parse_from(std::iter::once("rp-gui").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_means_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, GuiArgs::default());
        assert_eq!(args.load_config().unwrap(), SimConfig::default());
    }

    #[test]
    fn all_flags() {
        let args = parse(&["--config", "a.json", "--fixed", "30", "--autogen"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("a.json")));
        assert_eq!(args.fixed, Some(30.0));
        assert!(args.autogen);
    }

    #[test]
    fn missing_values_and_unknown_flags() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--fixed"]).is_err());
        assert!(parse(&["--fixed", "fast"]).is_err());
        assert!(parse(&["--world", "x"]).is_err());
    }

    #[test]
    fn overrides_reach_the_config() {
        let config = parse(&["--fixed", "30", "--autogen"])
            .unwrap()
            .load_config()
            .unwrap();
        assert_eq!(config.tick_rate, Some(30.0));
        assert!(config.autogen.enabled);
    }

    #[test]
    fn invalid_rate_fails_validation() {
        let args = parse(&["--fixed=-5"]).unwrap();
        assert!(args.load_config().unwrap_err().contains("tick rate"));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = std::env::temp_dir().join("rp-gui-args-missing");
        let path = dir.join("absent.json");
        let args = parse(&["--config", path.to_str().unwrap()]).unwrap();
        assert!(args.load_config().unwrap_err().contains("absent.json"));
    }
}
