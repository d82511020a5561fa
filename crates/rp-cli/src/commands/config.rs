use std::path::Path;

use colored::Colorize;
use rp_simulation::SimConfig;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let config = SimConfig::default();
    match output {
        Some(path) => {
            if path.exists() {
                return Err(format!("{} already exists", path.display()));
            }
            config.save(path).map_err(|e| e.to_string())?;
            println!("  {} {}", "Wrote".green().bold(), path.display());
        }
        None => {
            let json = config.to_json_pretty().map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}
