use std::path::Path;

use colored::Colorize;
use rp_core::RippleField;
use rp_simulation::SimConfig;

pub fn run(path: &Path) -> Result<(), String> {
    let config = SimConfig::load(path).map_err(|e| e.to_string())?;
    let field = RippleField::from_config(&config.field).map_err(|e| e.to_string())?;

    println!("  {} {}", "OK".green().bold(), path.display());
    println!(
        "  {} field, {} cells, tile {:.3}",
        field.physical_size(),
        field.grid_dimensions(),
        field.tile_size()
    );
    match config.tick_rate {
        Some(hz) => println!("  {hz} ticks/s, at most {} per frame", config.max_ticks_per_frame),
        None => println!("  one tick per frame"),
    }
    let damping = field.damping();
    if damping.is_nan() || damping <= 0.0 || damping > 1.0 {
        println!(
            "  {} damping {damping} is outside (0, 1]; ripples will grow or flip sign",
            "WARN".yellow().bold()
        );
    }
    Ok(())
}
