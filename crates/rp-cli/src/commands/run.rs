use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use super::RunOptions;

pub fn run(options: &RunOptions, verbose: bool) -> Result<(), String> {
    let (config, mut sim) = super::prepare(options)?;
    let field = sim.field();
    let dims = field.grid_dimensions();
    info!(ticks = options.ticks, seed = config.seed, dims = %dims, "starting headless run");

    let details = format!(
        "(tile {:.3}, flow {}, damping {})",
        field.tile_size(),
        field.flow_factor(),
        field.damping()
    );
    println!(
        "  {} {} field, {} cells {}",
        "Ripples".bold(),
        field.physical_size(),
        dims,
        details.dimmed()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tick", "Min", "Max", "Peak"]);

    let mut overall_peak = 0.0_f64;
    for _ in 0..options.ticks {
        let stats = sim.tick();
        overall_peak = overall_peak.max(stats.peak());
        if verbose {
            table.add_row(vec![
                sim.current_tick().to_string(),
                format!("{:.4}", stats.min),
                format!("{:.4}", stats.max),
                format!("{:.4}", stats.peak()),
            ]);
        }
    }

    if verbose && options.ticks > 0 {
        println!();
        println!("{table}");
    }

    info!(ticks = sim.current_tick(), peak = overall_peak, "run finished");

    println!();
    println!(
        "  {} ticks, seed={}, {} injections",
        sim.current_tick(),
        config.seed,
        sim.injections()
    );
    println!("  Peak amplitude during run: {overall_peak:.4}");

    let final_amplitude = sim.field().max_amplitude();
    let label = format!("Final amplitude: {final_amplitude:.4}");
    if final_amplitude == 0.0 {
        println!("  {}", label.dimmed());
    } else {
        println!("  {}", label.cyan());
    }

    Ok(())
}
