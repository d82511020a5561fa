use colored::Colorize;
use rp_core::RippleField;

use super::RunOptions;

/// Shade ramp from trough (darkest) to crest (brightest); the middle is rest.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Widest preview drawn when no sampling step is given.
const MAX_PREVIEW_COLS: usize = 80;

pub fn run(options: &RunOptions, every: Option<usize>) -> Result<(), String> {
    let (_, mut sim) = super::prepare(options)?;
    sim.run(options.ticks);

    let field = sim.field();
    let step = match every {
        Some(0) => return Err("--every must be at least 1".into()),
        Some(n) => n,
        None => default_step(field),
    };

    println!(
        "  {} after {} ticks {}",
        "Preview".bold(),
        sim.current_tick(),
        format!("(every {step} cells)").dimmed()
    );
    print!("{}", shade_map(field, step));
    Ok(())
}

/// Smallest sampling step that keeps the preview within [`MAX_PREVIEW_COLS`].
fn default_step(field: &RippleField) -> usize {
    field
        .grid_dimensions()
        .interior_cols()
        .div_ceil(MAX_PREVIEW_COLS)
        .max(1)
}

/// Pick the shade character for a display intensity in `0.0..=1.0`.
fn shade(factor: f64) -> char {
    let last = SHADES.len() - 1;
    let idx = (factor.clamp(0.0, 1.0) * last as f64).round() as usize;
    char::from(SHADES[idx.min(last)])
}

/// Draw every `step`-th interior cell as one character, one line per sampled row.
fn shade_map(field: &RippleField, step: usize) -> String {
    let dims = field.grid_dimensions();
    let mut out = String::new();
    for row in (1..dims.rows - 1).step_by(step) {
        for col in (1..dims.cols - 1).step_by(step) {
            let factor = field.sample(row, col).unwrap_or(0.5);
            out.push(shade(factor));
        }
        out.push('\n');
    }
    out
}
