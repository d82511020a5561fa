//! Application state and per-frame update/draw.

use macroquad::prelude::*;
use rp_simulation::{Cooldown, SimConfig, SimResult, Simulation};
use tracing::info;

use crate::input::FrameInput;
use crate::theme;

/// Minimum seconds between injections while the mouse button is held.
pub const PAINT_INTERVAL_SECS: f64 = 0.05;

/// Window-side state around a running simulation.
pub struct AppState {
    /// The simulation being displayed.
    pub sim: Simulation,
    /// Throttles injections while painting with the mouse.
    paint: Cooldown,
    /// Whether stepping is suspended.
    pub paused: bool,
    /// Whether the HUD overlay is drawn.
    pub show_hud: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Build the simulation for `config`.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        Ok(Self {
            sim: Simulation::new(config)?,
            paint: Cooldown::new(PAINT_INTERVAL_SECS),
            paused: false,
            show_hud: true,
            should_quit: false,
        })
    }

    /// Map a canvas position to the field position of the cell drawn there.
    ///
    /// Tiles are drawn one cell up and to the left of their grid position,
    /// so the canvas origin shows cell `(1, 1)`.
    pub fn canvas_to_field(&self, canvas: (f32, f32)) -> (f64, f64) {
        let tile = self.sim.field().tile_size();
        (f64::from(canvas.0) + tile, f64::from(canvas.1) + tile)
    }

    /// Apply one frame of input with the pointer at `pointer` (field
    /// coordinates), then advance the simulation. Returns the ticks run.
    pub fn update(&mut self, input: &FrameInput, pointer: (f64, f64), frame_dt: f64) -> u32 {
        if input.quit {
            self.should_quit = true;
        }
        if input.toggle_autogen {
            self.sim.toggle_autogen();
        }
        if input.toggle_palette {
            let palette = self.sim.toggle_palette();
            info!(%palette, "palette switched");
        }
        if input.toggle_pause {
            self.paused = !self.paused;
        }
        if input.toggle_hud {
            self.show_hud = !self.show_hud;
        }
        if input.clear {
            self.sim.reset();
        }

        if input.inject {
            self.sim.inject(pointer);
        }
        self.paint.update(frame_dt);
        if input.painting {
            if self.paint.try_fire() {
                self.sim.inject(pointer);
            }
        } else {
            self.paint.reset();
        }

        if self.paused {
            0
        } else {
            self.sim.advance(frame_dt)
        }
    }

    /// Status lines for the HUD overlay.
    pub fn hud_lines(&self, fps: i32) -> Vec<String> {
        let autogen = if self.sim.autogen_enabled() { "on" } else { "off" };
        let mut lines = vec![
            format!("{fps} FPS  tick {}", self.sim.current_tick()),
            format!(
                "autogen {}  palette {}{}",
                autogen,
                self.sim.palette(),
                if self.paused { "  PAUSED" } else { "" }
            ),
        ];
        if let Some(stats) = self.sim.last_stats() {
            lines.push(format!("peak {:.2}", stats.peak()));
        }
        lines
    }

    /// Draw the field on the canvas, then the HUD in window space.
    pub fn draw(&self) {
        let field = self.sim.field();
        let palette = self.sim.palette();

        theme::setup_field_canvas(field.physical_size());
        field.render(|rect, factor| {
            draw_rectangle(
                rect.x as f32,
                rect.y as f32,
                rect.w as f32,
                rect.h as f32,
                theme::to_color(palette.color(factor)),
            );
        });
        set_default_camera();

        if self.show_hud {
            for (i, line) in self.hud_lines(get_fps()).iter().enumerate() {
                let y = theme::HUD_FONT_SIZE * (i as f32 + 1.0);
                draw_text(line, 8.0, y, theme::HUD_FONT_SIZE, theme::HUD_TEXT);
            }
        }
    }
}
