//! Ripples window: macroquad entry point.
//!
//! The field's physical size is the drawing canvas, scaled to fit the
//! window. Space or the left mouse button drops ripples under the pointer.

use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use rp_core::FieldConfig;
use rp_gui::app::AppState;
use rp_gui::args::GuiArgs;
use rp_gui::input::FrameInput;
use rp_gui::theme;

fn window_conf() -> Conf {
    let size = FieldConfig::default().size;
    Conf {
        window_title: "Ripples".to_owned(),
        window_width: size.width as i32,
        window_height: size.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let config = match GuiArgs::parse().load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut app = match AppState::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    loop {
        let input = FrameInput::poll();
        let canvas = theme::mouse_canvas_position(app.sim.field().physical_size());
        let pointer = app.canvas_to_field(canvas);
        app.update(&input, pointer, f64::from(get_frame_time()));

        if app.should_quit {
            break;
        }

        // Clear with black (letterbox bars)
        clear_background(theme::BACKGROUND);
        app.draw();

        next_frame().await;
    }
}
