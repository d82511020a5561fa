//! Keyboard and mouse bindings.

use macroquad::prelude::*;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Space: inject a ripple under the pointer.
    pub inject: bool,
    /// Left mouse button held down.
    pub painting: bool,
    /// A: toggle ripple autogeneration.
    pub toggle_autogen: bool,
    /// C: clear the field.
    pub clear: bool,
    /// Tab: switch palette.
    pub toggle_palette: bool,
    /// P: pause or resume stepping.
    pub toggle_pause: bool,
    /// H: show or hide the HUD.
    pub toggle_hud: bool,
    /// Escape: quit.
    pub quit: bool,
}

impl FrameInput {
    /// Poll the keyboard and mouse.
    pub fn poll() -> Self {
        Self {
            inject: is_key_pressed(KeyCode::Space),
            painting: is_mouse_button_down(MouseButton::Left),
            toggle_autogen: is_key_pressed(KeyCode::A),
            clear: is_key_pressed(KeyCode::C),
            toggle_palette: is_key_pressed(KeyCode::Tab),
            toggle_pause: is_key_pressed(KeyCode::P),
            toggle_hud: is_key_pressed(KeyCode::H),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}
