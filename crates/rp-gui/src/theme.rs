//! Colors and the field canvas: scaling the field's physical size to fit the window.

use macroquad::prelude::*;
use rp_core::{Rgb, Size};

/// Letterbox background around the field.
pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// HUD text color.
pub const HUD_TEXT: Color = Color::new(1.0, 0.925, 0.153, 1.0);
/// HUD font size in window pixels.
pub const HUD_FONT_SIZE: f32 = 20.0;

/// Convert a palette color to a macroquad color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Where the field canvas lands inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window pixels per canvas unit.
    pub scale: f32,
    /// Left edge in window pixels.
    pub offset_x: f32,
    /// Top edge in window pixels.
    pub offset_y: f32,
    /// Width in window pixels.
    pub width: f32,
    /// Height in window pixels.
    pub height: f32,
}

impl Viewport {
    /// Largest aspect-preserving fit of a `canvas_w`x`canvas_h` canvas,
    /// centered in a `screen_w`x`screen_h` window.
    pub fn fit(screen_w: f32, screen_h: f32, canvas_w: f32, canvas_h: f32) -> Self {
        let scale = (screen_w / canvas_w).min(screen_h / canvas_h);
        let width = canvas_w * scale;
        let height = canvas_h * scale;
        Self {
            scale,
            offset_x: (screen_w - width) / 2.0,
            offset_y: (screen_h - height) / 2.0,
            width,
            height,
        }
    }

    /// Convert a window position to canvas coordinates.
    pub fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }
}

/// Viewport for a field canvas in the current window.
pub fn field_viewport(size: Size) -> Viewport {
    Viewport::fit(screen_width(), screen_height(), size.width as f32, size.height as f32)
}

/// Set up a `Camera2D` that maps the field canvas to the current window.
pub fn setup_field_canvas(size: Size) {
    let (w, h) = (size.width as f32, size.height as f32);
    let view = field_viewport(size);
    set_camera(&Camera2D {
        zoom: vec2(2.0 / w, 2.0 / h),
        target: vec2(w / 2.0, h / 2.0),
        viewport: Some((
            view.offset_x as i32,
            view.offset_y as i32,
            view.width as i32,
            view.height as i32,
        )),
        ..Default::default()
    });
}

/// Mouse position in field canvas coordinates.
pub fn mouse_canvas_position(size: Size) -> (f32, f32) {
    let (mx, my) = mouse_position();
    field_viewport(size).to_canvas(mx, my)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_canvas_in_wide_window_is_pillarboxed() {
        let view = Viewport::fit(800.0, 400.0, 400.0, 400.0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset_x, 200.0);
        assert_eq!(view.offset_y, 0.0);
        assert_eq!((view.width, view.height), (400.0, 400.0));
    }

    #[test]
    fn canvas_scales_up_to_fill() {
        let view = Viewport::fit(800.0, 800.0, 400.0, 400.0);
        assert_eq!(view.scale, 2.0);
        assert_eq!(view.to_canvas(400.0, 200.0), (200.0, 100.0));
    }

    #[test]
    fn window_to_canvas_respects_offset() {
        let view = Viewport::fit(800.0, 400.0, 400.0, 400.0);
        assert_eq!(view.to_canvas(200.0, 0.0), (0.0, 0.0));
        assert_eq!(view.to_canvas(600.0, 400.0), (400.0, 400.0));
        assert!(view.to_canvas(100.0, 10.0).0 < 0.0);
    }

    #[test]
    fn palette_colors_convert() {
        let color = to_color(Rgb::new(255, 0, 51));
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }
}
