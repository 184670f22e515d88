//! Shaded bars.
//!
//! A bar is drawn as a stack of 1-pixel strips, top to bottom. Each strip's
//! RGB is the base color stepped linearly toward half intensity, reaching it
//! at the bar's full height. Alpha is left alone.

use crate::color::Color;

use super::canvas::PixelCanvas;

/// Fraction of each channel removed over the full bar height.
const SHADE_DEPTH: f32 = 0.5;

/// Number of strips for a bar of `bar_height` pixels. Never zero.
pub fn strip_count(bar_height: f32) -> usize {
    if bar_height.is_finite() && bar_height > 0.0 {
        (bar_height.ceil() as usize).max(1)
    } else {
        1
    }
}

/// Color of strip `strip` (0 = top) of a bar `bar_height` pixels tall.
pub fn color_at_strip(base: Color, strip: usize, bar_height: f32) -> Color {
    if !bar_height.is_finite() || bar_height <= 0.0 {
        return base;
    }
    let t = strip as f32 * SHADE_DEPTH / bar_height;
    let shade = |c: u8| (c as f32 * (1.0 - t)).max(0.0).round() as u8;
    Color::rgba(shade(base.r), shade(base.g), shade(base.b), base.a)
}

/// Draw a shaded bar with its top-left corner at `(x, y)`.
pub fn draw_shaded_bar(canvas: &mut PixelCanvas, color: Color, x: f32, y: f32, width: f32, height: f32) {
    for i in 0..strip_count(height) {
        canvas.fill_rect(color_at_strip(color, i, height), x, y + i as f32, width, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_count() {
        assert_eq!(strip_count(20.0), 20);
        assert_eq!(strip_count(20.2), 21);
        assert_eq!(strip_count(0.3), 1);
        assert_eq!(strip_count(0.0), 1);
        assert_eq!(strip_count(f32::NAN), 1);
    }

    #[test]
    fn test_top_strip_is_base_color() {
        assert_eq!(color_at_strip(Color::GOLD, 0, 20.0), Color::GOLD);
    }

    #[test]
    fn test_bottom_strip_is_about_half() {
        let base = Color::rgba(200, 100, 50, 180);
        let height = 20.0;
        let bottom = color_at_strip(base, strip_count(height) - 1, height);
        // Within one gradient step of half intensity.
        let step = |c: u8| c as f32 * SHADE_DEPTH / height;
        for (shaded, original) in [(bottom.r, base.r), (bottom.g, base.g), (bottom.b, base.b)] {
            let half = original as f32 * 0.5;
            assert!((shaded as f32 - half).abs() <= step(original) + 0.5);
        }
        assert_eq!(bottom.a, 180);
    }

    #[test]
    fn test_gradient_monotonic() {
        let mut prev = color_at_strip(Color::LIME_GREEN, 0, 17.0);
        for i in 1..strip_count(17.0) {
            let c = color_at_strip(Color::LIME_GREEN, i, 17.0);
            assert!(c.r <= prev.r && c.g <= prev.g && c.b <= prev.b);
            prev = c;
        }
    }

    #[test]
    fn test_draw_shaded_bar_rows() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        canvas.fill(Color::BLACK);
        draw_shaded_bar(&mut canvas, Color::WHITE, 2.0, 2.0, 5.0, 4.0);

        let top = canvas.image().get_pixel(3, 2).0;
        let bottom = canvas.image().get_pixel(3, 5).0;
        assert_eq!(top, [255, 255, 255, 255]);
        assert_eq!(bottom, [159, 159, 159, 255]);
        // Below and beside the bar stays background.
        assert_eq!(canvas.image().get_pixel(3, 6).0, [0, 0, 0, 255]);
        assert_eq!(canvas.image().get_pixel(7, 3).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_sub_pixel_bar_draws_one_strip() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        canvas.fill(Color::BLACK);
        draw_shaded_bar(&mut canvas, Color::WHITE, 0.0, 0.0, 10.0, 0.4);
        assert_eq!(canvas.image().get_pixel(4, 0).0, [255, 255, 255, 255]);
    }
}
