//! Bar chart rendering.
//!
//! Draws a computed [`ChartLayout`] onto a [`PixelCanvas`]: background,
//! centered title, then one row per bar with its name, shaded bar and value.

use tracing::debug;

use crate::chart::ChartConfig;
use crate::color::Color;
use crate::error::Result;
use crate::layout::{BarGeometry, ChartLayout};
use crate::text::Typeface;

use super::canvas::{Alignment, PixelCanvas};
use super::shade::draw_shaded_bar;

/// Face, size and color shared by a group of text runs.
struct TextStyle<'a, F: ?Sized> {
    face: &'a F,
    size: f32,
    color: Color,
}

fn draw_text<F: Typeface + ?Sized>(
    canvas: &mut PixelCanvas,
    style: &TextStyle<'_, F>,
    text: &str,
    anchor: (f32, f32),
    alignment: Alignment,
) {
    match canvas.draw_text(text, style.face, style.size, style.color, anchor, alignment) {
        Ok(()) => {}
        // A label that does not fit is dropped; the rest of the chart still renders.
        Err(overflow) => debug!(%overflow, "skipped text outside canvas"),
    }
}

fn draw_bar_row<F: Typeface + ?Sized>(
    canvas: &mut PixelCanvas,
    label: &TextStyle<'_, F>,
    bar: &BarGeometry,
) {
    draw_text(canvas, label, &bar.name, bar.label_anchor, Alignment::Left);
    draw_shaded_bar(canvas, bar.color, bar.x, bar.y, bar.width, bar.height);
    draw_text(canvas, label, &bar.value_text, bar.value_anchor, Alignment::Left);
}

/// Render `layout` onto a fresh `config.width × config.height` canvas.
pub fn render<F: Typeface + ?Sized>(
    config: &ChartConfig,
    layout: &ChartLayout,
    face: &F,
) -> Result<PixelCanvas> {
    let mut canvas = PixelCanvas::new(config.width, config.height)?;
    canvas.fill(config.background_color);

    let title = TextStyle {
        face,
        size: layout.title_font_size,
        color: config.text_color,
    };
    draw_text(&mut canvas, &title, &config.title, layout.title_anchor, Alignment::Center);

    let label = TextStyle {
        face,
        size: layout.label_font_size,
        color: config.text_color,
    };
    for bar in &layout.bars {
        draw_bar_row(&mut canvas, &label, bar);
    }

    Ok(canvas)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Bar;
    use crate::layout;
    use crate::render::shade::strip_count;
    use crate::text::BitmapFace;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    fn demo_config() -> ChartConfig {
        ChartConfig {
            width: 300,
            height: 100,
            title: "Election Results".into(),
            text_color: Color::WHITE,
            background_color: Color::BLACK,
            bar_color: Color::LIME_GREEN,
            bars: vec![
                Bar::new("Cthulu", 512.0).with_color(Color::GOLD),
                Bar::new("Bob", 112.0),
                Bar::new("Hitler", -22.0),
            ],
            ..Default::default()
        }
    }

    fn render_demo() -> (ChartLayout, PixelCanvas) {
        let config = demo_config();
        let layout = layout::compute(&config, &BitmapFace);
        let canvas = render(&config, &layout, &BitmapFace).unwrap();
        (layout, canvas)
    }

    fn pixel_at(canvas: &PixelCanvas, x: f32, y: f32) -> Rgba<u8> {
        *canvas.image().get_pixel(x as u32, y as u32)
    }

    /// Pixel row whose center falls in strip `strip` of a bar starting at `y`.
    fn strip_row(y: f32, strip: usize) -> f32 {
        (y + strip as f32 - 0.5).ceil()
    }

    #[test]
    fn test_render_dimensions() {
        let (_, canvas) = render_demo();
        assert_eq!((canvas.width(), canvas.height()), (300, 100));
    }

    #[test]
    fn test_bar_top_uses_resolved_color() {
        let (layout, canvas) = render_demo();
        let cthulu = &layout.bars[0];
        let mid_x = cthulu.x + cthulu.width * 0.5;
        assert_eq!(pixel_at(&canvas, mid_x, strip_row(cthulu.y, 0)), Color::GOLD.into());

        let bob = &layout.bars[1];
        let mid_x = bob.x + bob.width * 0.5;
        assert_eq!(pixel_at(&canvas, mid_x, strip_row(bob.y, 0)), Color::LIME_GREEN.into());
    }

    #[test]
    fn test_bar_darkens_toward_bottom() {
        let (layout, canvas) = render_demo();
        let bar = &layout.bars[0];
        let mid_x = bar.x + bar.width * 0.5;
        let last = strip_count(bar.height) - 1;
        let top = pixel_at(&canvas, mid_x, strip_row(bar.y, 0));
        let bottom = pixel_at(&canvas, mid_x, strip_row(bar.y, last));
        assert!(bottom.0[0] < top.0[0]);
        assert!(bottom.0[0] as f32 >= top.0[0] as f32 * 0.5 - 1.0);
        assert_eq!(bottom.0[3], 255);
    }

    #[test]
    fn test_negative_bar_left_of_axis() {
        let (layout, canvas) = render_demo();
        let hitler = &layout.bars[2];
        let axis_x = layout.axis_x();
        let row = strip_row(hitler.y, 0);
        let inside = pixel_at(&canvas, axis_x - hitler.width * 0.5, row);
        assert_eq!(inside, Color::LIME_GREEN.into());
        let right_of_axis = pixel_at(&canvas, axis_x + 20.0, row);
        assert_eq!(right_of_axis, Color::BLACK.into());
    }

    #[test]
    fn test_text_drawn_in_text_color() {
        let (layout, canvas) = render_demo();
        let white: Rgba<u8> = Color::WHITE.into();
        let title_rows = 0..layout.row_height as u32;
        let title_has_text = canvas
            .image()
            .enumerate_pixels()
            .any(|(_, y, p)| title_rows.contains(&y) && *p == white);
        assert!(title_has_text);
    }

    #[test]
    fn test_overflowing_title_is_skipped() {
        let mut config = demo_config();
        config.title = "An extremely long title that cannot possibly fit the canvas".into();
        let layout = layout::compute(&config, &BitmapFace);
        let canvas = render(&config, &layout, &BitmapFace).unwrap();
        let white: Rgba<u8> = Color::WHITE.into();
        let title_rows = 0..layout.row_height as u32;
        let title_has_text = canvas
            .image()
            .enumerate_pixels()
            .any(|(_, y, p)| title_rows.contains(&y) && *p == white);
        assert!(!title_has_text);
    }

    #[test]
    fn test_tiny_canvas_renders() {
        let mut config = demo_config();
        config.height = 2;
        config.bars = (0..10).map(|i| Bar::new("bar", i as f32 - 3.0)).collect();
        let layout = layout::compute(&config, &BitmapFace);
        let canvas = render(&config, &layout, &BitmapFace).unwrap();
        assert_eq!(canvas.height(), 2);
    }
}
