//! RGBA pixel canvas the chart is drawn onto.
//!
//! Polygons are scan-converted by sampling pixel centers, so adjacent
//! 1-pixel strips never overlap or leave gaps. Text is stamped from a
//! [`Coverage`](crate::text::Coverage) mask with source-over blending.

use image::{Pixel, Rgba, RgbaImage};
use thiserror::Error;

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::text::Typeface;

/// Horizontal placement of a text run relative to its anchor. Text is
/// always vertically centered on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

impl Alignment {
    /// Top-left corner of a `width × height` box anchored at `(x, y)`.
    fn top_left(self, (x, y): (f32, f32), width: f32, height: f32) -> (f32, f32) {
        let left = match self {
            Alignment::Left => x,
            Alignment::Center => x - width * 0.5,
        };
        (left, y - height * 0.5)
    }
}

/// A text run whose measured box does not fit on the canvas.
#[derive(Debug, Clone, Error)]
#[error("text {text:?} at ({left}, {top}) size {width}x{height} falls outside the canvas")]
pub struct TextOverflow {
    pub text: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Mutable RGBA buffer.
pub struct PixelCanvas {
    img: RgbaImage,
}

impl PixelCanvas {
    /// Allocate a transparent `width × height` canvas.
    ///
    /// Sizes whose buffer length overflows `usize` are `InvalidSize`; sizes
    /// the allocator refuses are `Allocation`. Neither panics.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidSize { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ChartError::InvalidSize { width, height })?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| ChartError::Allocation { width, height })?;
        buf.resize(len, 0u8);

        let img = RgbaImage::from_raw(width, height, buf)
            .ok_or(ChartError::InvalidSize { width, height })?;
        Ok(Self { img })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Replace every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let px: Rgba<u8> = color.into();
        for p in self.img.pixels_mut() {
            *p = px;
        }
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        match color.0[3] {
            0 => {}
            255 => *dst = color,
            _ => dst.blend(&color),
        }
    }

    /// Fill a polygon (even-odd rule). Degenerate or non-finite polygons draw nothing.
    pub fn fill_polygon(&mut self, color: Color, points: &[(f32, f32)]) {
        if points.len() < 3 || points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return;
        }
        let px: Rgba<u8> = color.into();

        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let row_start = (min_y.floor().max(0.0)) as i64;
        let row_end = (max_y.ceil() as i64).min(self.img.height() as i64);
        let width = self.img.width() as i64;

        let mut crossings = Vec::with_capacity(points.len());
        for py in row_start..row_end {
            let cy = py as f32 + 0.5;
            crossings.clear();
            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= cy) != (y1 <= cy) {
                    crossings.push(x0 + (cy - y0) * (x1 - x0) / (y1 - y0));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for span in crossings.chunks_exact(2) {
                // Pixel px is inside when its center px + 0.5 lies in [a, b).
                let start = ((span[0] - 0.5).ceil() as i64).max(0);
                let end = ((span[1] - 0.5).ceil() as i64).min(width);
                for x in start..end {
                    self.blend(x, py, px);
                }
            }
        }
    }

    /// Fill the axis-aligned rectangle `(x, y)–(x + w, y + h)`.
    pub fn fill_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        self.fill_polygon(color, &[(x, y), (x, y + h), (x + w, y + h), (x + w, y)]);
    }

    /// Stamp `text` anchored at `anchor`.
    ///
    /// Fails without touching the canvas when the measured text box is not
    /// entirely inside the canvas.
    pub fn draw_text<F: Typeface + ?Sized>(
        &mut self,
        text: &str,
        face: &F,
        size: f32,
        color: Color,
        anchor: (f32, f32),
        alignment: Alignment,
    ) -> std::result::Result<(), TextOverflow> {
        let measured = face.measure(text, size);
        let (left, top) = alignment.top_left(anchor, measured.width, measured.height);

        let overflow = !left.is_finite()
            || !top.is_finite()
            || left < 0.0
            || top < 0.0
            || left + measured.width > self.img.width() as f32
            || top + measured.height > self.img.height() as f32;
        if overflow {
            return Err(TextOverflow {
                text: text.to_string(),
                left,
                top,
                width: measured.width,
                height: measured.height,
            });
        }

        let coverage = face.rasterize(text, size);
        let ox = left.round() as i64;
        let oy = top.round() as i64;
        for y in 0..coverage.height {
            for x in 0..coverage.width {
                let c = coverage.get(x, y);
                if c <= 0.0 {
                    continue;
                }
                let alpha = (color.a as f32 * c).round() as u8;
                let px = Rgba([color.r, color.g, color.b, alpha]);
                self.blend(ox + x as i64, oy + y as i64, px);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BitmapFace;
    use pretty_assertions::assert_eq;

    fn count(canvas: &PixelCanvas, color: Color) -> usize {
        let px: Rgba<u8> = color.into();
        canvas.image().pixels().filter(|&&p| p == px).count()
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PixelCanvas::new(0, 10),
            Err(ChartError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_huge_size_is_an_error_not_a_panic() {
        let result = PixelCanvas::new(u32::MAX, u32::MAX);
        assert!(matches!(
            result,
            Err(ChartError::InvalidSize { .. } | ChartError::Allocation { .. })
        ));
    }

    #[test]
    fn test_fill() {
        let mut canvas = PixelCanvas::new(4, 3).unwrap();
        canvas.fill(Color::BLACK);
        assert_eq!(count(&canvas, Color::BLACK), 12);
    }

    #[test]
    fn test_fill_rect_pixel_aligned() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        canvas.fill(Color::WHITE);
        canvas.fill_rect(Color::RED, 2.0, 3.0, 4.0, 2.0);
        assert_eq!(count(&canvas, Color::RED), 8);
        assert_eq!(*canvas.image().get_pixel(2, 3), Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.image().get_pixel(6, 3), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_fractional_strips_do_not_overlap() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        canvas.fill(Color::WHITE);
        let y = 1.3;
        for i in 0..5 {
            let c = Color::rgba(0, 0, 0, 128);
            canvas.fill_rect(c, 0.0, y + i as f32, 10.0, 1.0);
        }
        // Each covered row was blended exactly once.
        let once = canvas.image().get_pixel(0, 2).0;
        for row in 2..6 {
            assert_eq!(canvas.image().get_pixel(5, row).0, once);
        }
        assert_eq!(canvas.image().get_pixel(5, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_fill_polygon_clips_to_canvas() {
        let mut canvas = PixelCanvas::new(5, 5).unwrap();
        canvas.fill_rect(Color::BLUE, -10.0, -10.0, 100.0, 100.0);
        assert_eq!(count(&canvas, Color::BLUE), 25);
    }

    #[test]
    fn test_fill_polygon_ignores_nan() {
        let mut canvas = PixelCanvas::new(5, 5).unwrap();
        canvas.fill_rect(Color::BLUE, f32::NAN, 0.0, 3.0, 3.0);
        assert_eq!(count(&canvas, Color::BLUE), 0);
    }

    #[test]
    fn test_draw_text_inside() {
        let mut canvas = PixelCanvas::new(100, 40).unwrap();
        canvas.fill(Color::WHITE);
        let result = canvas.draw_text(
            "Bob",
            &BitmapFace,
            16.0,
            Color::BLACK,
            (50.0, 20.0),
            Alignment::Center,
        );
        assert!(result.is_ok());
        assert!(count(&canvas, Color::BLACK) > 0);
    }

    #[test]
    fn test_draw_text_overflow_leaves_canvas_untouched() {
        let mut canvas = PixelCanvas::new(30, 20).unwrap();
        canvas.fill(Color::WHITE);
        let result = canvas.draw_text(
            "Election Results",
            &BitmapFace,
            16.0,
            Color::BLACK,
            (15.0, 10.0),
            Alignment::Center,
        );
        let err = result.unwrap_err();
        assert_eq!(err.text, "Election Results");
        assert_eq!(count(&canvas, Color::WHITE), 600);
    }

    #[test]
    fn test_alignment_top_left() {
        assert_eq!(Alignment::Center.top_left((10.0, 10.0), 4.0, 2.0), (8.0, 9.0));
        assert_eq!(Alignment::Left.top_left((10.0, 10.0), 4.0, 2.0), (10.0, 9.0));
    }
}
