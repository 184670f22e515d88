//! Built-in face from the Spleen bitmap font family.
//!
//! Spleen cells are twice as tall as they are wide. A requested pixel size
//! picks the smallest source font at least that tall (or the largest one)
//! and scales it nearest-neighbour to the target cell.

use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};

use super::{Coverage, TextMetrics, TextSize, Typeface};

/// Source fonts as (data, cell width, cell height), smallest first.
const SOURCES: [(&[u8], usize, usize); 2] = [(FONT_6X12, 6, 12), (FONT_12X24, 12, 24)];

/// Zero-sized handle to the embedded Spleen fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFace;

impl BitmapFace {
    /// Target cell (width, height) in whole pixels for a font size.
    fn cell(size: f32) -> (usize, usize) {
        if !size.is_finite() || size <= 0.0 {
            return (0, 0);
        }
        let h = size.round() as usize;
        (h.div_ceil(2), h)
    }

    fn source_for(cell_h: usize) -> (&'static [u8], usize, usize) {
        SOURCES
            .iter()
            .copied()
            .find(|&(_, _, h)| h >= cell_h)
            .unwrap_or(SOURCES[SOURCES.len() - 1])
    }
}

impl TextMetrics for BitmapFace {
    fn measure(&self, text: &str, size: f32) -> TextSize {
        let (w, h) = Self::cell(size);
        TextSize {
            width: (text.chars().count() * w) as f32,
            height: h as f32,
        }
    }
}

impl Typeface for BitmapFace {
    fn rasterize(&self, text: &str, size: f32) -> Coverage {
        let (cell_w, cell_h) = Self::cell(size);
        let chars = text.chars().count();
        if cell_w == 0 || cell_h == 0 || chars == 0 {
            return Coverage::empty();
        }

        let (data, src_w, src_h) = Self::source_for(cell_h);
        let Ok(mut font) = PSF2Font::new(data) else {
            return Coverage::empty();
        };

        let mut out = Coverage::new(chars * cell_w, cell_h);
        let mut src = vec![false; src_w * src_h];

        for (i, ch) in text.chars().enumerate() {
            src.fill(false);
            let utf8 = ch.to_string();
            let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
                continue;
            };
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < src_h && col_x < src_w {
                        src[row_y * src_w + col_x] = on;
                    }
                }
            }

            let origin = i * cell_w;
            for dy in 0..cell_h {
                let sy = dy * src_h / cell_h;
                for dx in 0..cell_w {
                    let sx = dx * src_w / cell_w;
                    if src[sy * src_w + sx] {
                        out.data[dy * out.width + origin + dx] = 1.0;
                    }
                }
            }
        }

        out
    }
}
