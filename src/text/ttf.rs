//! TrueType/OpenType faces loaded from disk.
//!
//! Renders text to an anti-aliased coverage buffer using ab_glyph.

use std::path::Path;

use ab_glyph::{Font, FontArc, ScaleFont};

use super::{Coverage, TextMetrics, TextSize, Typeface};
use crate::error::{ChartError, Result};

/// A scalable outline font.
pub struct TtfFace {
    font: FontArc,
}

impl TtfFace {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| ChartError::Font(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| ChartError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Glyph ids with their caret x positions, and the total advance.
    fn layout(&self, text: &str, size: f32) -> (Vec<(ab_glyph::GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(size);
        let mut glyphs = Vec::new();
        let mut caret_x = 0.0f32;
        let mut prev = None;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                caret_x += scaled.kern(p, glyph_id);
            }
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
            prev = Some(glyph_id);
        }

        (glyphs, caret_x)
    }
}

impl TextMetrics for TtfFace {
    fn measure(&self, text: &str, size: f32) -> TextSize {
        if !size.is_finite() || size <= 0.0 {
            return TextSize::default();
        }
        let scaled = self.font.as_scaled(size);
        let (_, advance) = self.layout(text, size);
        TextSize {
            width: advance.max(0.0),
            height: scaled.ascent() - scaled.descent(),
        }
    }
}

impl Typeface for TtfFace {
    fn rasterize(&self, text: &str, size: f32) -> Coverage {
        if !size.is_finite() || size <= 0.0 || text.is_empty() {
            return Coverage::empty();
        }

        let scaled = self.font.as_scaled(size);
        let (glyphs, advance) = self.layout(text, size);

        let width = advance.ceil().max(1.0) as usize;
        let ascent = scaled.ascent();
        let height = (ascent - scaled.descent()).ceil().max(1.0) as usize;
        let mut out = Coverage::new(width, height);

        for (glyph_id, glyph_x) in glyphs {
            let glyph = glyph_id.with_scale_and_position(size, ab_glyph::point(glyph_x, ascent));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i32 + bounds.min.x as i32;
                    let y = py as i32 + bounds.min.y as i32;
                    if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                        let idx = y as usize * width + x as usize;
                        out.data[idx] = (out.data[idx] + coverage).min(1.0);
                    }
                });
            }
        }

        out
    }
}
