//! # Text Measurement and Rasterization
//!
//! Layout only needs the size of a text run; the canvas additionally needs a
//! coverage mask to stamp. Both go through the traits here so that layout can
//! be tested against a fixed-advance measurer.
//!
//! | Face | Source |
//! |------|--------|
//! | [`BitmapFace`] | Built-in Spleen bitmap font, scaled to any pixel height |
//! | [`TtfFace`] | TrueType/OpenType file loaded with `ab_glyph` |

mod bitmap;
mod ttf;

pub use bitmap::BitmapFace;
pub use ttf::TtfFace;

use std::path::Path;

use crate::error::Result;

/// Rendered extent of a text run, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Measures text runs.
///
/// Width must be non-decreasing as characters are appended, otherwise column
/// widths stop lining up across rows.
pub trait TextMetrics {
    fn measure(&self, text: &str, size: f32) -> TextSize;
}

/// A face that can also rasterize what it measures.
pub trait Typeface: TextMetrics {
    /// Render `text` at `size` into an anti-aliased (or 0/1) coverage mask.
    fn rasterize(&self, text: &str, size: f32) -> Coverage;
}

/// Coverage mask of a rendered text run.
pub struct Coverage {
    pub width: usize,
    pub height: usize,
    /// 0.0 = untouched, 1.0 = fully covered.
    pub data: Vec<f32>,
}

impl Coverage {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}

/// The face a chart draws with.
pub enum Face {
    Bitmap(BitmapFace),
    Ttf(TtfFace),
}

impl Face {
    /// Load the face at `path`, or the built-in bitmap face when `None`.
    pub fn load(path: Option<&Path>) -> Result<Face> {
        match path {
            Some(p) => Ok(Face::Ttf(TtfFace::from_file(p)?)),
            None => Ok(Face::Bitmap(BitmapFace)),
        }
    }
}

impl TextMetrics for Face {
    fn measure(&self, text: &str, size: f32) -> TextSize {
        match self {
            Face::Bitmap(f) => f.measure(text, size),
            Face::Ttf(f) => f.measure(text, size),
        }
    }
}

impl Typeface for Face {
    fn rasterize(&self, text: &str, size: f32) -> Coverage {
        match self {
            Face::Bitmap(f) => f.rasterize(text, size),
            Face::Ttf(f) => f.rasterize(text, size),
        }
    }
}

/// Fixed-advance measurer for layout tests: every char is `0.5 × size`
/// wide and one `size` tall.
#[cfg(test)]
pub(crate) struct FixedMetrics;

#[cfg(test)]
impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str, size: f32) -> TextSize {
        TextSize {
            width: text.chars().count() as f32 * size * 0.5,
            height: size,
        }
    }
}
