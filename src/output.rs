//! Output image formats.
//!
//! The format is chosen once from the output path's extension and passed to
//! an explicit encode step. Encoding happens in memory and the bytes go to a
//! temporary file beside the target, which is renamed over it only once
//! fully written. A failed build never leaves a partial or truncated image.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ChartError, Result};

/// Supported raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Bmp,
    Jpeg,
    Gif,
    Png,
}

impl OutputFormat {
    /// Resolve the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| ChartError::UnsupportedOutputFormat(path.display().to_string()))?;

        match ext.as_str() {
            "bmp" => Ok(OutputFormat::Bmp),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "png" => Ok(OutputFormat::Png),
            _ => Err(ChartError::UnsupportedOutputFormat(ext)),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Png => ImageFormat::Png,
        }
    }

    /// Encode `img` into bytes of this format. JPEG has no alpha channel, so
    /// it is dropped first.
    pub fn encode(self, img: &RgbaImage) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut cursor = Cursor::new(&mut bytes);
        let encoded = match self {
            OutputFormat::Jpeg => DynamicImage::ImageRgba8(img.clone())
                .to_rgb8()
                .write_to(&mut cursor, self.image_format()),
            _ => img.write_to(&mut cursor, self.image_format()),
        };
        encoded.map_err(|e| ChartError::Image(format!("Failed to encode {:?}: {}", self, e)))?;
        Ok(bytes)
    }

    /// Encode `img` and atomically replace `path` with it.
    pub fn write(self, img: &RgbaImage, path: &Path) -> Result<()> {
        let bytes = self.encode(img)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        debug!(tmp = %tmp.path().display(), bytes = bytes.len(), "encoded image staged");

        tmp.persist(path).map_err(|e| ChartError::Io(e.error))?;
        Ok(())
    }
}
