//! Fluent chart builder.
//!
//! ```no_run
//! use barchart::chart::{Bar, BarChartBuilder};
//! use barchart::color::Color;
//!
//! BarChartBuilder::new()
//!     .size(300, 100)
//!     .text_color(Color::WHITE)
//!     .background_color(Color::BLACK)
//!     .bar_color(Color::LIME_GREEN)
//!     .title("Election Results")
//!     .add_bar(Bar::new("Cthulu", 512.0).with_color(Color::GOLD))
//!     .add_bar(Bar::new("Bob", 112.0))
//!     .add_bar(Bar::new("Hitler", -22.0))
//!     .build("test.png")?;
//! # Ok::<(), barchart::ChartError>(())
//! ```

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use super::bar::Bar;
use super::config::ChartConfig;
use crate::color::Color;
use crate::error::Result;
use crate::layout;
use crate::output::OutputFormat;
use crate::render;
use crate::text::Face;

/// Accumulates a [`ChartConfig`]; each setter overwrites one field.
#[derive(Debug, Clone, Default)]
pub struct BarChartBuilder {
    config: ChartConfig,
}

impl BarChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Image size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.config.text_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    /// Default color for bars without their own.
    pub fn bar_color(mut self, color: Color) -> Self {
        self.config.bar_color = color;
        self
    }

    /// Lower bound of the value axis. Bars below it fail the build.
    pub fn min(mut self, value: f32) -> Self {
        self.config.min_value = Some(value);
        self
    }

    /// Upper bound of the value axis. Bars above it fail the build.
    pub fn max(mut self, value: f32) -> Self {
        self.config.max_value = Some(value);
        self
    }

    /// TrueType/OpenType font to draw text with.
    pub fn font(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.font = Some(path.into());
        self
    }

    /// Replace all bars.
    pub fn bars(mut self, bars: impl IntoIterator<Item = Bar>) -> Self {
        self.config.bars = bars.into_iter().collect();
        self
    }

    pub fn add_bar(mut self, bar: Bar) -> Self {
        self.config.bars.push(bar);
        self
    }

    /// Validate, lay out and draw the chart.
    pub fn render(&self) -> Result<RgbaImage> {
        let config = &self.config;
        layout::validate(config)?;

        let face = Face::load(config.font.as_deref())?;
        let layout = layout::compute(config, &face);
        let canvas = render::chart::render(config, &layout, &face)?;
        Ok(canvas.into_image())
    }

    /// Render the chart and write it to `output_path`, in the format its
    /// extension names (bmp, jpg/jpeg, gif, png).
    pub fn build(&self, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        let format = OutputFormat::from_path(path)?;

        info!(
            path = %path.display(),
            width = self.config.width,
            height = self.config.height,
            bars = self.config.bars.len(),
            "rendering bar chart"
        );

        let img = self.render()?;
        format.write(&img, path)
    }
}
