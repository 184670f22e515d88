//! # Chart Configuration
//!
//! The data record a chart is rendered from. It deserializes from JSON with
//! every field optional except the bars' values:
//!
//! ```json
//! {
//!   "width": 300,
//!   "height": 100,
//!   "title": "Election Results",
//!   "text_color": "white",
//!   "background_color": "black",
//!   "bar_color": "limegreen",
//!   "bars": [
//!     { "name": "Cthulu", "value": 512, "color": "gold" },
//!     { "name": "Bob", "value": 112 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::bar::Bar;
use crate::color::Color;
use crate::error::Result;

/// Everything needed to render one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Title drawn centered in the top row.
    pub title: String,
    pub text_color: Color,
    pub background_color: Color,
    /// Default color for bars without one of their own.
    pub bar_color: Color,
    /// Explicit lower bound of the value axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f32>,
    /// Explicit upper bound of the value axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f32>,
    /// TrueType/OpenType font file; the built-in bitmap font when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
    /// Rows, top to bottom.
    pub bars: Vec<Bar>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: String::new(),
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            bar_color: Color::LIME_GREEN,
            min_value: None,
            max_value: None,
            font: None,
            bars: Vec::new(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
