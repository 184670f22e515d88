//! # Chart Layout
//!
//! Turns a [`ChartConfig`] into concrete geometry. Pure: no drawing, no I/O.
//!
//! ```text
//! ┌──────────────────────── title row ─────────────────────────┐
//! │ name col │ graphic col (axis at y_axis_offset) │ value col │
//! │ Cthulu   │   ████████████████████████████      │ 512       │
//! │ Hitler   │ ██                                  │ -22       │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every row is `height / (bars + 1)` tall and 80% of it holds content; the
//! remaining 20% is split evenly above and below as the cell offset, which is
//! also used as horizontal padding.

use tracing::{debug, warn};

use crate::chart::{Bar, ChartConfig};
use crate::color::Color;
use crate::error::{Bound, ChartError, Result};
use crate::text::TextMetrics;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Share of a row taken by its content.
const ROW_CONTENT_RATIO: f32 = 0.8;
/// Bar height relative to row content.
const BAR_HEIGHT_RATIO: f32 = 1.0;
/// Title font size relative to row content.
const TITLE_FONT_RATIO: f32 = 1.0;
/// Name/value font size relative to row content.
const LABEL_FONT_RATIO: f32 = 0.8;

// ============================================================================
// TYPES
// ============================================================================

/// Pixel placement of one bar row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub name: String,
    pub value_text: String,
    /// Left edge of the bar graphic.
    pub x: f32,
    /// Top edge of the bar graphic.
    pub y: f32,
    /// Always >= 0; negative bars have already been flipped left of the axis.
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Left-center anchor of the name text.
    pub label_anchor: (f32, f32),
    /// Left-center anchor of the value text.
    pub value_anchor: (f32, f32),
}

impl BarGeometry {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Geometry and value mapping for a whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    /// Title row plus one row per bar.
    pub row_count: usize,
    pub row_height: f32,
    pub row_content_height: f32,
    pub bar_height: f32,
    pub cell_offset: f32,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub bar_name_padded_width_max: f32,
    pub bar_value_padded_width_max: f32,
    pub bar_graphic_width_max: f32,
    pub min_value: f32,
    pub max_value: f32,
    pub value_range: f32,
    /// Pixels per value unit; 0 for a degenerate range.
    pub width_factor: f32,
    /// Value bars grow from.
    pub y_axis_value: f32,
    /// Axis x relative to the start of the graphic column's content.
    pub y_axis_offset: f32,
    /// Center of the title text.
    pub title_anchor: (f32, f32),
    pub bars: Vec<BarGeometry>,
}

impl ChartLayout {
    /// Absolute x of the zero axis.
    pub fn axis_x(&self) -> f32 {
        self.cell_offset + self.bar_name_padded_width_max + self.y_axis_offset
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check every bar against the explicit bounds, before anything is drawn.
pub fn validate(config: &ChartConfig) -> Result<()> {
    let violation = |bar: &Bar, kind: Bound, limit: f32| ChartError::RangeViolation {
        name: bar.name.clone(),
        value: bar.value,
        kind,
        limit,
    };

    if let Some(min) = config.min_value {
        if let Some(bar) = config.bars.iter().find(|b| b.value < min) {
            return Err(violation(bar, Bound::Min, min));
        }
    }
    if let Some(max) = config.max_value {
        if let Some(bar) = config.bars.iter().find(|b| b.value > max) {
            return Err(violation(bar, Bound::Max, max));
        }
    }
    Ok(())
}

// ============================================================================
// VALUE MAPPING
// ============================================================================

/// Resolve `(min, max)` of the value axis.
///
/// Without explicit bounds the data range is widened to include zero, so the
/// zero axis is always representable.
pub fn resolve_bounds(bars: &[Bar], min: Option<f32>, max: Option<f32>) -> (f32, f32) {
    let max_value = max.unwrap_or_else(|| {
        bars.iter()
            .map(|b| b.value)
            .fold(f32::NEG_INFINITY, f32::max)
            .max(0.0)
    });
    let min_value = min.unwrap_or_else(|| {
        bars.iter()
            .map(|b| b.value)
            .fold(f32::INFINITY, f32::min)
            .min(0.0)
    });
    (min_value, max_value)
}

/// Value bars grow from: zero when the range straddles it, else the bound
/// closer to zero.
pub fn y_axis_value(min_value: f32, max_value: f32) -> f32 {
    if min_value > 0.0 {
        min_value
    } else if max_value < 0.0 {
        max_value
    } else {
        0.0
    }
}

/// `(x, width)` of a bar whose graphic column content starts at `axis_x -
/// y_axis_offset`. Bars below the axis value extend left of `axis_x`.
fn bar_span(value: f32, axis_value: f32, width_factor: f32, axis_x: f32) -> (f32, f32) {
    let raw = (value - axis_value) * width_factor;
    let raw = if raw.is_finite() { raw } else { 0.0 };
    if raw < 0.0 {
        (axis_x + raw, -raw)
    } else {
        (axis_x, raw)
    }
}

fn max_text_width<M, I>(metrics: &M, texts: I, size: f32) -> f32
where
    M: TextMetrics + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| metrics.measure(t.as_ref(), size).width)
        .fold(0.0, f32::max)
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Compute the layout of `config`, measuring text with `metrics`.
pub fn compute<M: TextMetrics + ?Sized>(config: &ChartConfig, metrics: &M) -> ChartLayout {
    let width = config.width as f32;
    let height = config.height as f32;

    let row_count = config.bars.len() + 1;
    let row_height = height / row_count as f32;
    let row_content_height = row_height * ROW_CONTENT_RATIO;
    let bar_height = row_content_height * BAR_HEIGHT_RATIO;
    let title_font_size = row_content_height * TITLE_FONT_RATIO;
    let label_font_size = row_content_height * LABEL_FONT_RATIO;
    let cell_offset = (row_height - row_content_height) * 0.5;

    let value_texts: Vec<String> = config.bars.iter().map(Bar::value_text).collect();
    let bar_name_width_max = max_text_width(
        metrics,
        config.bars.iter().map(|b| b.name.as_str()),
        label_font_size,
    );
    let bar_value_width_max = max_text_width(metrics, &value_texts, label_font_size);

    let bar_name_padded_width_max = bar_name_width_max + cell_offset * 2.0;
    let bar_value_padded_width_max = bar_value_width_max + cell_offset * 2.0;
    let bar_graphic_padded_width_max =
        width - (bar_name_padded_width_max + bar_value_padded_width_max);
    let bar_graphic_width_max = (bar_graphic_padded_width_max - cell_offset * 2.0).max(0.0);

    let (min_value, max_value) =
        resolve_bounds(&config.bars, config.min_value, config.max_value);
    let value_range = max_value - min_value;
    let width_factor = if value_range > 0.0 && value_range.is_finite() {
        bar_graphic_width_max / value_range
    } else {
        warn!(
            min_value,
            max_value, "degenerate value range, bars are drawn with zero width"
        );
        0.0
    };

    let y_axis_value = y_axis_value(min_value, max_value);
    let y_axis_offset = if min_value < 0.0 {
        (y_axis_value - min_value) * width_factor
    } else {
        0.0
    };

    let axis_x = cell_offset + bar_name_padded_width_max + y_axis_offset;
    let text_center = row_content_height * 0.5;

    let bars = config
        .bars
        .iter()
        .zip(value_texts)
        .enumerate()
        .map(|(i, (bar, value_text))| {
            let y = cell_offset + row_height * (i + 1) as f32;
            let (x, bar_width) = bar_span(bar.value, y_axis_value, width_factor, axis_x);
            BarGeometry {
                name: bar.name.clone(),
                value_text,
                x,
                y,
                width: bar_width,
                height: bar_height,
                color: bar.resolved_color(config.bar_color),
                label_anchor: (cell_offset, y + text_center),
                value_anchor: (x + bar_width + cell_offset * 2.0, y + text_center),
            }
        })
        .collect();

    let layout = ChartLayout {
        width,
        height,
        row_count,
        row_height,
        row_content_height,
        bar_height,
        cell_offset,
        title_font_size,
        label_font_size,
        bar_name_padded_width_max,
        bar_value_padded_width_max,
        bar_graphic_width_max,
        min_value,
        max_value,
        value_range,
        width_factor,
        y_axis_value,
        y_axis_offset,
        title_anchor: (width * 0.5, cell_offset + text_center),
        bars,
    };

    debug!(
        rows = layout.row_count,
        row_height = layout.row_height,
        name_col = layout.bar_name_padded_width_max,
        value_col = layout.bar_value_padded_width_max,
        graphic_col = layout.bar_graphic_width_max,
        min_value = layout.min_value,
        max_value = layout.max_value,
        "computed chart layout"
    );

    layout
}

// ============================================================================
// TESTS
// ============================================================================
