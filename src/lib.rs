//! # Barchart - Shaded Horizontal Bar Charts
//!
//! Barchart renders a titled horizontal bar chart into a raster image. It
//! provides:
//!
//! - **Layout**: row heights, column widths from measured text, value-to-pixel
//!   mapping and zero-axis placement for mixed negative/positive values
//! - **Rendering**: RGBA canvas, 3-D style shaded bars, text labels
//! - **Text**: built-in Spleen bitmap font or any TrueType/OpenType file
//! - **Output**: BMP, JPEG, GIF and PNG, chosen by file extension
//!
//! ## Quick Start
//!
//! ```no_run
//! use barchart::{Bar, BarChartBuilder, Color};
//!
//! BarChartBuilder::new()
//!     .size(300, 100)
//!     .title("Election Results")
//!     .text_color(Color::WHITE)
//!     .background_color(Color::BLACK)
//!     .add_bar(Bar::new("Cthulu", 512.0).with_color(Color::GOLD))
//!     .add_bar(Bar::new("Bob", 112.0))
//!     .add_bar(Bar::new("Hitler", -22.0))
//!     .build("election.png")?;
//!
//! # Ok::<(), barchart::ChartError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Bars, configuration and the builder |
//! | [`layout`] | Pure geometry computation |
//! | [`render`] | Canvas, shading and chart drawing |
//! | [`text`] | Text measurement and rasterization |
//! | [`output`] | Output format selection and encoding |
//! | [`color`] | RGBA colors |
//! | [`error`] | Error types |

pub mod chart;
pub mod color;
pub mod error;
pub mod layout;
pub mod output;
pub mod render;
pub mod text;

// Re-exports for convenience
pub use chart::{Bar, BarChartBuilder, ChartConfig};
pub use color::Color;
pub use error::ChartError;
pub use output::OutputFormat;
