//! # Rendering Module
//!
//! Draws a computed layout into pixels.
//!
//! ## Modules
//!
//! - [`canvas`]: RGBA buffer with polygon fill and text stamping
//! - [`shade`]: Top-to-bottom darkening gradient for bar graphics
//! - [`chart`]: Title, labels, bars and values of a whole chart
//!
//! ## Usage Example
//!
//! ```
//! use barchart::chart::{Bar, ChartConfig};
//! use barchart::text::BitmapFace;
//! use barchart::{layout, render};
//!
//! let config = ChartConfig {
//!     width: 200,
//!     height: 80,
//!     bars: vec![Bar::new("a", 3.0), Bar::new("b", -1.0)],
//!     ..Default::default()
//! };
//! let layout = layout::compute(&config, &BitmapFace);
//! let canvas = render::chart::render(&config, &layout, &BitmapFace).unwrap();
//! assert_eq!(canvas.width(), 200);
//! ```

pub mod canvas;
pub mod chart;
pub mod shade;

pub use canvas::{Alignment, PixelCanvas, TextOverflow};
pub use shade::color_at_strip;
