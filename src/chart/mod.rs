//! # Chart Definition
//!
//! - [`Bar`]: one labeled value
//! - [`ChartConfig`]: the data record a chart is rendered from
//! - [`BarChartBuilder`]: fluent construction and the terminal `build`

mod bar;
mod builder;
mod config;

pub use bar::Bar;
pub use builder::BarChartBuilder;
pub use config::ChartConfig;
