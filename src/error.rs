//! # Error Types
//!
//! This module defines error types used throughout the barchart library.

use std::fmt;

use thiserror::Error;

/// Which explicit bound a bar value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => write!(f, "minimum"),
            Bound::Max => write!(f, "maximum"),
        }
    }
}

/// Main error type for chart building
#[derive(Debug, Error)]
pub enum ChartError {
    /// A bar value lies outside an explicitly configured bound
    #[error("Bar '{name}' value {value} exceeds the {kind} threshold {limit}")]
    RangeViolation {
        name: String,
        value: f32,
        kind: Bound,
        limit: f32,
    },

    /// Output path extension is not one of bmp, jpg/jpeg, gif, png
    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),

    /// Canvas cannot be allocated with these dimensions
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Canvas buffer could not be allocated
    #[error("Cannot allocate a {width}x{height} canvas")]
    Allocation { width: u32, height: u32 },

    /// Font file could not be read or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Unparsable color specification
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Chart description could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_violation_message() {
        let err = ChartError::RangeViolation {
            name: "Cthulu".into(),
            value: 512.0,
            kind: Bound::Max,
            limit: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Bar 'Cthulu' value 512 exceeds the maximum threshold 100"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ChartError = io.into();
        assert!(matches!(err, ChartError::Io(_)));
    }
}
