//! A single labeled value on the chart.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A measurable value represented as a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The name shown left of the bar.
    #[serde(default)]
    pub name: String,
    /// The value the bar's length represents.
    pub value: f32,
    /// Bar color; `None` or a fully transparent color uses the chart default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Bar {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The color this bar is drawn with.
    pub fn resolved_color(&self, default: Color) -> Color {
        match self.color {
            Some(c) if !c.is_transparent() => c,
            _ => default,
        }
    }

    /// Value as printed next to the bar.
    pub fn value_text(&self) -> String {
        format!("{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolved_color() {
        let default = Color::LIME_GREEN;
        assert_eq!(Bar::new("a", 1.0).resolved_color(default), default);
        assert_eq!(
            Bar::new("a", 1.0).with_color(Color::GOLD).resolved_color(default),
            Color::GOLD
        );
        assert_eq!(
            Bar::new("a", 1.0)
                .with_color(Color::TRANSPARENT)
                .resolved_color(default),
            default
        );
        // Explicit black is a real color, not "unset".
        assert_eq!(
            Bar::new("a", 1.0).with_color(Color::BLACK).resolved_color(default),
            Color::BLACK
        );
    }

    #[test]
    fn test_value_text() {
        assert_eq!(Bar::new("a", 512.0).value_text(), "512");
        assert_eq!(Bar::new("a", -22.0).value_text(), "-22");
        assert_eq!(Bar::new("a", 3.5).value_text(), "3.5");
    }

    #[test]
    fn test_deserialize_without_color() {
        let bar: Bar = serde_json::from_str(r#"{"name": "Bob", "value": 112}"#).unwrap();
        assert_eq!(bar, Bar::new("Bob", 112.0));
    }
}
