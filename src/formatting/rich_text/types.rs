// src/formatting/rich_text/types.rs
//! Type definitions for styled inline runs.
//!
//! Separates the resolved presentation of a run from the source item it came
//! from, so the markup step only sees what it needs.

use crate::types::Color;

/// Resolved styling for one inline run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
    pub link: Option<String>,
}

impl TextStyle {
    /// True when the run renders as bare escaped text.
    pub fn is_plain(&self) -> bool {
        *self
            == TextStyle {
                color: self.color,
                ..TextStyle::default()
            }
            && color_style(self.color).is_none()
    }
}

/// A run ready for markup: escaped text plus its style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub escaped: String,
    pub style: TextStyle,
}

/// CSS declaration for a color token, `None` for the default color.
pub fn color_style(color: Color) -> Option<&'static str> {
    let css = match color {
        Color::Default => return None,
        Color::Gray => "color:#9b9a97",
        Color::Brown => "color:#64473a",
        Color::Orange => "color:#d9730d",
        Color::Yellow => "color:#dfab01",
        Color::Green => "color:#0f7b6c",
        Color::Blue => "color:#0b6e99",
        Color::Purple => "color:#6940a5",
        Color::Pink => "color:#ad1a72",
        Color::Red => "color:#e03e3e",
        Color::GrayBackground => "background-color:#ebeced",
        Color::BrownBackground => "background-color:#e9e5e3",
        Color::OrangeBackground => "background-color:#faebdd",
        Color::YellowBackground => "background-color:#fbf3db",
        Color::GreenBackground => "background-color:#ddedea",
        Color::BlueBackground => "background-color:#ddebf1",
        Color::PurpleBackground => "background-color:#eae4f2",
        Color::PinkBackground => "background-color:#f4dfeb",
        Color::RedBackground => "background-color:#fbe4e4",
    };
    Some(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_and_background_tokens() {
        assert_eq!(color_style(Color::Red), Some("color:#e03e3e"));
        assert_eq!(
            color_style(Color::BlueBackground),
            Some("background-color:#ddebf1")
        );
        assert_eq!(color_style(Color::Default), None);
    }

    #[test]
    fn test_plain_style() {
        assert!(TextStyle::default().is_plain());
        let bold = TextStyle {
            bold: true,
            ..Default::default()
        };
        assert!(!bold.is_plain());
        let colored = TextStyle {
            color: Color::Gray,
            ..Default::default()
        };
        assert!(!colored.is_plain());
    }
}
