// File: crates/tidemark-core/src/types.rs
// Summary: Shared types (canvas size, margins, colors).

use std::str::FromStr;

use palette::Srgb;

use crate::error::{ChartError, Result};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Create new insets; negative values are clamped to zero.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left: left.max(0.0),
            right: right.max(0.0),
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72.0, 24.0, 24.0, 56.0)
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_srgb(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }

    /// Parse `#rrggbb` (or `rrggbb`).
    pub fn from_hex(hex: &str) -> Result<Self> {
        Srgb::<u8>::from_str(hex.trim())
            .map(Self::from_srgb)
            .map_err(|_| ChartError::InvalidColor(hex.to_string()))
    }

    /// Same color with alpha scaled by `opacity` (clamped to [0, 1]).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

/// Parse a fixed list of hex colors; used for palettes declared as literals.
pub fn palette_from_hex(hexes: &[&str]) -> Result<Vec<Color>> {
    hexes.iter().map(|h| Color::from_hex(h)).collect()
}
