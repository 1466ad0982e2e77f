// File: crates/tidemark-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, text, axes, tooltip panel).

use crate::scene::FontFamily;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub axis: Color,
    pub font: FontFamily,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
}

impl Theme {
    /// White page, black serif text.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: Color::WHITE,
            text: Color::BLACK,
            axis: Color::BLACK,
            font: FontFamily::Serif,
            tooltip_background: Color::rgb(255, 255, 255),
            tooltip_border: Color::rgb(0xcc, 0xcc, 0xcc),
            tooltip_text: Color::rgb(0x22, 0x22, 0x22),
        }
    }

    /// Dark slate page with warm off-white sans-serif text.
    pub fn slate() -> Self {
        Self {
            name: "slate",
            background: Color::rgb(0x2b, 0x2d, 0x35),
            text: Color::rgb(0xee, 0xec, 0xe7),
            axis: Color::rgb(0xee, 0xec, 0xe7),
            font: FontFamily::Sans,
            tooltip_background: Color::rgb(0x1d, 0x1f, 0x25),
            tooltip_border: Color::rgb(0x6b, 0x6e, 0x78),
            tooltip_text: Color::rgb(0xee, 0xec, 0xe7),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::slate()]
}

/// Find a theme by its `name`, falling back to paper.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::paper)
}
