// File: crates/tidemark-core/src/legend.rs
// Summary: Color and size legends laid out as a vertical list of circle swatches with labels.

use crate::format::format_grouped;
use crate::geometry::Point;
use crate::scale::{OrdinalScale, SqrtScale};
use crate::scene::{Baseline, FontFamily, Mark, TextMark};
use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub radius: f64,
    pub color: Color,
    pub label: String,
}

/// Placement of a legend's rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    pub origin: Point,
    /// Inset of the first swatch center from `origin` on both axes.
    pub margin: f64,
    /// Vertical distance between rows.
    pub spacing: f64,
    /// Horizontal distance from swatch center to label start.
    pub label_gap: f64,
    pub font_size: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self { origin: Point::default(), margin: 25.0, spacing: 50.0, label_gap: 25.0, font_size: 14.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub layout: LegendLayout,
    pub entries: Vec<LegendEntry>,
    pub text_color: Color,
    pub family: FontFamily,
}

pub const COLOR_SWATCH_RADIUS: f64 = 10.0;

impl Legend {
    /// One row per category, in category order.
    pub fn color(scale: &OrdinalScale<Color>, layout: LegendLayout, text_color: Color) -> Self {
        let entries = scale
            .entries()
            .map(|(cat, color)| LegendEntry { radius: COLOR_SWATCH_RADIUS, color: *color, label: cat.to_string() })
            .collect();
        Self { layout, entries, text_color, family: FontFamily::Sans }
    }

    /// Three rows (min, midpoint, max) drawn at the radius the scale assigns them.
    pub fn size(scale: &SqrtScale, unit: &str, swatch: Color, layout: LegendLayout, text_color: Color) -> Self {
        let entries = scale
            .legend_levels()
            .into_iter()
            .map(|v| LegendEntry {
                radius: scale.to_px(v),
                color: swatch,
                label: format!("{} {unit}", format_grouped(v.round(), 0)),
            })
            .collect();
        Self { layout, entries, text_color, family: FontFamily::Sans }
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Height covered by the rows, including the leading and trailing margin.
    pub fn height(&self) -> f64 {
        let rows = self.entries.len().saturating_sub(1) as f64;
        self.layout.margin * 2.0 + rows * self.layout.spacing
    }

    fn row_center(&self, i: usize) -> Point {
        let l = &self.layout;
        l.origin.offset(l.margin, l.margin + i as f64 * l.spacing)
    }

    pub fn marks(&self) -> Vec<Mark> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| Mark::Circle { center: self.row_center(i), radius: e.radius, fill: e.color, stroke: None })
            .collect()
    }

    pub fn labels(&self) -> Vec<TextMark> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let at = self.row_center(i).offset(self.layout.label_gap, 0.0);
                TextMark::new(e.label.clone(), at, self.layout.font_size, self.text_color)
                    .family(self.family)
                    .baseline(Baseline::Middle)
            })
            .collect()
    }
}
