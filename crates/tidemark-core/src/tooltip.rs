// File: crates/tidemark-core/src/tooltip.rs
// Summary: Pure hover state: record -> tooltip content, plus tooltip panel placement.

use crate::format::{format_grouped_shortest, format_measure};
use crate::geometry::{Point, Rect};
use crate::record::{CountryTemperature, SeaLevel};
use crate::scene::{FontWeight, TextMark};
use crate::theme::Theme;
use crate::types::Size;

/// Which part of a tooltip line is emphasized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Value,
    Line,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
    pub emphasis: Emphasis,
}

impl TooltipLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>, emphasis: Emphasis) -> Self {
        Self { label: label.into(), value: value.into(), emphasis }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub lines: Vec<TooltipLine>,
}

/// Records that can describe themselves in a tooltip.
pub trait Describe {
    fn describe(&self) -> TooltipContent;
}

/// Tooltip content for the hovered record.
pub fn hover_state<R: Describe>(record: &R) -> TooltipContent {
    record.describe()
}

impl Describe for CountryTemperature {
    fn describe(&self) -> TooltipContent {
        TooltipContent {
            lines: vec![
                TooltipLine::new("Country Name", self.country.clone(), Emphasis::Value),
                TooltipLine::new("Temperature Change", format_measure(self.temperature_change), Emphasis::Value),
            ],
        }
    }
}

impl Describe for SeaLevel {
    fn describe(&self) -> TooltipContent {
        TooltipContent {
            lines: vec![
                TooltipLine::new("Year", format_grouped_shortest(self.year), Emphasis::Line),
                TooltipLine::new("Sea Level", format_measure(self.adjusted_sea_level), Emphasis::None),
                TooltipLine::new("Upper Error Bound", format_measure(self.upper_error_bound), Emphasis::None),
            ],
        }
    }
}

/// A hovered record: its index, where the panel attaches, and what it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub index: usize,
    pub anchor: Point,
    pub content: TooltipContent,
}

/// Panel styling; padding and line height in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipStyle {
    pub font_size: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self { font_size: 13.0, line_height: 18.0, padding: 8.0 }
    }
}

/// Tooltip ready for a backend: anchor, content and colors.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    pub anchor: Point,
    pub content: TooltipContent,
    pub style: TooltipStyle,
    pub theme: Theme,
    /// Canvas bounds the panel must stay inside.
    pub bounds: Size,
}

impl TooltipLayout {
    pub fn new(hover: &Hover, style: TooltipStyle, theme: Theme, bounds: Size) -> Self {
        Self { anchor: hover.anchor, content: hover.content.clone(), style, theme, bounds }
    }

    /// Panel rectangle with its top-left at the anchor, pushed back inside the canvas.
    /// `measure` returns the pixel width of a line's text.
    pub fn panel(&self, measure: impl Fn(&TooltipLine) -> f64) -> Rect {
        let s = &self.style;
        let text_w = self.content.lines.iter().map(&measure).fold(0.0, f64::max);
        let w = text_w + s.padding * 2.0;
        let h = self.content.lines.len() as f64 * s.line_height + s.padding * 2.0;
        let bounds = Rect::from_ltwh(0.0, 0.0, self.bounds.width, self.bounds.height);
        Rect::from_ltwh(self.anchor.x, self.anchor.y, w, h).clamped_into(&bounds)
    }

    /// One text per line inside `panel`, bold where emphasized.
    ///
    /// Lines with `Emphasis::Value` come back as two runs (label then value) so a
    /// backend can weight them separately; `measure` places the value run.
    pub fn texts(&self, panel: &Rect, measure: impl Fn(&str, FontWeight) -> f64) -> Vec<TextMark> {
        let s = &self.style;
        let color = self.theme.tooltip_text;
        let family = self.theme.font;
        let mut out = Vec::new();
        for (i, line) in self.content.lines.iter().enumerate() {
            // baseline of row i
            let y = panel.top + s.padding + s.line_height * (i as f64 + 0.75);
            let at = Point::new(panel.left + s.padding, y);
            match line.emphasis {
                Emphasis::None => out.push(TextMark::new(line.text(), at, s.font_size, color).family(family)),
                Emphasis::Line => out.push(TextMark::new(line.text(), at, s.font_size, color).family(family).bold()),
                Emphasis::Value => {
                    let label = format!("{}: ", line.label);
                    let dx = measure(&label, FontWeight::Normal);
                    out.push(TextMark::new(label, at, s.font_size, color).family(family));
                    out.push(
                        TextMark::new(line.value.clone(), at.offset(dx, 0.0), s.font_size, color)
                            .family(family)
                            .bold(),
                    );
                }
            }
        }
        out
    }
}
