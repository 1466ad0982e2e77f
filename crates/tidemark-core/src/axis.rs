// File: crates/tidemark-core/src/axis.rs
// Summary: Axis layouts (domain line, ticks, labels) derived from the chart's scales.

use crate::format::format_tick;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Baseline, FontFamily, Mark, Stroke, TextMark};
use crate::types::Color;

/// Outer tick length in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick end and label.
pub const TICK_PADDING: f64 = 3.0;
pub const TICK_FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel coordinate along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub orient: AxisOrient,
    /// Cross-axis pixel coordinate of the axis line (y for Bottom, x for Left).
    pub position: f64,
    /// Pixel extent of the domain line along the axis.
    pub span: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Label rotation in degrees; non-zero rotations anchor labels at their end.
    pub label_rotation: f64,
    pub color: Color,
    pub family: FontFamily,
}

impl AxisLayout {
    /// Ticks at round values of a linear scale, labelled with fixed precision from the tick step.
    pub fn linear(scale: &LinearScale, orient: AxisOrient, position: f64, count: usize) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: format_tick(v, step) })
            .collect();
        Self::with_ticks(orient, position, scale.range(), ticks)
    }

    /// One tick per category at the band center.
    pub fn band(scale: &BandScale, orient: AxisOrient, position: f64) -> Self {
        let ticks = scale
            .bands()
            .map(|(cat, band)| Tick { offset: band.center(), label: cat.to_string() })
            .collect();
        Self::with_ticks(orient, position, scale.range(), ticks)
    }

    fn with_ticks(orient: AxisOrient, position: f64, span: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self {
            orient,
            position,
            span,
            ticks,
            label_rotation: 0.0,
            color: Color::BLACK,
            family: FontFamily::Sans,
        }
    }

    pub fn rotate_labels(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    pub fn styled(mut self, color: Color, family: FontFamily) -> Self {
        self.color = color;
        self.family = family;
        self
    }

    fn at(&self, along: f64, across: f64) -> Point {
        match self.orient {
            AxisOrient::Bottom => Point::new(along, self.position + across),
            AxisOrient::Left => Point::new(self.position - across, along),
        }
    }

    /// Domain line followed by one rule per tick.
    pub fn rules(&self) -> Vec<Mark> {
        let stroke = Stroke::new(self.color, 1.0);
        let mut out = Vec::with_capacity(self.ticks.len() + 1);
        out.push(Mark::Rule { from: self.at(self.span.0, 0.0), to: self.at(self.span.1, 0.0), stroke });
        for t in &self.ticks {
            out.push(Mark::Rule { from: self.at(t.offset, 0.0), to: self.at(t.offset, TICK_SIZE), stroke });
        }
        out
    }

    pub fn labels(&self) -> Vec<TextMark> {
        let gap = TICK_SIZE + TICK_PADDING;
        self.ticks
            .iter()
            .map(|t| {
                let text = TextMark::new(t.label.clone(), self.at(t.offset, gap), TICK_FONT_SIZE, self.color)
                    .family(self.family);
                match self.orient {
                    AxisOrient::Bottom if self.label_rotation != 0.0 => text
                        .anchor(Anchor::End)
                        .baseline(Baseline::Middle)
                        .rotated(self.label_rotation),
                    AxisOrient::Bottom => text.anchor(Anchor::Middle).baseline(Baseline::Hanging),
                    AxisOrient::Left => text
                        .anchor(Anchor::End)
                        .baseline(Baseline::Middle)
                        .rotated(self.label_rotation),
                }
            })
            .collect()
    }
}
