// File: crates/tidemark-core/src/scene.rs
// Summary: Renderer-agnostic scene: positioned marks, text, axes, legends and the tooltip panel.

use crate::axis::AxisLayout;
use crate::geometry::{Point, Rect};
use crate::legend::Legend;
use crate::tooltip::TooltipLayout;
use crate::types::{Color, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// One shape on the canvas. Opacity is carried in the colors' alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Rect { rect: Rect, fill: Color, stroke: Option<Stroke> },
    Circle { center: Point, radius: f64, fill: Color, stroke: Option<Stroke> },
    Rule { from: Point, to: Point, stroke: Stroke },
}

impl Mark {
    /// Pointer hit test. Rules are hit within half their stroke width plus 2px.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Mark::Rect { rect, .. } => rect.contains(p),
            Mark::Circle { center, radius, .. } => center.distance_sq(p) <= radius * radius,
            Mark::Rule { from, to, stroke } => {
                let tol = stroke.width / 2.0 + 2.0;
                segment_distance_sq(*from, *to, p) <= tol * tol
            }
        }
    }
}

fn segment_distance_sq(a: Point, b: Point, p: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return a.distance_sq(p);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    Point::new(a.x + t * dx, a.y + t * dy).distance_sq(p)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontFamily {
    Serif,
    #[default]
    Sans,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal alignment of text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub position: Point,
    pub size: f64,
    pub color: Color,
    pub family: FontFamily,
    pub weight: FontWeight,
    pub anchor: Anchor,
    pub baseline: Baseline,
    /// Degrees, clockwise, about `position`.
    pub rotation: f64,
}

impl TextMark {
    pub fn new(text: impl Into<String>, position: Point, size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            size,
            color,
            family: FontFamily::default(),
            weight: FontWeight::default(),
            anchor: Anchor::default(),
            baseline: Baseline::default(),
            rotation: 0.0,
        }
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Everything a backend needs to paint one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub background: Color,
    pub marks: Vec<Mark>,
    pub axes: Vec<AxisLayout>,
    pub texts: Vec<TextMark>,
    pub legends: Vec<Legend>,
    pub tooltip: Option<TooltipLayout>,
}

impl Scene {
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            size,
            background,
            marks: Vec::new(),
            axes: Vec::new(),
            texts: Vec::new(),
            legends: Vec::new(),
            tooltip: None,
        }
    }
}
