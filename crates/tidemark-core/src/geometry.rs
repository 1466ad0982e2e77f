// File: crates/tidemark-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle. Contract: left <= right, top <= bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Build from two arbitrary corners; edges are normalized.
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_ltrb(left, top, left + width, top + height)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Edges inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Shift so the rect lies inside `bounds` where possible (left/top edge wins).
    pub fn clamped_into(&self, bounds: &Rect) -> Rect {
        let w = self.width();
        let h = self.height();
        let left = clamp(self.left, bounds.left, (bounds.right - w).max(bounds.left));
        let top = clamp(self.top, bounds.top, (bounds.bottom - h).max(bounds.top));
        Rect::from_ltwh(left, top, w, h)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
