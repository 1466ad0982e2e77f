// File: crates/tidemark-core/src/scale.rs
// Summary: Linear, band, square-root and ordinal scales mapping domains onto pixel ranges.

use tracing::debug;

use crate::domain::{Categories, Extent};
use crate::error::{ChartError, Result};
use crate::grid;

/// `a` at `t == 0`, `b` at `t == 1`, exactly.
#[inline]
fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// A pure mapping from a domain value to an output.
pub trait Scale<T: ?Sized> {
    type Output;
    fn map(&self, value: &T) -> Self::Output;
}

/// Continuous affine mapping from an [`Extent`] onto `(r0, r1)`.
///
/// The range may be reversed (e.g. `(height, 0)` for a y axis). Values outside
/// the domain extrapolate. A degenerate domain maps everything to `r0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: Extent,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Extent, range: (f64, f64)) -> Self {
        if domain.is_degenerate() {
            debug!(value = domain.min(), "degenerate linear domain; mapping to range start");
        }
        Self { domain, range }
    }

    pub fn domain(&self) -> Extent { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() {
            return r0;
        }
        interpolate(r0, r1, self.domain.normalize(v))
    }

    /// Pixel back to domain value. Degenerate domains and ranges invert to the domain min.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() || r0 == r1 {
            return self.domain.min();
        }
        self.domain.lerp((px - r0) / (r1 - r0))
    }

    /// Same range, domain extended outward to round tick boundaries.
    pub fn nice(&self, count: usize) -> Self {
        let (lo, hi) = grid::nice(self.domain.min(), self.domain.max(), count);
        // nice() only widens a valid extent, so the bounds stay ordered
        let domain = Extent::new(lo, hi).unwrap_or(self.domain);
        Self::new(domain, self.range)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.min(), self.domain.max(), count)
    }

    /// Spacing of [`ticks`](Self::ticks) for the same `count`; 0 when degenerate.
    pub fn tick_step(&self, count: usize) -> f64 {
        grid::tick_increment(self.domain.min(), self.domain.max(), count)
            .map(|s| s.value())
            .unwrap_or(0.0)
    }
}

impl Scale<f64> for LinearScale {
    type Output = f64;
    fn map(&self, value: &f64) -> f64 { self.to_px(*value) }
}

/// Square-root mapping so that circle *area* grows linearly with the value.
///
/// Inputs are clamped to the domain first, so the output always lies
/// within the range. A degenerate domain maps everything to `r0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    domain: Extent,
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: Extent, range: (f64, f64)) -> Self {
        if domain.is_degenerate() {
            debug!(value = domain.min(), "degenerate sqrt domain; mapping to range start");
        }
        Self { domain, range }
    }

    pub fn domain(&self) -> Extent { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain.is_degenerate() || v.is_nan() {
            return r0;
        }
        let t = self.domain.normalize(self.domain.clamp(v));
        interpolate(r0, r1, t.sqrt())
    }

    /// Representative values for a size legend: min, midpoint, max.
    pub fn legend_levels(&self) -> [f64; 3] {
        [self.domain.min(), self.domain.midpoint(), self.domain.max()]
    }
}

impl Scale<f64> for SqrtScale {
    type Output = f64;
    fn map(&self, value: &f64) -> f64 { self.to_px(*value) }
}

/// A category's slot in pixel space. Contract: `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub start: f64,
    pub end: f64,
}

impl Band {
    pub fn width(&self) -> f64 { self.end - self.start }
    pub fn center(&self) -> f64 { self.start + self.width() / 2.0 }
}

/// Discrete categories onto evenly spaced slots of a continuous range.
///
/// The range is split into `n` steps; each slot is `step * (1 - padding)` wide
/// and inset by `step * padding / 2` inside its step. Slot order follows the
/// category order starting from `r0`, so a reversed range lays slots out from
/// the high end downward.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    categories: Categories,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(categories: Categories, range: (f64, f64), padding: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidPadding(padding));
        }
        Ok(Self { categories, range, padding })
    }

    pub fn categories(&self) -> &Categories { &self.categories }
    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn step(&self) -> f64 {
        (self.range.1 - self.range.0).abs() / self.categories.len() as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn band_at(&self, index: usize) -> Option<Band> {
        if index >= self.categories.len() {
            return None;
        }
        let step = self.step();
        let width = self.bandwidth();
        let offset = step * index as f64 + step * self.padding / 2.0;
        let (r0, r1) = self.range;
        Some(if r1 >= r0 {
            Band { start: r0 + offset, end: r0 + offset + width }
        } else {
            Band { start: r0 - offset - width, end: r0 - offset }
        })
    }

    pub fn band(&self, category: &str) -> Option<Band> {
        self.categories.index_of(category).and_then(|i| self.band_at(i))
    }

    pub fn center(&self, category: &str) -> Option<f64> {
        self.band(category).map(|b| b.center())
    }

    /// Slots in category order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, Band)> + '_ {
        self.categories
            .iter()
            .enumerate()
            .filter_map(|(i, c)| self.band_at(i).map(|b| (c, b)))
    }
}

impl Scale<str> for BandScale {
    /// Low pixel edge of the category's slot; `None` outside the domain.
    type Output = Option<f64>;
    fn map(&self, value: &str) -> Option<f64> {
        self.band(value).map(|b| b.start)
    }
}

/// Categories onto a fixed list of outputs, cycling when categories outnumber outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<R> {
    categories: Categories,
    outputs: Vec<R>,
}

impl<R: Clone> OrdinalScale<R> {
    pub fn new(categories: Categories, outputs: Vec<R>) -> Result<Self> {
        if outputs.is_empty() {
            return Err(ChartError::EmptyRange);
        }
        if categories.len() > outputs.len() {
            debug!(
                categories = categories.len(),
                outputs = outputs.len(),
                "ordinal outputs will repeat"
            );
        }
        Ok(Self { categories, outputs })
    }

    pub fn categories(&self) -> &Categories { &self.categories }
    pub fn outputs(&self) -> &[R] { &self.outputs }

    pub fn get(&self, category: &str) -> Option<&R> {
        self.categories
            .index_of(category)
            .map(|i| &self.outputs[i % self.outputs.len()])
    }

    /// (category, output) pairs in category order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &R)> + '_ {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c, &self.outputs[i % self.outputs.len()]))
    }
}

impl<R: Clone> Scale<str> for OrdinalScale<R> {
    type Output = Option<R>;
    fn map(&self, value: &str) -> Option<R> {
        self.get(value).cloned()
    }
}
