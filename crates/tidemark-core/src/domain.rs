// File: crates/tidemark-core/src/domain.rs
// Summary: Numeric extents and ordered category sets computed once per dataset.

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{ChartError, Result};

/// A numeric column of record type `R`.
pub struct NumericField<R> {
    pub name: &'static str,
    pub get: fn(&R) -> f64,
}

/// A categorical column of record type `R`.
pub struct CategoryField<R> {
    pub name: &'static str,
    pub get: fn(&R) -> &str,
}

// Manual impls: derives would require `R: Clone`.
impl<R> Clone for NumericField<R> {
    fn clone(&self) -> Self { *self }
}
impl<R> Copy for NumericField<R> {}
impl<R> Clone for CategoryField<R> {
    fn clone(&self) -> Self { *self }
}
impl<R> Copy for CategoryField<R> {}

/// Closed numeric interval.
/// Contract: both bounds finite and `min <= max`; `min == max` is allowed (degenerate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidExtent { min, max });
        }
        Ok(Self { min, max })
    }

    /// Running min/max over `values` in one pass. Non-finite values are skipped;
    /// `None` when nothing finite remains.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut acc: Option<(f64, f64)> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            acc = Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        acc.map(|(min, max)| Self { min, max })
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    /// `max - min`; may be infinite for bounds near `f64::MAX` of opposite sign.
    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn is_degenerate(&self) -> bool { self.min == self.max }

    pub fn midpoint(&self) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.min + span / 2.0
        } else {
            self.min / 2.0 + self.max / 2.0
        }
    }

    /// Position of `v` relative to the bounds: 0 at `min`, 1 at `max`.
    /// Finite for any finite `v` on a non-degenerate extent, even when `span()` overflows.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let span = self.span();
        if span.is_finite() {
            (v - self.min) / span
        } else {
            (v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Inverse of [`normalize`](Self::normalize): `min` at 0, `max` at 1.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Smallest extent covering both `self` and `v` (non-finite `v` is ignored).
    pub fn including(self, v: f64) -> Self {
        if !v.is_finite() {
            return self;
        }
        Self { min: self.min.min(v), max: self.max.max(v) }
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Distinct category values in first-seen order. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Categories(IndexSet<String>);

impl Categories {
    /// Collect distinct values; `None` if `values` is empty.
    pub fn from_values<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Option<Self> {
        let set = values.into_iter().map(Into::into).collect::<IndexSet<String>>();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.0.get_index_of(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(String::as_str)
    }
}

/// (min, max) of `field` over `records`.
pub fn compute_domain<R>(records: &[R], field: NumericField<R>) -> Result<Extent> {
    let extent = Extent::from_values(records.iter().map(field.get))
        .ok_or(ChartError::EmptyDataset { field: field.name })?;
    debug!(field = field.name, min = extent.min, max = extent.max, "computed domain");
    Ok(extent)
}

/// Distinct values of `field` over `records`, first occurrence first.
pub fn compute_categories<R>(records: &[R], field: CategoryField<R>) -> Result<Categories> {
    let categories = Categories::from_values(records.iter().map(|r| (field.get)(r)))
        .ok_or(ChartError::EmptyDataset { field: field.name })?;
    debug!(field = field.name, count = categories.len(), "computed categories");
    Ok(categories)
}
