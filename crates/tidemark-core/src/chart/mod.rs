// File: crates/tidemark-core/src/chart/mod.rs
// Summary: Chart contexts: immutable per-chart state (records + scales) shared by scene building and hover.

pub mod bar;
pub mod lollipop;
pub mod scatter;

pub use bar::{BarChart, BarChartConfig};
pub use lollipop::{LollipopChart, LollipopConfig};
pub use scatter::{ScatterConfig, ScatterPlot};

use crate::geometry::Point;
use crate::scene::{Anchor, Mark, Scene, TextMark};
use crate::theme::Theme;
use crate::tooltip::{hover_state, Describe, Hover, TooltipLayout, TooltipStyle};
use crate::types::{Insets, Size};

/// State built once per chart and handed by reference to every callback.
pub trait ChartContext {
    type Record: Describe;

    fn records(&self) -> &[Self::Record];

    /// The interactive mark drawn for record `index`, in its resting style.
    fn mark(&self, index: usize) -> Option<Mark>;

    /// Where the tooltip for `index` attaches when hovered at `pointer`.
    fn tooltip_anchor(&self, index: usize, pointer: Point) -> Point;

    /// Full scene, with hover highlight and tooltip applied when `hover` is set.
    fn scene(&self, hover: Option<&Hover>) -> Scene;

    /// Index of the topmost record mark under `pointer`.
    fn hit_test(&self, pointer: Point) -> Option<usize> {
        (0..self.records().len())
            .rev()
            .find(|&i| self.mark(i).is_some_and(|m| m.contains(pointer)))
    }

    /// Pointer moved: resolve the hovered record and its tooltip. `None` hides the tooltip.
    fn hover(&self, pointer: Point) -> Option<Hover> {
        let index = self.hit_test(pointer)?;
        let record = self.records().get(index)?;
        Some(Hover { index, anchor: self.tooltip_anchor(index, pointer), content: hover_state(record) })
    }
}

/// Canvas frame shared by all chart configs: plot area plus margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub plot: Size,
    pub margins: Insets,
}

impl Frame {
    pub fn canvas(&self) -> Size {
        Size::new(self.plot.width + self.margins.hsum(), self.plot.height + self.margins.vsum())
    }
    pub fn left(&self) -> f64 { self.margins.left }
    pub fn right(&self) -> f64 { self.margins.left + self.plot.width }
    pub fn top(&self) -> f64 { self.margins.top }
    pub fn bottom(&self) -> f64 { self.margins.top + self.plot.height }
}

/// Centered title lines stacked downward from `top`.
pub(crate) fn title_texts(lines: &[String], center_x: f64, top: f64, size: f64, theme: &Theme) -> Vec<TextMark> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            TextMark::new(line.clone(), Point::new(center_x, top + i as f64 * size * 1.4), size, theme.text)
                .family(theme.font)
                .anchor(Anchor::Middle)
        })
        .collect()
}

pub(crate) fn caption_texts(lines: &[String], center_x: f64, top: f64, theme: &Theme) -> Vec<TextMark> {
    const CAPTION_SIZE: f64 = 15.0;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            TextMark::new(line.clone(), Point::new(center_x, top + i as f64 * 30.0), CAPTION_SIZE, theme.text)
                .family(theme.font)
                .anchor(Anchor::Middle)
        })
        .collect()
}

pub(crate) fn attach_tooltip(scene: &mut Scene, hover: Option<&Hover>, theme: Theme) {
    scene.tooltip = hover.map(|h| TooltipLayout::new(h, TooltipStyle::default(), theme, scene.size));
}
