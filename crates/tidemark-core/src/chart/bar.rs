// File: crates/tidemark-core/src/chart/bar.rs
// Summary: Bar chart of temperature change per country (band x, linear y from a zero baseline).

use tracing::debug;

use super::{attach_tooltip, caption_texts, title_texts, ChartContext, Frame};
use crate::axis::{AxisLayout, AxisOrient};
use crate::domain::{compute_categories, compute_domain, Extent};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::record::{CountryTemperature, Dataset};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Mark, Scene};
use crate::theme::Theme;
use crate::tooltip::Hover;
use crate::types::{Color, Insets, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartConfig {
    pub frame: Frame,
    pub padding: f64,
    /// Fixed y domain; computed from the data (widened to include 0) when `None`.
    pub y_domain: Option<Extent>,
    pub y_ticks: usize,
    pub fill: Color,
    pub highlight: Color,
    pub label_rotation: f64,
    pub title: Vec<String>,
    pub title_size: f64,
    pub caption: Vec<String>,
    pub theme: Theme,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            frame: Frame { plot: Size::new(1010.0, 400.0), margins: Insets::new(250.0, 70.0, 100.0, 150.0) },
            padding: 0.5,
            y_domain: None,
            y_ticks: 10,
            fill: Color::rgb(0x1a, 0xbc, 0x9c),
            highlight: Color::rgb(0x27, 0xae, 0x60),
            label_rotation: -45.0,
            title: vec![
                "Top Ten countries that Have Highest Temperature Change".into(),
                "in the Last Decades".into(),
            ],
            title_size: 28.0,
            caption: vec![
                "Source: Food and Agriculture Organization of the United Nations \u{2022} Graphic by Zhaozhou Dai"
                    .into(),
            ],
            theme: Theme::paper(),
        }
    }
}

/// Immutable bar chart context.
#[derive(Clone, Debug)]
pub struct BarChart {
    records: Vec<CountryTemperature>,
    x: BandScale,
    y: LinearScale,
    config: BarChartConfig,
}

impl BarChart {
    pub fn build(dataset: &Dataset<CountryTemperature>, config: BarChartConfig) -> Result<Self> {
        let records = dataset.records.clone();
        let frame = config.frame;
        let categories = compute_categories(&records, CountryTemperature::COUNTRY)?;
        let x = BandScale::new(categories, (frame.left(), frame.right()), config.padding)?;
        let y = match config.y_domain {
            Some(domain) => LinearScale::new(domain, (frame.bottom(), frame.top())),
            None => {
                let domain = compute_domain(&records, CountryTemperature::TEMPERATURE_CHANGE)?.including(0.0);
                LinearScale::new(domain, (frame.bottom(), frame.top())).nice(config.y_ticks)
            }
        };
        debug!(bars = records.len(), y_min = y.domain().min(), y_max = y.domain().max(), "built bar chart");
        Ok(Self { records, x, y, config })
    }

    pub fn x_scale(&self) -> &BandScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }

    fn bar_rect(&self, record: &CountryTemperature) -> Option<Rect> {
        let band = self.x.band(&record.country)?;
        let base = self.y.to_px(0.0);
        let top = self.y.to_px(record.temperature_change);
        Some(Rect::from_ltrb(band.start, top, band.end, base))
    }
}

impl ChartContext for BarChart {
    type Record = CountryTemperature;

    fn records(&self) -> &[CountryTemperature] {
        &self.records
    }

    fn mark(&self, index: usize) -> Option<Mark> {
        let rect = self.bar_rect(self.records.get(index)?)?;
        Some(Mark::Rect { rect, fill: self.config.fill, stroke: None })
    }

    fn tooltip_anchor(&self, _index: usize, pointer: Point) -> Point {
        pointer
    }

    fn scene(&self, hover: Option<&Hover>) -> Scene {
        let cfg = &self.config;
        let theme = &cfg.theme;
        let frame = cfg.frame;
        let mut scene = Scene::new(frame.canvas(), theme.background);

        scene.marks = (0..self.records.len())
            .filter_map(|i| {
                let mark = self.mark(i)?;
                Some(match (mark, hover) {
                    (Mark::Rect { rect, stroke, .. }, Some(h)) if h.index == i => {
                        Mark::Rect { rect, fill: cfg.highlight, stroke }
                    }
                    (m, _) => m,
                })
            })
            .collect();

        scene.axes.push(
            AxisLayout::band(&self.x, AxisOrient::Bottom, frame.bottom())
                .rotate_labels(cfg.label_rotation)
                .styled(theme.axis, theme.font),
        );
        scene.axes.push(
            AxisLayout::linear(&self.y, AxisOrient::Left, frame.left(), cfg.y_ticks).styled(theme.axis, theme.font),
        );

        let center_x = frame.left() + frame.plot.width / 2.0;
        scene.texts.extend(title_texts(&cfg.title, center_x, frame.top() - 60.0, cfg.title_size, theme));
        scene.texts.extend(caption_texts(&cfg.caption, center_x, frame.bottom() + frame.margins.bottom - 20.0, theme));

        attach_tooltip(&mut scene, hover, *theme);
        scene
    }
}
