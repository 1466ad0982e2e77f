// File: crates/tidemark-core/src/chart/lollipop.rs
// Summary: Lollipop chart: a stem from the zero baseline to a dot at each country's value.

use super::{attach_tooltip, caption_texts, title_texts, ChartContext, Frame};
use crate::axis::{AxisLayout, AxisOrient};
use crate::domain::{compute_categories, compute_domain};
use crate::error::Result;
use crate::geometry::Point;
use crate::record::{CountryTemperature, Dataset};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Mark, Scene, Stroke};
use crate::theme::Theme;
use crate::tooltip::Hover;
use crate::types::{Color, Insets, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct LollipopConfig {
    pub frame: Frame,
    pub padding: f64,
    pub y_ticks: usize,
    pub radius: f64,
    pub fill: Color,
    pub highlight: Color,
    pub stem: Stroke,
    pub label_rotation: f64,
    pub title: Vec<String>,
    pub title_size: f64,
    pub caption: Vec<String>,
    pub theme: Theme,
}

impl Default for LollipopConfig {
    fn default() -> Self {
        Self {
            frame: Frame { plot: Size::new(900.0, 400.0), margins: Insets::new(120.0, 60.0, 110.0, 220.0) },
            padding: 0.1,
            y_ticks: 10,
            radius: 5.0,
            fill: Color::from_srgb(palette::named::STEELBLUE),
            highlight: Color::from_srgb(palette::named::RED),
            stem: Stroke::new(Color::BLACK, 1.0),
            label_rotation: -45.0,
            title: vec![
                "Ten countries that Have Lowest Temperature Change".into(),
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

/// Immutable lollipop chart context.
#[derive(Clone, Debug)]
pub struct LollipopChart {
    records: Vec<CountryTemperature>,
    x: BandScale,
    y: LinearScale,
    config: LollipopConfig,
}

impl LollipopChart {
    pub fn build(dataset: &Dataset<CountryTemperature>, config: LollipopConfig) -> Result<Self> {
        let records = dataset.records.clone();
        let frame = config.frame;
        let categories = compute_categories(&records, CountryTemperature::COUNTRY)?;
        let x = BandScale::new(categories, (frame.left(), frame.right()), config.padding)?;
        let domain = compute_domain(&records, CountryTemperature::TEMPERATURE_CHANGE)?.including(0.0);
        let y = LinearScale::new(domain, (frame.bottom(), frame.top()));
        Ok(Self { records, x, y, config })
    }

    pub fn x_scale(&self) -> &BandScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }

    fn head(&self, record: &CountryTemperature) -> Option<Point> {
        let cx = self.x.center(&record.country)?;
        Some(Point::new(cx, self.y.to_px(record.temperature_change)))
    }
}

impl ChartContext for LollipopChart {
    type Record = CountryTemperature;

    fn records(&self) -> &[CountryTemperature] {
        &self.records
    }

    fn mark(&self, index: usize) -> Option<Mark> {
        let center = self.head(self.records.get(index)?)?;
        Some(Mark::Circle { center, radius: self.config.radius, fill: self.config.fill, stroke: None })
    }

    fn tooltip_anchor(&self, _index: usize, pointer: Point) -> Point {
        pointer
    }

    fn scene(&self, hover: Option<&Hover>) -> Scene {
        let cfg = &self.config;
        let theme = &cfg.theme;
        let frame = cfg.frame;
        let mut scene = Scene::new(frame.canvas(), theme.background);
        let base = self.y.to_px(0.0);

        for (i, record) in self.records.iter().enumerate() {
            let Some(head) = self.head(record) else { continue };
            scene.marks.push(Mark::Rule { from: Point::new(head.x, base), to: head, stroke: cfg.stem });
            let fill = match hover {
                Some(h) if h.index == i => cfg.highlight,
                _ => cfg.fill,
            };
            scene.marks.push(Mark::Circle { center: head, radius: cfg.radius, fill, stroke: None });
        }

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
