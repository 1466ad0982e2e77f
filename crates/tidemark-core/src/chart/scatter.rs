// File: crates/tidemark-core/src/chart/scatter.rs
// Summary: Sea level scatterplot: year vs adjusted level, radius by error bound, color by sea.

use super::{attach_tooltip, caption_texts, title_texts, ChartContext};
use crate::axis::{AxisLayout, AxisOrient};
use crate::domain::{compute_categories, compute_domain};
use crate::error::Result;
use crate::geometry::Point;
use crate::legend::{Legend, LegendLayout};
use crate::record::{Dataset, SeaLevel};
use crate::scale::{LinearScale, OrdinalScale, SqrtScale};
use crate::scene::{Anchor, Mark, Scene, Stroke, TextMark};
use crate::theme::Theme;
use crate::tooltip::Hover;
use crate::types::{palette_from_hex, Color, Insets, Size};

pub const SEA_PALETTE: [&str; 5] = ["#1ABC9C", "#d95f02", "#7570b3", "#A93226", "#F1948A"];

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterConfig {
    pub size: Size,
    /// Plot insets; the legend column lives in the right margin.
    pub margins: Insets,
    pub radius_range: (f64, f64),
    pub palette: Vec<Color>,
    pub fill_opacity: f64,
    pub stroke_width: f64,
    /// Opacity of non-hovered points while something is hovered.
    pub dim_opacity: f64,
    /// Tooltip offset from the hovered point's center.
    pub tooltip_offset: (f64, f64),
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub caption: Vec<String>,
    pub legend: LegendLayout,
    pub size_swatch: Color,
    pub size_unit: String,
    pub theme: Theme,
}

impl ScatterConfig {
    pub fn try_default() -> Result<Self> {
        Ok(Self {
            size: Size::new(1400.0, 700.0),
            margins: Insets::new(200.0, 300.0, 100.0, 200.0),
            radius_range: (2.0, 15.0),
            palette: palette_from_hex(&SEA_PALETTE)?,
            fill_opacity: 0.2,
            stroke_width: 1.5,
            dim_opacity: 0.1,
            tooltip_offset: (20.0, -10.0),
            x_ticks: 10,
            y_ticks: 10,
            x_label: "Year".into(),
            y_label: "Adjusted Sea Level".into(),
            title: "Global Average Absolute Sea Level Change from 1880 to 2021".into(),
            caption: vec![
                "Source: EPA's Climate Change Indicators in the United States \u{2022} Graphic by Zhaozhou Dai".into(),
                "* Note: The upper bound is the largest possible value of the true measurement.".into(),
            ],
            legend: LegendLayout { origin: Point::new(1120.0, 100.0), ..LegendLayout::default() },
            size_swatch: Color::rgb(0xcc, 0xcc, 0xcc),
            size_unit: "Upper Error Bound".into(),
            theme: Theme::slate(),
        })
    }

    fn plot_x(&self) -> (f64, f64) {
        (self.margins.left, self.size.width - self.margins.right)
    }
    fn plot_y(&self) -> (f64, f64) {
        (self.size.height - self.margins.bottom, self.margins.top)
    }
}

/// Immutable scatterplot context.
#[derive(Clone, Debug)]
pub struct ScatterPlot {
    records: Vec<SeaLevel>,
    x: LinearScale,
    y: LinearScale,
    r: SqrtScale,
    fill: OrdinalScale<Color>,
    config: ScatterConfig,
}

impl ScatterPlot {
    pub fn build(dataset: &Dataset<SeaLevel>, config: ScatterConfig) -> Result<Self> {
        let records = dataset.records.clone();
        let x = LinearScale::new(compute_domain(&records, SeaLevel::YEAR)?, config.plot_x());
        let y = LinearScale::new(compute_domain(&records, SeaLevel::ADJUSTED_SEA_LEVEL)?, config.plot_y());
        let r = SqrtScale::new(compute_domain(&records, SeaLevel::UPPER_ERROR_BOUND)?, config.radius_range);
        let seas = compute_categories(&records, SeaLevel::SEA_NAME)?;
        let fill = OrdinalScale::new(seas, config.palette.clone())?;
        Ok(Self { records, x, y, r, fill, config })
    }

    pub fn x_scale(&self) -> &LinearScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn r_scale(&self) -> &SqrtScale { &self.r }
    pub fn fill_scale(&self) -> &OrdinalScale<Color> { &self.fill }

    fn center(&self, record: &SeaLevel) -> Point {
        Point::new(self.x.to_px(record.year), self.y.to_px(record.adjusted_sea_level))
    }

    fn point_mark(&self, record: &SeaLevel, opacity: f64) -> Option<Mark> {
        let color = *self.fill.get(&record.sea_name)?;
        Some(Mark::Circle {
            center: self.center(record),
            radius: self.r.to_px(record.upper_error_bound),
            fill: color.with_opacity(self.config.fill_opacity * opacity),
            stroke: Some(Stroke::new(color.with_opacity(opacity), self.config.stroke_width)),
        })
    }

    fn legends(&self) -> Vec<Legend> {
        let cfg = &self.config;
        let theme = &cfg.theme;
        let color = Legend::color(&self.fill, cfg.legend, theme.text).family(theme.font);
        let below = LegendLayout {
            origin: cfg.legend.origin.offset(0.0, color.height() + cfg.legend.margin),
            ..cfg.legend
        };
        let size = Legend::size(&self.r, &cfg.size_unit, cfg.size_swatch, below, theme.text).family(theme.font);
        vec![color, size]
    }
}

impl ChartContext for ScatterPlot {
    type Record = SeaLevel;

    fn records(&self) -> &[SeaLevel] {
        &self.records
    }

    fn mark(&self, index: usize) -> Option<Mark> {
        self.point_mark(self.records.get(index)?, 1.0)
    }

    fn tooltip_anchor(&self, index: usize, pointer: Point) -> Point {
        let (dx, dy) = self.config.tooltip_offset;
        self.records
            .get(index)
            .map(|r| self.center(r).offset(dx, dy))
            .unwrap_or(pointer)
    }

    fn scene(&self, hover: Option<&Hover>) -> Scene {
        let cfg = &self.config;
        let theme = &cfg.theme;
        let mut scene = Scene::new(cfg.size, theme.background);

        let hovered = hover.map(|h| h.index);
        let resting = if hovered.is_some() { cfg.dim_opacity } else { 1.0 };
        scene.marks = self
            .records
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != hovered)
            .filter_map(|(_, r)| self.point_mark(r, resting))
            .collect();
        // hovered point is raised above the rest
        if let Some(mark) = hovered.and_then(|i| self.records.get(i)).and_then(|r| self.point_mark(r, 1.0)) {
            scene.marks.push(mark);
        }

        let (x0, x1) = cfg.plot_x();
        let (y0, y1) = cfg.plot_y();
        scene.axes.push(AxisLayout::linear(&self.x, AxisOrient::Bottom, y0, cfg.x_ticks).styled(theme.axis, theme.font));
        scene.axes.push(AxisLayout::linear(&self.y, AxisOrient::Left, x0, cfg.y_ticks).styled(theme.axis, theme.font));

        let mid_x = (x0 + x1) / 2.0;
        let mid_y = (y0 + y1) / 2.0;
        scene.texts.push(
            TextMark::new(cfg.x_label.clone(), Point::new(mid_x, cfg.size.height - cfg.margins.bottom / 1.5), 20.0, theme.text)
                .family(theme.font)
                .anchor(Anchor::Middle),
        );
        scene.texts.push(
            TextMark::new(cfg.y_label.clone(), Point::new(cfg.margins.left / 1.5, mid_y), 20.0, theme.text)
                .family(theme.font)
                .anchor(Anchor::Middle)
                .rotated(-90.0),
        );
        scene.texts.extend(title_texts(std::slice::from_ref(&cfg.title), mid_x, 45.0, 25.0, theme));
        scene.texts.extend(caption_texts(&cfg.caption, mid_x, cfg.size.height - 60.0, theme));

        scene.legends = self.legends();
        attach_tooltip(&mut scene, hover, *theme);
        scene
    }
}
