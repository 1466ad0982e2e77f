// File: crates/tidemark-render/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for each chart kind.

use tidemark_core::geometry::Point;
use tidemark_core::{
    BarChart, BarChartConfig, ChartContext, CountryTemperature, Dataset, LollipopChart, LollipopConfig, ScatterConfig,
    ScatterPlot, SeaLevel,
};
use tidemark_render::{RenderOptions, SkiaRenderer};

fn countries() -> Dataset<CountryTemperature> {
    Dataset::from_records(vec![
        CountryTemperature::new("Estonia", 2.2141),
        CountryTemperature::new("Latvia", 2.0713),
        CountryTemperature::new("Finland", 1.9349),
    ])
}

#[test]
fn render_bar_png() {
    let chart = BarChart::build(&countries(), BarChartConfig::default()).expect("build");
    let hover = chart.hover(Point::new(400.0, 480.0));
    assert!(hover.is_some(), "pointer should be over the first bar");
    let scene = chart.scene(hover.as_ref());

    let out = std::path::PathBuf::from("target/test_out/bar.png");
    let renderer = SkiaRenderer::new();
    renderer.render_to_png(&scene, &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_lollipop_and_scatter_bytes() {
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();

    let lollipop = LollipopChart::build(&countries(), LollipopConfig::default()).expect("build");
    let bytes = renderer.render_to_png_bytes(&lollipop.scene(None), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let sea = Dataset::from_records(vec![
        SeaLevel { sea_name: "Baltic Sea".into(), adjusted_sea_level: 0.1, upper_error_bound: 0.3, year: 1880.0 },
        SeaLevel { sea_name: "Yellow Sea".into(), adjusted_sea_level: 8.9, upper_error_bound: 0.9, year: 2021.0 },
    ]);
    let scatter = ScatterPlot::build(&sea, ScatterConfig::try_default().expect("config")).expect("build");
    let hover = scatter.hover(Point::new(1100.0, 100.0));
    let bytes = renderer.render_to_png_bytes(&scatter.scene(hover.as_ref()), &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1400, 700));
}
