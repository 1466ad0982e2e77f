// File: crates/tidemark-render/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, scaling and background pixels.

use tidemark_core::{BarChart, BarChartConfig, ChartContext, CountryTemperature, Dataset, Theme};
use tidemark_render::{RenderOptions, SkiaRenderer};

fn scene(theme: Theme) -> tidemark_core::Scene {
    let data = Dataset::from_records(vec![CountryTemperature::new("A", 1.0), CountryTemperature::new("B", 3.0)]);
    let config = BarChartConfig { theme, ..BarChartConfig::default() };
    BarChart::build(&data, config).expect("build").scene(None)
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_text: false, ..RenderOptions::default() };
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&scene(Theme::paper()), &opts).expect("rgba render");
    assert_eq!((w, h), (1330, 650));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // white page in the top-left corner
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // inside bar B (x 881..1133, y 100..500): the resting teal fill
    let i = 300 * stride + 1000 * 4;
    assert_eq!(&px[i..i + 4], &[0x1a, 0xbc, 0x9c, 255]);
}

#[test]
fn scale_multiplies_device_size() {
    let opts = RenderOptions { scale: 0.5, draw_text: false };
    let (px, w, h, _) = SkiaRenderer::new().render_to_rgba8(&scene(Theme::slate()), &opts).expect("rgba render");
    assert_eq!((w, h), (665, 325));
    assert_eq!(&px[0..4], &[0x2b, 0x2d, 0x35, 255]);
}
