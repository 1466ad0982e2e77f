// File: crates/tidemark-render/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic scatterplot (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use tidemark_core::{ChartContext, Dataset, ScatterConfig, ScatterPlot, SeaLevel};
use tidemark_render::{RenderOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let seas = ["Baltic Sea", "Indian Ocean", "Mediterranean"];
    let records = (0..30)
        .map(|i| SeaLevel {
            sea_name: seas[i % seas.len()].into(),
            adjusted_sea_level: i as f64 * 0.3,
            upper_error_bound: 0.2 + (i % 4) as f64 * 0.2,
            year: 1880.0 + i as f64 * 4.0,
        })
        .collect();
    let plot = ScatterPlot::build(&Dataset::from_records(records), ScatterConfig::try_default().expect("config"))
        .expect("build");

    // text depends on installed fonts; keep the golden image to shapes only
    let opts = RenderOptions { draw_text: false, ..RenderOptions::default() };
    SkiaRenderer::new().render_to_png_bytes(&plot.scene(None), &opts).expect("render bytes")
}

#[test]
fn golden_scatterplot() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("scatterplot.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
