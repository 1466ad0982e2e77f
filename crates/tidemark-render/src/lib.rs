// File: crates/tidemark-render/src/lib.rs
// Summary: Headless scene rendering to PNG/RGBA using Skia CPU raster surfaces.

pub mod paint;
pub mod text;

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tidemark_core::Scene;
use tracing::info;

pub use text::TextShaper;

pub struct RenderOptions {
    /// Device pixels per scene pixel.
    pub scale: f32,
    /// Text is skipped when false (deterministic output across font setups).
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_text: true }
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    fn device_size(scene: &Scene, opts: &RenderOptions) -> (i32, i32) {
        let s = opts.scale.max(0.1) as f64;
        (
            (scene.size.width * s).ceil().max(1.0) as i32,
            (scene.size.height * s).ceil().max(1.0) as i32,
        )
    }

    /// Paint `scene` onto `canvas`: background, marks, axes, text, legends, tooltip.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let text = opts.draw_text.then_some(&self.text);
        canvas.clear(paint::to_skia_color(scene.background));
        canvas.save();
        canvas.scale((opts.scale, opts.scale));

        for mark in &scene.marks {
            paint::draw_mark(canvas, mark);
        }
        for axis in &scene.axes {
            paint::draw_axis(canvas, text, axis);
        }
        if let Some(shaper) = text {
            for t in &scene.texts {
                shaper.draw(canvas, t);
            }
        }
        for legend in &scene.legends {
            paint::draw_legend(canvas, text, legend);
        }
        if let (Some(shaper), Some(tooltip)) = (text, &scene.tooltip) {
            paint::draw_tooltip(canvas, shaper, tooltip);
        }

        canvas.restore();
    }

    /// Render into an RGBA8 (unpremultiplied) buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = Self::device_size(scene, opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene, opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} surface");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(scene, opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = data.len(), "wrote chart");
        Ok(())
    }
}
