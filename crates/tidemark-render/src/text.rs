// File: crates/tidemark-render/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; honors family, weight, anchor, baseline and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use tidemark_core::scene::{Anchor, Baseline, FontFamily, FontWeight, TextMark};

use crate::paint::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, family: FontFamily, weight: FontWeight) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        match family {
            FontFamily::Serif => {
                ts.set_font_families(&["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "serif"]);
            }
            FontFamily::Sans => {
                ts.set_font_families(&["DM Sans", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
            }
        }
        if weight == FontWeight::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, family: FontFamily, weight: FontWeight) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, family, weight);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, family: FontFamily, weight: FontWeight) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), family, weight);
        // width of the longest line
        p.longest_line()
    }

    /// Paint `mark` with its anchor/baseline resolved against the laid-out paragraph.
    pub fn draw(&self, canvas: &skia::Canvas, mark: &TextMark) {
        let p = self.layout(&mark.text, mark.size as f32, to_skia_color(mark.color), mark.family, mark.weight);
        let w = p.longest_line();
        let dx = match mark.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -w / 2.0,
            Anchor::End => -w,
        };
        // Paragraph draws from its top-left corner
        let dy = match mark.baseline {
            Baseline::Alphabetic => -p.alphabetic_baseline(),
            Baseline::Middle => -p.height() / 2.0,
            Baseline::Hanging => 0.0,
        };
        canvas.save();
        canvas.translate((mark.position.x as f32, mark.position.y as f32));
        if mark.rotation != 0.0 {
            canvas.rotate(mark.rotation as f32, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}
