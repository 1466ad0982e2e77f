// File: crates/tidemark-render/src/paint.rs
// Summary: Scene element painters (marks, axes, legends, tooltip panel) on a Skia canvas.

use skia_safe as skia;
use tidemark_core::axis::AxisLayout;
use tidemark_core::legend::Legend;
use tidemark_core::scene::{FontWeight, Mark, Stroke};
use tidemark_core::tooltip::{Emphasis, TooltipLayout};
use tidemark_core::types::Color;

use crate::text::TextShaper;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia_color(stroke.color));
    paint
}

pub fn draw_mark(canvas: &skia::Canvas, mark: &Mark) {
    match mark {
        Mark::Rect { rect, fill, stroke } => {
            let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
            canvas.draw_rect(r, &fill_paint(*fill));
            if let Some(s) = stroke {
                canvas.draw_rect(r, &stroke_paint(s));
            }
        }
        Mark::Circle { center, radius, fill, stroke } => {
            let c = (center.x as f32, center.y as f32);
            canvas.draw_circle(c, *radius as f32, &fill_paint(*fill));
            if let Some(s) = stroke {
                canvas.draw_circle(c, *radius as f32, &stroke_paint(s));
            }
        }
        Mark::Rule { from, to, stroke } => {
            canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke_paint(stroke));
        }
    }
}

pub fn draw_axis(canvas: &skia::Canvas, text: Option<&TextShaper>, axis: &AxisLayout) {
    for rule in axis.rules() {
        draw_mark(canvas, &rule);
    }
    if let Some(shaper) = text {
        for label in axis.labels() {
            shaper.draw(canvas, &label);
        }
    }
}

pub fn draw_legend(canvas: &skia::Canvas, text: Option<&TextShaper>, legend: &Legend) {
    for swatch in legend.marks() {
        draw_mark(canvas, &swatch);
    }
    if let Some(shaper) = text {
        for label in legend.labels() {
            shaper.draw(canvas, &label);
        }
    }
}

/// Rounded panel sized to the measured text, then its lines.
pub fn draw_tooltip(canvas: &skia::Canvas, shaper: &TextShaper, tooltip: &TooltipLayout) {
    let size = tooltip.style.font_size as f32;
    let family = tooltip.theme.font;
    let panel = tooltip.panel(|line| {
        let w = match line.emphasis {
            Emphasis::None => shaper.measure_width(&line.text(), size, family, FontWeight::Normal),
            Emphasis::Line => shaper.measure_width(&line.text(), size, family, FontWeight::Bold),
            Emphasis::Value => {
                shaper.measure_width(&format!("{}: ", line.label), size, family, FontWeight::Normal)
                    + shaper.measure_width(&line.value, size, family, FontWeight::Bold)
            }
        };
        w as f64
    });

    let r = skia::Rect::from_ltrb(panel.left as f32, panel.top as f32, panel.right as f32, panel.bottom as f32);
    canvas.draw_round_rect(r, 4.0, 4.0, &fill_paint(tooltip.theme.tooltip_background));
    canvas.draw_round_rect(r, 4.0, 4.0, &stroke_paint(&Stroke::new(tooltip.theme.tooltip_border, 1.0)));

    for line in tooltip.texts(&panel, |s, weight| shaper.measure_width(s, size, family, weight) as f64) {
        shaper.draw(canvas, &line);
    }
}
