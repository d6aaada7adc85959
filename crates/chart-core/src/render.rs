// File: crates/chart-core/src/render.rs
// Summary: Paints a composed `Frame` with Skia CPU raster surfaces (PNG / RGBA output).

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::curve::{CurvePath, PathCommand};
use crate::frame::{ChartFrame, Frame, Marker};
use crate::style::ChartStyle;
use crate::types::{Insets, ViewBounds, HEIGHT, WIDTH};

/// Caption painted in place of the line when there is nothing to draw.
pub const NO_DATA_TEXT: &str = "No data available";

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub style: ChartStyle,
    /// Axis text and the "no data" caption. Off keeps output font-independent.
    pub draw_labels: bool,
}

impl RenderOptions {
    /// Plot area the engine should lay the series out in.
    pub fn view_bounds(&self) -> ViewBounds {
        ViewBounds::inside(self.width, self.height, &self.insets)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            style: ChartStyle::default(),
            draw_labels: false,
        }
    }
}

/// Paint `frame` onto `canvas`. The canvas origin is the surface's top-left; the
/// plot is offset by the insets.
pub fn paint_frame(canvas: &skia::Canvas, frame: &Frame, opts: &RenderOptions) {
    canvas.clear(opts.style.background);
    canvas.save();
    canvas.translate((opts.insets.left as f32, opts.insets.top as f32));

    let bounds = frame.bounds();
    match frame {
        Frame::NoData { grid, .. } => {
            draw_grid(canvas, grid, bounds.width, &opts.style);
            if opts.draw_labels {
                draw_text_centered(canvas, NO_DATA_TEXT, bounds.width * 0.5, bounds.height * 0.5, 14.0, opts.style.label);
            }
        }
        Frame::Chart(chart) => {
            draw_grid(canvas, &chart.grid, bounds.width, &opts.style);
            draw_fill(canvas, &chart.paths.fill, bounds.height, &opts.style);
            draw_stroke(canvas, &chart.paths.stroke, &opts.style);
            if let Some(m) = chart.selection {
                draw_selection(canvas, m, bounds.height, &opts.style);
            } else if let Some(m) = chart.last_point {
                draw_dot(canvas, m, opts.style.marker_radius * 0.8, opts.style.line);
            }
            if opts.draw_labels {
                draw_labels(canvas, chart, &opts.style);
            }
        }
    }
    canvas.restore();
}

fn rasterize(frame: &Frame, opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    paint_frame(surface.canvas(), frame, opts);
    Ok(surface)
}

/// Render to an in-memory PNG.
pub fn render_to_png_bytes(frame: &Frame, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(frame, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(frame: &Frame, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(frame, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(frame: &Frame, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(frame, opts)?;
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let info = skia::ImageInfo::new((opts.width, opts.height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} surface failed");
    }
    Ok((pixels, w, h, stride))
}

// ---- helpers ----------------------------------------------------------------

fn to_skia_path(path: &CurvePath) -> skia::Path {
    let mut p = skia::Path::new();
    for cmd in &path.commands {
        match *cmd {
            PathCommand::MoveTo(pt) => { p.move_to((pt.x, pt.y)); }
            PathCommand::LineTo(pt) => { p.line_to((pt.x, pt.y)); }
            PathCommand::CubicTo { c1, c2, to } => { p.cubic_to((c1.x, c1.y), (c2.x, c2.y), (to.x, to.y)); }
            PathCommand::Close => { p.close(); }
        }
    }
    p
}

fn draw_grid(canvas: &skia::Canvas, lines: &[f32], width: f32, style: &ChartStyle) {
    let mut paint = skia::Paint::default();
    paint.set_color(style.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for &y in lines {
        canvas.draw_line((0.0, y), (width, y), &paint);
    }
}

fn draw_fill(canvas: &skia::Canvas, fill: &CurvePath, height: f32, style: &ChartStyle) {
    if fill.is_empty() { return; }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    let colors = [style.fill_top, style.fill_bottom];
    paint.set_shader(skia::Shader::linear_gradient(
        ((0.0, 0.0), (0.0, height)),
        &colors[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    ));
    canvas.draw_path(&to_skia_path(fill), &paint);
}

fn draw_stroke(canvas: &skia::Canvas, stroke: &CurvePath, style: &ChartStyle) {
    if stroke.is_empty() { return; }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.line_width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(style.line);
    canvas.draw_path(&to_skia_path(stroke), &paint);
}

fn draw_selection(canvas: &skia::Canvas, m: Marker, height: f32, style: &ChartStyle) {
    let mut guide = skia::Paint::default();
    guide.set_anti_alias(true);
    guide.set_style(skia::paint::Style::Stroke);
    guide.set_stroke_width(1.0);
    guide.set_color(style.guide);
    guide.set_path_effect(skia::PathEffect::dash(&style.guide_dash, 0.0));
    canvas.draw_line((m.x, 0.0), (m.x, height), &guide);

    draw_dot(canvas, m, style.halo_radius, style.halo);
    draw_dot(canvas, m, style.marker_radius, style.line);
    draw_dot(canvas, m, style.inner_radius, style.marker_inner);
}

fn draw_dot(canvas: &skia::Canvas, m: Marker, radius: f32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    canvas.draw_circle((m.x, m.y), radius, &paint);
}

fn draw_labels(canvas: &skia::Canvas, chart: &ChartFrame, style: &ChartStyle) {
    for l in &chart.x_labels {
        draw_text(canvas, &l.text, l.at - 16.0, chart.bounds.height + 16.0, 10.0, style.label);
    }
    for l in &chart.y_labels {
        draw_text(canvas, &l.text, 4.0, l.at + if l.at <= 0.0 { 12.0 } else { -4.0 }, 10.0, style.label);
    }
}

fn text_paint(size: f32, color: skia::Color) -> (skia::Font, skia::Paint) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(size);
    (font, paint)
}

fn draw_text(canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
    let (font, paint) = text_paint(size, color);
    canvas.draw_str(text, (x, y), &font, &paint);
}

/// Draw `text` with its ink box centred horizontally on `cx`, baseline at `y`.
fn draw_text_centered(canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
    let (font, paint) = text_paint(size, color);
    let (_, ink) = font.measure_str(text, Some(&paint));
    canvas.draw_str(text, (cx - ink.center_x(), y), &font, &paint);
}
