// File: crates/chart-core/src/style.rs
// Summary: Colors and stroke sizes the painter uses for the growth chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub line: skia::Color,
    /// Gradient stops under the line, top to bottom.
    pub fill_top: skia::Color,
    pub fill_bottom: skia::Color,
    pub guide: skia::Color,
    pub halo: skia::Color,
    pub marker_inner: skia::Color,
    pub label: skia::Color,
    pub line_width: f32,
    pub marker_radius: f32,
    pub halo_radius: f32,
    pub inner_radius: f32,
    /// On/off lengths of the selection guide dash.
    pub guide_dash: [f32; 2],
}

impl ChartStyle {
    pub fn dark() -> Self {
        let line = skia::Color::from_argb(255, 0x60, 0xa5, 0xfa);
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(15, 255, 255, 255),
            line,
            fill_top: line.with_a(77),
            fill_bottom: line.with_a(5),
            guide: line.with_a(77),
            halo: line.with_a(51),
            marker_inner: skia::Color::WHITE,
            label: skia::Color::from_argb(102, 255, 255, 255),
            ..Self::base()
        }
    }

    pub fn light() -> Self {
        let line = skia::Color::from_argb(255, 0x25, 0x63, 0xeb);
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(15, 0, 0, 0),
            line,
            fill_top: line.with_a(77),
            fill_bottom: line.with_a(5),
            guide: line.with_a(77),
            halo: line.with_a(51),
            marker_inner: skia::Color::WHITE,
            label: skia::Color::from_argb(102, 0, 0, 0),
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            name: "",
            background: skia::Color::BLACK,
            grid: skia::Color::BLACK,
            line: skia::Color::BLACK,
            fill_top: skia::Color::TRANSPARENT,
            fill_bottom: skia::Color::TRANSPARENT,
            guide: skia::Color::BLACK,
            halo: skia::Color::TRANSPARENT,
            marker_inner: skia::Color::WHITE,
            label: skia::Color::BLACK,
            line_width: 2.5,
            marker_radius: 5.0,
            halo_radius: 10.0,
            inner_radius: 2.5,
            guide_dash: [8.0, 8.0],
        }
    }

    /// Look up a built-in style by name, falling back to dark.
    pub fn find(name: &str) -> Self {
        [Self::dark(), Self::light()]
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(Self::dark)
    }
}

impl Default for ChartStyle {
    fn default() -> Self { Self::dark() }
}
