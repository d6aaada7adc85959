// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, plot insets, view bounds).

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 360;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(24, 24, 24, 24)
    }
}

/// Logical drawing area handed to the engine by the host each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Plot area left over once `insets` are taken off a `width` x `height` surface.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Self {
        let w = (width - insets.hsum() as i32).max(0) as f32;
        let h = (height - insets.vsum() as i32).max(0) as f32;
        Self { width: w, height: h }
    }

    /// True when `(x, y)` lies within `[0, width] x [0, height]`.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::inside(WIDTH, HEIGHT, &Insets::default())
    }
}
