// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A sample projected into view space. Always derived, never stored with the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move the point toward `baseline` so that its vertical offset is scaled by `t`.
    #[inline]
    pub fn scaled_from_baseline(self, baseline: f32, t: f32) -> Self {
        Self { x: self.x, y: baseline - (baseline - self.y) * t }
    }
}

impl From<NormalizedPoint> for (f32, f32) {
    fn from(p: NormalizedPoint) -> Self {
        (p.x, p.y)
    }
}

/// Clamp that maps NaN to `lo` instead of propagating it.
#[inline]
pub fn clamp_finite(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}
