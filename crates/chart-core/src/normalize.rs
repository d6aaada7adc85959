// File: crates/chart-core/src/normalize.rs
// Summary: Maps a sample series into view coordinates over a padded value range.
// Notes:
// - X is spaced by sample index, not by timestamp. Irregular gaps between dates are
//   not visible on the chart; hosts rely on this layout staying as it is.
// - Y is clamped to [0, height] after scaling so float drift in the padding math
//   can never push a point outside the view.

use crate::error::ChartError;
use crate::geometry::{clamp_finite, NormalizedPoint};
use crate::series::Series;
use crate::types::ViewBounds;

/// Fraction added below the minimum and above the maximum value.
pub const DEFAULT_VALUE_PADDING: f64 = 0.05;

/// Padded value range the y axis spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// `min * (1 - padding)` .. `max * (1 + padding)` over the series values.
    pub fn padded(series: &Series, padding: f64) -> Option<Self> {
        let min = series.min_value()?;
        let max = series.max_value()?;
        Some(Self { min: min * (1.0 - padding), max: max * (1.0 + padding) })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range, clamped to [0, 1].
    #[inline]
    pub fn fraction(&self, value: f64) -> f32 {
        clamp_finite(((value - self.min) / self.span()) as f32, 0.0, 1.0)
    }
}

/// Horizontal position of sample `index` out of `count`, evenly spread over `width`.
#[inline]
pub fn index_to_x(index: usize, count: usize, width: f32) -> f32 {
    if count < 2 {
        return 0.0;
    }
    index as f32 * width / (count - 1) as f32
}

/// Project `series` into `bounds` using a padded value range.
pub fn normalize(series: &Series, bounds: ViewBounds, value_padding: f64) -> Result<Vec<NormalizedPoint>, ChartError> {
    let n = series.len();
    if n < 2 {
        return Err(ChartError::InsufficientData { len: n });
    }
    let range = value_range(series, value_padding)?;

    let h = bounds.height;
    Ok(series
        .values()
        .enumerate()
        .map(|(i, v)| NormalizedPoint::new(index_to_x(i, n, bounds.width), h - range.fraction(v) * h))
        .collect())
}

/// Padded range for `series`, or `FlatSeries` when it has no extent.
pub fn value_range(series: &Series, value_padding: f64) -> Result<ValueRange, ChartError> {
    let range = ValueRange::padded(series, value_padding).ok_or(ChartError::InsufficientData { len: series.len() })?;
    let identical = series.min_value() == series.max_value();
    // `!(x > 0)` also catches a NaN span
    if identical || !(range.span() > 0.0) {
        let value = series.first().map(|s| s.value).unwrap_or_default();
        return Err(ChartError::FlatSeries { value });
    }
    Ok(range)
}

/// Fallback for flat series: every sample on a horizontal line at mid-height.
pub fn flat_points(count: usize, bounds: ViewBounds) -> Vec<NormalizedPoint> {
    let mid = bounds.height * 0.5;
    (0..count).map(|i| NormalizedPoint::new(index_to_x(i, count, bounds.width), mid)).collect()
}
