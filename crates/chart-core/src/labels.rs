// File: crates/chart-core/src/labels.rs
// Summary: Axis label text: a few dates along x and the padded min/max on y.

use crate::normalize::{index_to_x, ValueRange};
use crate::period::Period;
use crate::series::Series;

/// Maximum number of date labels along the x axis.
pub const MAX_DATE_LABELS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    /// Position along the axis in view coordinates.
    pub at: f32,
}

/// Up to `MAX_DATE_LABELS` evenly picked dates, always ending on the last sample.
/// Series with fewer than three samples get no labels.
pub fn date_labels(series: &Series, period: Period, width: f32) -> Vec<AxisLabel> {
    let n = series.len();
    if n <= 2 {
        return Vec::new();
    }
    let fmt = if period.is_short() { "%d %b" } else { "%b %y" };
    let count = MAX_DATE_LABELS.min(n);
    let step = ((n - 1) / (count - 1)).max(1);

    let mut indices: Vec<usize> = (0..n).step_by(step).take(count - 1).collect();
    indices.push(n - 1);

    let mut out: Vec<AxisLabel> = Vec::with_capacity(count);
    for i in indices {
        let text = series.samples()[i].timestamp.format(fmt).to_string();
        // neighbouring samples can share a month; keep only the first of a run
        if out.last().is_some_and(|l| l.text == text) {
            continue;
        }
        out.push(AxisLabel { text, at: index_to_x(i, n, width) });
    }
    out
}

/// Labels for the top (max) and bottom (min) of the value range.
pub fn value_labels(range: &ValueRange, height: f32) -> [AxisLabel; 2] {
    [
        AxisLabel { text: format_value(range.max), at: 0.0 },
        AxisLabel { text: format_value(range.min), at: height },
    ]
}

fn format_value(v: f64) -> String {
    if v.abs() >= 100.0 { format!("{v:.0}") } else { format!("{v:.2}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn daily(n: usize) -> Series {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Series::from_pairs((0..n).map(|i| (start + Days::new(i as u64), 100.0 + i as f64))).unwrap()
    }

    #[test]
    fn short_series_has_no_date_labels() {
        assert!(date_labels(&daily(2), Period::OneMonth, 300.0).is_empty());
    }

    #[test]
    fn month_window_labels_days_and_ends_on_last() {
        let labels = date_labels(&daily(30), Period::OneMonth, 290.0);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].text, "01 Jan");
        assert_eq!(labels[4].text, "30 Jan");
        assert_eq!(labels[4].at, 290.0);
    }

    #[test]
    fn long_window_dedups_months() {
        let labels = date_labels(&daily(30), Period::OneYear, 290.0);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Jan 25");
    }

    #[test]
    fn value_labels_top_and_bottom() {
        let [top, bottom] = value_labels(&ValueRange { min: 85.5, max: 157.5 }, 180.0);
        assert_eq!(top.text, "158");
        assert_eq!(bottom.text, "85.50");
        assert_eq!(bottom.at, 180.0);
    }
}
