// File: crates/chart-core/src/series.rs
// Summary: Portfolio value samples and the validated series handed to the chart.
// Notes:
// - Samples are ordered strictly by date; `Series::try_new` is the only way in, so
//   the rest of the crate never re-checks ordering.
// - Identity of a series is its `Arc` allocation; the engine compares pointers,
//   not contents, to decide whether to restart the reveal animation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: NaiveDate,
    pub value: f64,
    /// Amount invested up to this date, when the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        Self { timestamp, value, invested: None }
    }

    pub fn with_invested(mut self, invested: f64) -> Self {
        self.invested = Some(invested);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries", into = "RawSeries")]
pub struct Series {
    samples: Vec<Sample>,
    period_return: Option<f64>,
}

#[derive(Clone, Serialize, Deserialize)]
struct RawSeries {
    samples: Vec<Sample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    period_return: Option<f64>,
}

impl TryFrom<RawSeries> for Series {
    type Error = ChartError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let series = Series::try_new(raw.samples)?;
        Ok(match raw.period_return {
            Some(pct) => series.with_period_return(pct),
            None => series,
        })
    }
}

impl From<Series> for RawSeries {
    fn from(s: Series) -> Self {
        RawSeries { samples: s.samples, period_return: s.period_return }
    }
}

impl Series {
    pub fn empty() -> Self {
        Self { samples: Vec::new(), period_return: None }
    }

    /// Validate ordering and finiteness, then wrap the samples.
    pub fn try_new(samples: Vec<Sample>) -> Result<Self, ChartError> {
        for (index, s) in samples.iter().enumerate() {
            if !s.value.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
            if index > 0 && s.timestamp <= samples[index - 1].timestamp {
                return Err(ChartError::UnorderedSamples { index });
            }
        }
        Ok(Self { samples, period_return: None })
    }

    /// Build from `(date, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::try_new(pairs.into_iter().map(|(d, v)| Sample::new(d, v)).collect())
    }

    /// Attach a period return computed upstream; it wins over the derived one.
    pub fn with_period_return(mut self, percent: f64) -> Self {
        self.period_return = Some(percent);
        self
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }
    pub fn first(&self) -> Option<&Sample> { self.samples.first() }
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn min_value(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    /// Percent change over the whole series. Upstream value if one was attached,
    /// otherwise `(last - first) / first * 100`.
    pub fn period_return_percent(&self) -> Option<f64> {
        if self.period_return.is_some() {
            return self.period_return;
        }
        if self.samples.len() < 2 {
            return None;
        }
        let first = self.samples[0].value;
        let last = self.samples[self.samples.len() - 1].value;
        percent_change(first, last)
    }

    /// Everything a header needs to describe the sample at `index`.
    pub fn selected_point(&self, index: usize) -> Option<SelectedPoint> {
        let sample = *self.samples.get(index)?;
        let prev = index.checked_sub(1).and_then(|i| self.samples.get(i));
        let change = prev.map(|p| sample.value - p.value);
        let change_percent = prev.and_then(|p| percent_change(p.value, sample.value));
        let return_percent = self.samples.first().and_then(|f| percent_change(f.value, sample.value));
        Some(SelectedPoint { index, sample, change, change_percent, return_percent })
    }
}

impl Default for Series {
    fn default() -> Self { Self::empty() }
}

fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 { None } else { Some((to - from) / from * 100.0) }
}

/// Selected sample plus the derived changes shown next to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedPoint {
    pub index: usize,
    pub sample: Sample,
    /// Value change since the previous sample (`None` for the first one).
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    /// Percent change since the first sample of the series.
    pub return_percent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let err = Series::from_pairs([(d(1), 1.0), (d(1), 2.0)]).unwrap_err();
        assert_eq!(err, ChartError::UnorderedSamples { index: 1 });
    }

    #[test]
    fn rejects_nan() {
        let err = Series::from_pairs([(d(1), 1.0), (d(2), f64::NAN)]).unwrap_err();
        assert_eq!(err, ChartError::NonFiniteValue { index: 1 });
    }

    #[test]
    fn derived_aggregates() {
        let s = Series::from_pairs([(d(1), 100.0), (d(2), 120.0), (d(3), 90.0), (d(4), 150.0)]).unwrap();
        assert_eq!(s.min_value(), Some(90.0));
        assert_eq!(s.max_value(), Some(150.0));
        assert_eq!(s.period_return_percent(), Some(50.0));
        assert_eq!(s.clone().with_period_return(12.5).period_return_percent(), Some(12.5));
    }

    #[test]
    fn period_return_needs_nonzero_start() {
        let s = Series::from_pairs([(d(1), 0.0), (d(2), 10.0)]).unwrap();
        assert_eq!(s.period_return_percent(), None);
        assert_eq!(Series::empty().period_return_percent(), None);
    }

    #[test]
    fn selected_point_changes() {
        let s = Series::from_pairs([(d(1), 100.0), (d(2), 120.0), (d(3), 90.0)]).unwrap();
        let p = s.selected_point(2).unwrap();
        assert_eq!(p.change, Some(-30.0));
        assert!((p.change_percent.unwrap() + 25.0).abs() < 1e-9);
        assert!((p.return_percent.unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(s.selected_point(0).unwrap().change, None);
        assert!(s.selected_point(3).is_none());
    }
}
