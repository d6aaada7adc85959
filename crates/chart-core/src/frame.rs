// File: crates/chart-core/src/frame.rs
// Summary: Renderer-agnostic description of one chart frame.
// Notes:
// - `Layout` is the cached, progress-independent projection of a series.
// - `compose` applies the reveal progress and the selection; the painter in
//   `render` only turns the result into pixels.

use crate::curve::{build_path_with, reveal, CurvePaths};
use crate::error::ChartError;
use crate::geometry::NormalizedPoint;
use crate::grid::horizontal_lines;
use crate::hit_test::SelectionState;
use crate::labels::AxisLabel;
use crate::normalize::{flat_points, normalize, ValueRange};
use crate::series::Series;
use crate::types::ViewBounds;

/// Points of a series projected into a view, before animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub points: Vec<NormalizedPoint>,
    /// Padded value range, `None` when the flat fallback was used.
    pub range: Option<ValueRange>,
    pub flat: bool,
}

impl Layout {
    /// Normalize `series`, falling back to a mid-height line for flat input.
    /// Only `InsufficientData` is returned as an error.
    pub fn compute(series: &Series, bounds: ViewBounds, value_padding: f64) -> Result<Self, ChartError> {
        match normalize(series, bounds, value_padding) {
            Ok(points) => {
                let range = crate::normalize::value_range(series, value_padding).ok();
                Ok(Self { points, range, flat: false })
            }
            Err(ChartError::FlatSeries { value }) => {
                log::debug!("flat series at {value}; drawing mid-height line");
                Ok(Self { points: flat_points(series.len(), bounds), range: None, flat: true })
            }
            Err(e) => Err(e),
        }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Point marker in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub bounds: ViewBounds,
    pub grid: Vec<f32>,
    pub paths: CurvePaths,
    /// Points after the reveal was applied.
    pub points: Vec<NormalizedPoint>,
    pub progress: f32,
    pub flat: bool,
    pub selection: Option<Marker>,
    /// Resting marker on the newest sample, shown once the reveal is done and
    /// nothing is selected.
    pub last_point: Option<Marker>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Fewer than two samples: grid plus a "no data" placeholder.
    NoData { bounds: ViewBounds, grid: Vec<f32> },
    Chart(ChartFrame),
}

impl Frame {
    pub fn bounds(&self) -> ViewBounds {
        match self {
            Frame::NoData { bounds, .. } => *bounds,
            Frame::Chart(c) => c.bounds,
        }
    }

    pub fn as_chart(&self) -> Option<&ChartFrame> {
        match self {
            Frame::Chart(c) => Some(c),
            Frame::NoData { .. } => None,
        }
    }

    pub fn selection(&self) -> Option<Marker> {
        self.as_chart().and_then(|c| c.selection)
    }
}

pub struct FrameParams<'a> {
    pub layout: Option<&'a Layout>,
    pub bounds: ViewBounds,
    pub progress: f32,
    pub selection: SelectionState,
    pub grid_lines: usize,
    pub smoothing: f32,
}

pub fn compose(p: &FrameParams<'_>) -> Frame {
    let grid = horizontal_lines(p.bounds.height, p.grid_lines);
    let layout = match p.layout {
        Some(l) if l.len() >= 2 => l,
        _ => return Frame::NoData { bounds: p.bounds, grid },
    };

    let baseline = p.bounds.height;
    let progress = p.progress.clamp(0.0, 1.0);
    let points = reveal(&layout.points, progress, baseline);
    let paths = build_path_with(&points, baseline, p.smoothing);

    let marker_at = |index: usize| points.get(index).map(|pt| Marker { index, x: pt.x, y: pt.y });
    // selection may predate the series now on screen
    let selection = p.selection.validated(points.len()).and_then(marker_at);
    let last_point = if selection.is_none() && progress >= 1.0 { marker_at(points.len() - 1) } else { None };

    Frame::Chart(ChartFrame {
        bounds: p.bounds,
        grid,
        paths,
        points,
        progress,
        flat: layout.flat,
        selection,
        last_point,
        x_labels: Vec::new(),
        y_labels: Vec::new(),
    })
}
