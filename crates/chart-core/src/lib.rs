// File: crates/chart-core/src/lib.rs
// Summary: Portfolio growth chart engine; exports the public API for layout, interaction and rendering.

pub mod animation;
pub mod chart;
pub mod config;
pub mod controller;
pub mod curve;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod grid;
pub mod hit_test;
pub mod labels;
pub mod normalize;
pub mod period;
pub mod render;
pub mod series;
pub mod style;
pub mod types;

pub use animation::{progress_at, AnimationDriver, Easing};
pub use chart::ChartEngine;
pub use config::ChartConfig;
pub use controller::{FetchRequest, HistorySource, PendingFetch, PeriodController, RequestToken, Resolution};
pub use curve::{build_path, CurvePath, CurvePaths};
pub use error::{ChartError, FetchError};
pub use frame::{Frame, Layout};
pub use geometry::NormalizedPoint;
pub use gesture::{Gesture, PointerEvent};
pub use hit_test::{nearest_index, SelectionState};
pub use normalize::{normalize, ValueRange};
pub use period::Period;
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use series::{Sample, SelectedPoint, Series};
pub use style::ChartStyle;
pub use types::{Insets, ViewBounds};
