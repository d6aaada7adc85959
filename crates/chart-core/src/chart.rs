// File: crates/chart-core/src/chart.rs
// Summary: ChartEngine ties series layout, reveal animation, selection, gestures and
// period loading together behind explicit inputs and observer callbacks.
// Notes:
// - Nothing here re-renders on its own. The host feeds inputs (series, bounds,
//   pointer events, frame ticks, fetch results) and pulls a `Frame` when it draws.
// - A new series is detected by `Arc` pointer identity; that alone restarts the
//   reveal and clears the selection.

use std::sync::Arc;

use log::{debug, trace};

use crate::animation::AnimationDriver;
use crate::config::ChartConfig;
use crate::controller::{FetchRequest, HistorySource, PendingFetch, PeriodController, RequestToken, Resolution};
use crate::error::FetchError;
use crate::frame::{compose, Frame, FrameParams, Layout};
use crate::gesture::{Gesture, GestureRecognizer, PointerEvent};
use crate::hit_test::{nearest_index, SelectionState};
use crate::labels::{date_labels, value_labels, AxisLabel};
use crate::period::Period;
use crate::series::{SelectedPoint, Series};
use crate::types::ViewBounds;

pub type PointSelectedFn = Box<dyn FnMut(Option<&SelectedPoint>)>;
pub type PeriodChangedFn = Box<dyn FnMut(Period)>;
pub type FetchErrorFn = Box<dyn FnMut(&FetchError, Period)>;

pub struct ChartEngine {
    config: ChartConfig,
    bounds: ViewBounds,
    controller: PeriodController,
    /// Series the current layout was computed from.
    laid_out: Arc<Series>,
    /// `None` while the series has fewer than two samples.
    layout: Option<Layout>,
    /// Axis text for the current layout; rebuilt with it, not per frame.
    x_labels: Vec<AxisLabel>,
    y_labels: Vec<AxisLabel>,
    animation: AnimationDriver,
    selection: SelectionState,
    gestures: GestureRecognizer,
    on_point_selected: Option<PointSelectedFn>,
    on_period_changed: Option<PeriodChangedFn>,
    on_fetch_error: Option<FetchErrorFn>,
}

impl ChartEngine {
    pub fn new(config: ChartConfig, bounds: ViewBounds) -> Self {
        let controller = PeriodController::new(config.default_period);
        let laid_out = Arc::clone(controller.series());
        Self {
            bounds,
            laid_out,
            layout: None,
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            animation: AnimationDriver::new(config.animation.duration_ms, config.animation.easing),
            selection: SelectionState::default(),
            gestures: GestureRecognizer::new(config.gesture),
            controller,
            config,
            on_point_selected: None,
            on_period_changed: None,
            on_fetch_error: None,
        }
    }

    // ---- observers ----------------------------------------------------------

    /// Called with the newly selected point, or `None` when the selection clears.
    pub fn on_point_selected(&mut self, f: impl FnMut(Option<&SelectedPoint>) + 'static) {
        self.on_point_selected = Some(Box::new(f));
    }

    /// Called when the user picks a period, and again with the previous one if
    /// loading it fails.
    pub fn on_period_changed(&mut self, f: impl FnMut(Period) + 'static) {
        self.on_period_changed = Some(Box::new(f));
    }

    /// Called when a history load fails; the second argument is the period that
    /// was requested.
    pub fn on_fetch_error(&mut self, f: impl FnMut(&FetchError, Period) + 'static) {
        self.on_fetch_error = Some(Box::new(f));
    }

    // ---- accessors ----------------------------------------------------------

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn bounds(&self) -> ViewBounds { self.bounds }
    pub fn series(&self) -> &Arc<Series> { self.controller.series() }
    pub fn selected_period(&self) -> Period { self.controller.selected_period() }
    pub fn shown_period(&self) -> Period { self.controller.shown_period() }
    pub fn is_loading(&self) -> bool { self.controller.is_loading() }
    pub fn pending_request(&self) -> Option<FetchRequest> { self.controller.pending() }
    pub fn layout(&self) -> Option<&Layout> { self.layout.as_ref() }
    pub fn progress(&self) -> f32 { self.animation.progress() }
    pub fn animation(&self) -> &AnimationDriver { &self.animation }

    /// Selected index, revalidated against the series on screen.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.validated(self.series().len())
    }

    pub fn selected_point(&self) -> Option<SelectedPoint> {
        self.selected_index().and_then(|i| self.series().selected_point(i))
    }

    // ---- data ---------------------------------------------------------------

    /// Show `series` for `period` without going through a fetch. Observers hear about
    /// the period only when it differs from the one on screen.
    pub fn set_series(&mut self, period: Period, series: Arc<Series>) {
        let previous = self.controller.shown_period();
        self.controller.install(period, series);
        if !self.sync_series() && period != previous {
            // same data under another period: only the date format changes
            self.refresh_labels();
        }
        if period != previous {
            self.notify_period(period);
        }
    }

    /// Update the drawing area. Layout is recomputed; selection and animation carry over.
    pub fn resize(&mut self, bounds: ViewBounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.relayout();
    }

    /// Pick a period. Clears the selection at once and returns the request the host
    /// must fulfil, or `None` if nothing needs loading.
    pub fn set_period(&mut self, period: Period) -> Option<FetchRequest> {
        self.set_selection(None);
        let req = self.controller.set_period(period)?;
        self.gestures.reset();
        self.notify_period(period);
        Some(req)
    }

    /// `set_period` plus the fetch from `source`.
    pub fn request_period<S>(&mut self, source: &S, client_id: &str, period: Period) -> Option<PendingFetch>
    where
        S: HistorySource + ?Sized,
    {
        let req = self.set_period(period)?;
        Some(PendingFetch::new(req, source.fetch_history(client_id, req.period)))
    }

    /// (Re)load the selected period, e.g. on first display.
    pub fn reload<S>(&mut self, source: &S, client_id: &str) -> PendingFetch
    where
        S: HistorySource + ?Sized,
    {
        let req = self.controller.reload();
        PendingFetch::new(req, source.fetch_history(client_id, req.period))
    }

    /// Hand back a finished fetch. Stale tokens are ignored.
    pub fn apply_fetch(&mut self, token: RequestToken, result: Result<Series, FetchError>) -> Resolution {
        let resolution = self.controller.resolve(token, result);
        match &resolution {
            Resolution::Applied { .. } => {
                self.sync_series();
            }
            Resolution::Failed { error, requested, kept } => {
                if let Some(cb) = self.on_fetch_error.as_mut() {
                    cb(error, *requested);
                }
                self.notify_period(*kept);
            }
            Resolution::Stale => {}
        }
        resolution
    }

    /// Drop the in-flight request, keeping what is on screen.
    pub fn cancel_pending(&mut self) -> Option<FetchRequest> {
        let cancelled = self.controller.cancel();
        if cancelled.is_some() {
            self.notify_period(self.controller.shown_period());
        }
        cancelled
    }

    /// Returns true when a different series was picked up.
    fn sync_series(&mut self) -> bool {
        let current = Arc::clone(self.controller.series());
        if Arc::ptr_eq(&current, &self.laid_out) {
            return false;
        }
        debug!("series changed ({} samples); restarting reveal", current.len());
        self.laid_out = current;
        self.animation.restart();
        self.set_selection(None);
        self.relayout();
        true
    }

    fn relayout(&mut self) {
        self.layout = Layout::compute(&self.laid_out, self.bounds, self.config.value_padding).ok();
        self.refresh_labels();
    }

    fn refresh_labels(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            self.x_labels.clear();
            self.y_labels.clear();
            return;
        };
        let range = layout.range;
        self.x_labels = date_labels(&self.laid_out, self.controller.shown_period(), self.bounds.width);
        self.y_labels = range.map(|r| Vec::from(value_labels(&r, self.bounds.height))).unwrap_or_default();
    }

    // ---- frame clock ---------------------------------------------------------

    /// Advance the reveal by `dt_ms`; returns the current progress.
    pub fn tick(&mut self, dt_ms: f64) -> f32 {
        self.animation.tick(dt_ms)
    }

    /// Whether the host should keep scheduling frame callbacks.
    pub fn needs_frame(&self) -> bool {
        self.animation.is_running()
    }

    /// Attach or detach from the host's frame clock. Hidden charts stop animating
    /// and drop any gesture in progress.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.animation.attach();
        } else {
            self.animation.detach();
            self.gestures.reset();
        }
    }

    // ---- input ---------------------------------------------------------------

    /// Feed a pointer event in view coordinates. Taps select the nearest sample (or
    /// clear when outside the view), drag ends clear, drag moves are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Gesture {
        let gesture = self.gestures.handle(event);
        match gesture {
            Gesture::Tap { x, y } => {
                trace!("tap at ({x:.1}, {y:.1})");
                if self.bounds.contains(x, y) {
                    self.select_at(x);
                } else {
                    self.set_selection(None);
                }
            }
            Gesture::DragEnd => {
                trace!("drag ended");
                self.set_selection(None);
            }
            Gesture::DragStart => trace!("drag started"),
            Gesture::None => {}
        }
        gesture
    }

    /// Select the sample nearest to `x`. No-op without drawable data.
    pub fn select_at(&mut self, x: f32) -> Option<usize> {
        let count = self.layout.as_ref()?.len();
        let index = nearest_index(x, self.bounds.width, count);
        self.set_selection(Some(index));
        Some(index)
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    fn set_selection(&mut self, next: Option<usize>) {
        if !self.selection.replace_with(next) {
            return;
        }
        let point = next.and_then(|i| self.controller.series().selected_point(i));
        if let Some(cb) = self.on_point_selected.as_mut() {
            cb(point.as_ref());
        }
    }

    fn notify_period(&mut self, period: Period) {
        if let Some(cb) = self.on_period_changed.as_mut() {
            cb(period);
        }
    }

    // ---- output --------------------------------------------------------------

    /// Compose the frame for the current state.
    pub fn frame(&self) -> Frame {
        let mut frame = compose(&FrameParams {
            layout: self.layout.as_ref(),
            bounds: self.bounds,
            progress: self.animation.progress(),
            selection: self.selection,
            grid_lines: self.config.grid_lines,
            smoothing: self.config.curve_smoothing,
        });
        if let Frame::Chart(chart) = &mut frame {
            chart.x_labels.clone_from(&self.x_labels);
            chart.y_labels.clone_from(&self.y_labels);
        }
        frame
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new(ChartConfig::default(), ViewBounds::default())
    }
}
