// File: crates/chart-core/src/animation.rs
// Summary: Reveal animation clock driven by host frame ticks.

use serde::{Deserialize, Serialize};

/// Default reveal duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 800.0;

/// Easing curves. All map 0 to 0 and 1 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Quadratic, slow end.
    EaseOut,
    /// Quadratic, slow start and end.
    EaseInOut,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Apply the curve to a normalized time value; input is clamped to [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 { 2.0 * t * t } else { -1.0 + (4.0 - 2.0 * t) * t }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = 2.0 * t - 2.0;
                    0.5 * f * f * f + 1.0
                }
            }
        }
    }
}

/// Progress after `elapsed_ms` of a `duration_ms` run.
pub fn progress_at(elapsed_ms: f64, duration_ms: f64, easing: Easing) -> f32 {
    if !(duration_ms > 0.0) {
        return 1.0;
    }
    easing.apply((elapsed_ms / duration_ms) as f32)
}

/// Wall-clock-free animation state. The host calls `tick` once per frame with the
/// time since the previous frame; nothing here owns a timer.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    elapsed_ms: f64,
    duration_ms: f64,
    easing: Easing,
    progress: f32,
    attached: bool,
}

impl AnimationDriver {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self { elapsed_ms: 0.0, duration_ms, easing, progress: 0.0, attached: true }
    }

    /// Start a fresh run from progress 0.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.progress = progress_at(0.0, self.duration_ms, self.easing);
    }

    /// Jump to the end of the current run.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms.max(0.0);
        self.progress = 1.0;
    }

    /// Advance by `dt_ms` and return the new progress. Negative, NaN and detached
    /// ticks leave the clock where it is.
    pub fn tick(&mut self, dt_ms: f64) -> f32 {
        if self.attached && dt_ms.is_finite() && dt_ms > 0.0 && self.is_running() {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms.max(0.0));
            self.progress = progress_at(self.elapsed_ms, self.duration_ms, self.easing);
        }
        self.progress
    }

    pub fn progress(&self) -> f32 { self.progress }
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }
    pub fn duration_ms(&self) -> f64 { self.duration_ms }

    pub fn is_complete(&self) -> bool { self.progress >= 1.0 }

    /// True while the host should keep delivering frame callbacks.
    pub fn is_running(&self) -> bool { self.attached && !self.is_complete() }

    /// Stop consuming ticks, e.g. when the chart scrolls out of view.
    pub fn detach(&mut self) { self.attached = false; }
    pub fn attach(&mut self) { self.attached = true; }
    pub fn is_attached(&self) -> bool { self.attached }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::default())
    }
}
