// File: crates/chart-core/src/gesture.rs
// Summary: Tap vs drag recognition from raw pointer events.
// Notes:
// - One gesture at a time: a `Down` while a press or drag is active is ignored.
// - A press becomes a drag once it travels past `tap_slop_px`; from then on it can
//   no longer end as a tap.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Max travel in px for a press to still count as a tap.
    pub tap_slop_px: f32,
    /// Max press duration in ms for a tap.
    pub tap_timeout_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { tap_slop_px: 10.0, tap_timeout_ms: 300.0 }
    }
}

/// Pointer input in view coordinates; `time_ms` is any monotonic host clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32, time_ms: f64 },
    Move { x: f32, y: f32, time_ms: f64 },
    Up { x: f32, y: f32, time_ms: f64 },
    /// Pointer lost (left the surface, captured elsewhere).
    Cancel,
}

/// What a pointer event completed, if anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    None,
    Tap { x: f32, y: f32 },
    DragStart,
    DragEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressed { x: f32, y: f32, time_ms: f64 },
    Dragging,
}

#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    phase: Phase,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self { config, phase: Phase::Idle }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Feed one event; returns the gesture it completes.
    pub fn handle(&mut self, event: PointerEvent) -> Gesture {
        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Down { x, y, time_ms }) => {
                self.phase = Phase::Pressed { x, y, time_ms };
                Gesture::None
            }
            (Phase::Pressed { x: sx, y: sy, .. }, PointerEvent::Move { x, y, .. }) => {
                if exceeds_slop(sx, sy, x, y, self.config.tap_slop_px) {
                    self.phase = Phase::Dragging;
                    Gesture::DragStart
                } else {
                    Gesture::None
                }
            }
            (Phase::Pressed { x: sx, y: sy, time_ms: t0 }, PointerEvent::Up { x, y, time_ms }) => {
                self.phase = Phase::Idle;
                let quick = time_ms - t0 <= self.config.tap_timeout_ms;
                if quick && !exceeds_slop(sx, sy, x, y, self.config.tap_slop_px) {
                    Gesture::Tap { x, y }
                } else {
                    Gesture::None
                }
            }
            (Phase::Dragging, PointerEvent::Up { .. } | PointerEvent::Cancel) => {
                self.phase = Phase::Idle;
                Gesture::DragEnd
            }
            (Phase::Pressed { .. }, PointerEvent::Cancel) => {
                self.phase = Phase::Idle;
                Gesture::None
            }
            // moves while dragging, stray ups/moves while idle, second downs
            _ => Gesture::None,
        }
    }

    /// Drop any gesture in progress without reporting it.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

fn exceeds_slop(x0: f32, y0: f32, x1: f32, y1: f32, slop: f32) -> bool {
    let (dx, dy) = (x1 - x0, y1 - y0);
    dx * dx + dy * dy > slop * slop
}
