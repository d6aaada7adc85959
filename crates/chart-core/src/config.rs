// File: crates/chart-core/src/config.rs
// Summary: Tunables for the chart engine, loadable from TOML.
//
// ```toml
// value_padding = 0.05
// grid_lines = 5
// default_period = "1Y"
//
// [animation]
// duration_ms = 800
// easing = "cubic-in-out"
//
// [gesture]
// tap_slop_px = 10.0
// tap_timeout_ms = 300
// ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::animation::{Easing, DEFAULT_DURATION_MS};
use crate::curve::DEFAULT_SMOOTHING;
use crate::error::ChartError;
use crate::gesture::GestureConfig;
use crate::normalize::DEFAULT_VALUE_PADDING;
use crate::period::Period;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_DURATION_MS, easing: Easing::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Fraction of the min/max value added below/above the line.
    pub value_padding: f64,
    /// Control-point offset as a fraction of the x step between samples.
    pub curve_smoothing: f32,
    /// Number of horizontal grid lines, including top and bottom edges.
    pub grid_lines: usize,
    pub default_period: Period,
    pub animation: AnimationConfig,
    pub gesture: GestureConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            value_padding: DEFAULT_VALUE_PADDING,
            curve_smoothing: DEFAULT_SMOOTHING,
            grid_lines: 5,
            default_period: Period::default(),
            animation: AnimationConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: ChartConfig = toml::from_str(s).map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string(self).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let bad = |msg: &str| Err(ChartError::InvalidConfig(msg.to_string()));
        if !(0.0..1.0).contains(&self.value_padding) {
            return bad("value_padding must be in [0, 1)");
        }
        if !(0.0..=0.5).contains(&self.curve_smoothing) {
            return bad("curve_smoothing must be in [0, 0.5]");
        }
        if self.grid_lines == 0 {
            return bad("grid_lines must be at least 1");
        }
        if !(self.animation.duration_ms > 0.0) {
            return bad("animation.duration_ms must be positive");
        }
        if !(self.gesture.tap_slop_px >= 0.0) || !(self.gesture.tap_timeout_ms > 0.0) {
            return bad("gesture thresholds must be non-negative with a positive timeout");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ChartConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = ChartConfig::from_toml_str("grid_lines = 3\n[animation]\neasing = \"linear\"\n").unwrap();
        assert_eq!(cfg.grid_lines, 3);
        assert_eq!(cfg.animation.easing, Easing::Linear);
        assert_eq!(cfg.animation.duration_ms, 800.0);
        assert_eq!(cfg.default_period, Period::OneYear);
    }

    #[test]
    fn period_uses_label() {
        let cfg = ChartConfig::from_toml_str("default_period = \"3M\"").unwrap();
        assert_eq!(cfg.default_period, Period::ThreeMonths);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ChartConfig::from_toml_str("value_padding = -0.1").is_err());
        assert!(ChartConfig::from_toml_str("grid_lines = 0").is_err());
        assert!(ChartConfig::from_toml_str("[animation]\nduration_ms = 0").is_err());
        assert!(ChartConfig::from_toml_str("default_period = \"2W\"").is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let text = ChartConfig::default().to_toml_string().unwrap();
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), ChartConfig::default());
    }
}
