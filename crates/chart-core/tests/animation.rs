// File: crates/chart-core/tests/animation.rs
// Purpose: Reveal progress is monotonic within a run and restarts only when the series changes.

mod common;

use std::sync::Arc;

use portfolio_chart::{progress_at, ChartEngine, Easing, Period, ViewBounds};

#[test]
fn progress_is_monotonic_and_bounded() {
    for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut, Easing::CubicInOut] {
        let mut last = progress_at(0.0, 800.0, easing);
        assert_eq!(last, 0.0);
        for step in 1..=100 {
            let p = progress_at(step as f64 * 8.0, 800.0, easing);
            assert!(p >= last, "{easing:?} went backwards at step {step}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(last, 1.0);
    }
}

#[test]
fn engine_restarts_on_new_series_only() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(300.0, 180.0));
    let first = common::arc_series(&[1.0, 4.0, 2.0]);
    chart.set_series(Period::OneYear, Arc::clone(&first));
    assert_eq!(chart.progress(), 0.0);

    let mut prev = 0.0;
    for _ in 0..20 {
        let p = chart.tick(16.0);
        assert!(p >= prev);
        prev = p;
    }
    assert!(prev > 0.0);

    // same Arc: nothing to restart
    chart.set_series(Period::OneYear, Arc::clone(&first));
    assert_eq!(chart.progress(), prev);

    // selection and resize do not touch the clock either
    chart.select_at(150.0);
    chart.resize(ViewBounds::new(400.0, 200.0));
    assert_eq!(chart.progress(), prev);

    // equal contents in a fresh Arc still count as new data
    chart.set_series(Period::OneYear, common::arc_series(&[1.0, 4.0, 2.0]));
    assert_eq!(chart.progress(), 0.0);
    assert_eq!(chart.selected_index(), None);
}

#[test]
fn completes_after_duration_and_stops_requesting_frames() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(300.0, 180.0));
    chart.set_series(Period::OneYear, common::arc_series(&[1.0, 2.0]));
    assert!(chart.needs_frame());
    for _ in 0..60 {
        chart.tick(16.0);
    }
    assert_eq!(chart.progress(), 1.0);
    assert!(!chart.needs_frame());
}

#[test]
fn hidden_chart_does_not_advance() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(300.0, 180.0));
    chart.set_series(Period::OneYear, common::arc_series(&[1.0, 2.0]));
    chart.tick(100.0);
    let p = chart.progress();

    chart.set_visible(false);
    assert!(!chart.needs_frame());
    chart.tick(500.0);
    assert_eq!(chart.progress(), p);

    chart.set_visible(true);
    assert!(chart.tick(16.0) > p);
}
