// File: crates/chart-core/tests/labels.rs
// Purpose: Axis labels carried on chart frames track the series, period and bounds.

mod common;

use std::sync::Arc;

use portfolio_chart::labels::MAX_DATE_LABELS;
use portfolio_chart::{ChartEngine, Period, ViewBounds};

fn texts(chart: &ChartEngine) -> Vec<String> {
    chart.frame().as_chart().expect("chart frame").x_labels.iter().map(|l| l.text.clone()).collect()
}

#[test]
fn labels_follow_period_for_the_same_data() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(290.0, 180.0));
    let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = common::arc_series(&data);

    chart.set_series(Period::OneMonth, Arc::clone(&series));
    let month = texts(&chart);
    assert_eq!(month.len(), MAX_DATE_LABELS);
    assert_eq!(month.first().map(String::as_str), Some("01 Jan"));
    assert_eq!(month.last().map(String::as_str), Some("30 Jan"));

    // same Arc, longer window: month-year format
    chart.set_series(Period::OneYear, series);
    assert_eq!(texts(&chart), vec!["Jan 25".to_string()]);
}

#[test]
fn labels_move_with_resize() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(290.0, 180.0));
    let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    chart.set_series(Period::OneMonth, common::arc_series(&data));
    let last_at = |c: &ChartEngine| c.frame().as_chart().unwrap().x_labels.last().unwrap().at;
    assert_eq!(last_at(&chart), 290.0);

    chart.resize(ViewBounds::new(580.0, 360.0));
    assert_eq!(last_at(&chart), 580.0);
    let frame = chart.frame();
    let y = &frame.as_chart().unwrap().y_labels;
    assert_eq!(y.len(), 2);
    assert_eq!(y[1].at, 360.0);
}

#[test]
fn flat_series_has_no_value_labels() {
    let mut chart = ChartEngine::new(Default::default(), ViewBounds::new(300.0, 180.0));
    chart.set_series(Period::OneMonth, common::arc_series(&[5.0, 5.0, 5.0]));
    let frame = chart.frame();
    let chart_frame = frame.as_chart().unwrap();
    assert!(chart_frame.flat);
    assert!(chart_frame.y_labels.is_empty());
    assert_eq!(chart_frame.x_labels.len(), 3);
}
