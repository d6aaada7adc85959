// File: crates/demo/src/main.rs
// Summary: Scripted chart session: initial load, a superseded period switch, reveal frames,
// a tap and a drag. Frames are written to target/out/.
// Notes:
// - `demo [history.csv] [chart.toml]`. The CSV needs `date,value` columns and may carry
//   `invested`; without one a synthetic history is generated per period.
// - Set RUST_LOG=debug to see the engine's request/stale/reveal logging.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use futures::executor::block_on;
use futures::future::{self, BoxFuture, FutureExt};
use log::info;
use portfolio_chart::{
    render_to_png, ChartConfig, ChartEngine, FetchError, HistorySource, Period, PointerEvent, RenderOptions, Sample,
    Series,
};
use std::path::{Path, PathBuf};

const CLIENT_ID: &str = "demo-client";
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let source: Box<dyn HistorySource> = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            let samples = load_history_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!("loaded {} samples from {}", samples.len(), path.display());
            Box::new(CsvSource { samples })
        }
        None => {
            info!("no CSV given; using synthetic history");
            Box::new(SyntheticSource)
        }
    };
    let config = match args.next() {
        Some(path) => ChartConfig::load(&path)?,
        None => ChartConfig::default(),
    };

    let opts = RenderOptions { draw_labels: true, ..Default::default() };
    let mut chart = ChartEngine::new(config, opts.view_bounds());
    chart.on_point_selected(|p| match p {
        Some(p) => info!(
            "selected #{} {} value {:.2} change {:?} return {:?}",
            p.index, p.sample.timestamp, p.sample.value, p.change, p.return_percent
        ),
        None => info!("selection cleared"),
    });
    chart.on_period_changed(|p| info!("period -> {p}"));
    chart.on_fetch_error(|e, p| log::warn!("loading {p} failed: {e}"));

    let out_dir = PathBuf::from("target/out");

    // initial load
    let pending = chart.reload(source.as_ref(), CLIENT_ID);
    let (token, result) = block_on(pending.wait());
    chart.apply_fetch(token, result);
    write_reveal(&mut chart, &opts, &out_dir, "initial")?;

    // 1M is superseded by 3M before it answers
    let one_month = chart.request_period(source.as_ref(), CLIENT_ID, Period::OneMonth);
    let three_months = chart.request_period(source.as_ref(), CLIENT_ID, Period::ThreeMonths);
    if let Some(pending) = three_months {
        let (token, result) = block_on(pending.wait());
        info!("3M resolved: {:?}", kind(&chart.apply_fetch(token, result)));
    }
    if let Some(pending) = one_month {
        let (token, result) = block_on(pending.wait());
        info!("late 1M resolved: {:?}", kind(&chart.apply_fetch(token, result)));
    }
    write_reveal(&mut chart, &opts, &out_dir, "3m")?;

    // tap at 60% of the plot width
    let bounds = chart.bounds();
    let (x, y) = (bounds.width * 0.6, bounds.height * 0.5);
    chart.handle_pointer(PointerEvent::Down { x, y, time_ms: 0.0 });
    chart.handle_pointer(PointerEvent::Up { x, y, time_ms: 90.0 });
    write_frame(&chart, &opts, &out_dir.join("chart_tap.png"))?;

    // a horizontal drag ends by clearing the selection
    chart.handle_pointer(PointerEvent::Down { x: 20.0, y, time_ms: 1000.0 });
    for (i, dx) in [30.0_f32, 90.0, 180.0].into_iter().enumerate() {
        chart.handle_pointer(PointerEvent::Move { x: 20.0 + dx, y, time_ms: 1000.0 + (i as f64 + 1.0) * FRAME_MS });
    }
    chart.handle_pointer(PointerEvent::Up { x: 200.0, y, time_ms: 1100.0 });
    write_frame(&chart, &opts, &out_dir.join("chart_after_drag.png"))?;

    // switch to ALL and render in the light style
    if let Some(pending) = chart.request_period(source.as_ref(), CLIENT_ID, Period::All) {
        let (token, result) = block_on(pending.wait());
        chart.apply_fetch(token, result);
    }
    let light = RenderOptions { style: portfolio_chart::ChartStyle::light(), ..opts };
    write_reveal(&mut chart, &light, &out_dir, "all_light")?;

    Ok(())
}

fn kind(r: &portfolio_chart::Resolution) -> &'static str {
    match r {
        portfolio_chart::Resolution::Applied { .. } => "applied",
        portfolio_chart::Resolution::Failed { .. } => "failed",
        portfolio_chart::Resolution::Stale => "stale",
    }
}

/// Tick through the reveal, writing the halfway and final frames.
fn write_reveal(chart: &mut ChartEngine, opts: &RenderOptions, dir: &Path, name: &str) -> Result<()> {
    let mut wrote_mid = false;
    while chart.needs_frame() {
        let p = chart.tick(FRAME_MS);
        if !wrote_mid && p >= 0.5 {
            write_frame(chart, opts, &dir.join(format!("chart_{name}_mid.png")))?;
            wrote_mid = true;
        }
    }
    write_frame(chart, opts, &dir.join(format!("chart_{name}.png")))
}

fn write_frame(chart: &ChartEngine, opts: &RenderOptions, path: &Path) -> Result<()> {
    render_to_png(&chart.frame(), opts, path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Serves windows of a history loaded from CSV.
struct CsvSource {
    samples: Vec<Sample>,
}

impl HistorySource for CsvSource {
    fn fetch_history(&self, _client_id: &str, period: Period) -> BoxFuture<'static, Result<Series, FetchError>> {
        let window: Vec<Sample> = match (period, self.samples.last()) {
            (Period::All, _) | (_, None) => self.samples.clone(),
            (_, Some(last)) => {
                let from = last.timestamp - Days::new(period.days() as u64);
                self.samples.iter().filter(|s| s.timestamp >= from).copied().collect()
            }
        };
        future::ready(Series::try_new(window).map_err(FetchError::from)).boxed()
    }
}

/// Deterministic wavy growth curve, one series per period.
struct SyntheticSource;

impl SyntheticSource {
    fn points(period: Period) -> usize {
        match period {
            Period::OneMonth => 30,
            Period::ThreeMonths => 45,
            Period::SixMonths => 60,
            Period::OneYear => 52,
            Period::ThreeYears => 72,
            Period::FiveYears => 60,
            Period::All => 80,
        }
    }
}

impl HistorySource for SyntheticSource {
    fn fetch_history(&self, _client_id: &str, period: Period) -> BoxFuture<'static, Result<Series, FetchError>> {
        let n = Self::points(period);
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default();
        let step = (period.days() as u64 / n as u64).max(1);
        let start = end - Days::new(step * (n as u64 - 1));
        let invested = 10_000.0;
        let samples = (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let value = invested * (1.0 + 0.18 * t) + 450.0 * (t * 11.0).sin() + 180.0 * (t * 29.0).cos();
                Sample::new(start + Days::new(step * i as u64), value).with_invested(invested)
            })
            .collect();
        future::ready(Series::try_new(samples).map_err(FetchError::from)).boxed()
    }
}

/// Load `date,value[,invested]` rows. Dates are `YYYY-MM-DD`; unparseable rows are skipped.
fn load_history_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "timestamp", "time"]).context("missing date column")?;
    let i_value = idx(&["value", "balance", "close"]).context("missing value column")?;
    let i_invested = idx(&["invested", "contributions"]);

    let mut out: Vec<Sample> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        let (Some(date), Some(value)) = (date, value) else {
            log::debug!("skipping row {:?}", rec.position().map(|p| p.line()));
            continue;
        };
        let mut sample = Sample::new(date, value);
        if let Some(inv) = i_invested.and_then(|i| rec.get(i)).and_then(|s| s.parse::<f64>().ok()) {
            sample = sample.with_invested(inv);
        }
        out.push(sample);
    }
    out.sort_by_key(|s| s.timestamp);
    out.dedup_by_key(|s| s.timestamp);
    if out.len() < 2 {
        anyhow::bail!("need at least two dated rows, found {}", out.len());
    }
    Ok(out)
}
