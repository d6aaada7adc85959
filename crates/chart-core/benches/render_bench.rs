use anyhow::Result;
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_chart::{render_to_png_bytes, ChartEngine, Period, RenderOptions, Series};
use std::sync::Arc;

fn build_series(n: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    Series::from_pairs((0..n).map(|i| {
        let v = 10_000.0 + (i as f64 * 0.05).sin() * 800.0 + i as f64 * 2.5;
        (start + Days::new(i as u64), v)
    }))
    .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[52usize, 365, 1_825] {
        group.bench_function(format!("daily_{n}"), |b| {
            let opts = RenderOptions { width: 800, height: 400, draw_labels: false, ..Default::default() };
            let mut chart = ChartEngine::new(Default::default(), opts.view_bounds());
            chart.set_series(Period::All, Arc::new(build_series(n)));
            chart.tick(10_000.0);
            chart.select_at(opts.view_bounds().width * 0.5);
            b.iter(|| -> Result<()> {
                let bytes = render_to_png_bytes(&chart.frame(), &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
