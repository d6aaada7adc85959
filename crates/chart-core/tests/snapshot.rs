// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a fully revealed chart with a selected point to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing.

mod common;

use portfolio_chart::{render_to_png_bytes, ChartEngine, Period, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let opts = RenderOptions { width: 360, height: 200, draw_labels: false, ..Default::default() };
    let mut chart = ChartEngine::new(Default::default(), opts.view_bounds());
    chart.set_series(Period::OneYear, common::arc_series(&[100.0, 120.0, 90.0, 150.0, 135.0, 160.0]));
    chart.tick(1_000.0);
    chart.select_at(opts.view_bounds().width * 0.4);
    render_to_png_bytes(&chart.frame(), &opts).expect("render")
}

#[test]
fn golden_selected_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("selected_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
