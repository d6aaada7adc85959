// File: crates/chart-core/src/grid.rs
// Summary: Simple grid layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Y positions of `count` evenly spaced horizontal lines from bottom to top of `height`.
pub fn horizontal_lines(height: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![height],
        _ => linspace(height as f64, 0.0, count).into_iter().map(|y| y as f32).collect(),
    }
}
