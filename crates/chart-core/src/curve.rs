// File: crates/chart-core/src/curve.rs
// Summary: Smoothed line and area paths through normalized points.
// Notes:
// - Each segment is a cubic whose control points sit at the endpoints' heights,
//   offset horizontally by `smoothing * step`. The curve therefore passes through
//   every sample and never overshoots vertically between two of them.
// - Paths are plain command lists; `render` turns them into Skia paths.

use crate::geometry::NormalizedPoint;

/// Horizontal control-point offset as a fraction of the segment width.
pub const DEFAULT_SMOOTHING: f32 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(NormalizedPoint),
    LineTo(NormalizedPoint),
    CubicTo { c1: NormalizedPoint, c2: NormalizedPoint, to: NormalizedPoint },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath {
    pub commands: Vec<PathCommand>,
}

impl CurvePath {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: NormalizedPoint) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: NormalizedPoint) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: NormalizedPoint, c2: NormalizedPoint, to: NormalizedPoint) {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
    }
    pub fn close(&mut self) { self.commands.push(PathCommand::Close); }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Every on-curve point (segment end) in order; control points are skipped.
    pub fn anchors(&self) -> impl Iterator<Item = NormalizedPoint> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    /// Evaluate the cubic segment ending at anchor `segment` (1-based) at `t`.
    pub fn point_on_segment(&self, segment: usize, t: f32) -> Option<NormalizedPoint> {
        let mut prev: Option<NormalizedPoint> = None;
        let mut seen = 0usize;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => prev = Some(p),
                PathCommand::CubicTo { c1, c2, to } => {
                    seen += 1;
                    if seen == segment {
                        return prev.map(|p0| cubic_point(p0, c1, c2, to, t));
                    }
                    prev = Some(to);
                }
                PathCommand::Close => {}
            }
        }
        None
    }
}

fn cubic_point(p0: NormalizedPoint, c1: NormalizedPoint, c2: NormalizedPoint, p1: NormalizedPoint, t: f32) -> NormalizedPoint {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    NormalizedPoint::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

/// Line through the points plus the area between it and `baseline`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePaths {
    pub stroke: CurvePath,
    pub fill: CurvePath,
}

/// Build stroke and fill with the default smoothing.
pub fn build_path(points: &[NormalizedPoint], baseline: f32) -> CurvePaths {
    build_path_with(points, baseline, DEFAULT_SMOOTHING)
}

pub fn build_path_with(points: &[NormalizedPoint], baseline: f32, smoothing: f32) -> CurvePaths {
    let mut stroke = CurvePath::new();
    let mut fill = CurvePath::new();
    let (first, last) = match (points.first(), points.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return CurvePaths { stroke, fill },
    };

    stroke.move_to(first);
    fill.move_to(NormalizedPoint::new(first.x, baseline));
    fill.line_to(first);

    for pair in points.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let step = cur.x - prev.x;
        let c1 = NormalizedPoint::new(prev.x + step * smoothing, prev.y);
        let c2 = NormalizedPoint::new(cur.x - step * smoothing, cur.y);
        stroke.cubic_to(c1, c2, cur);
        fill.cubic_to(c1, c2, cur);
    }

    fill.line_to(NormalizedPoint::new(last.x, baseline));
    fill.close();
    CurvePaths { stroke, fill }
}

/// Scale each point's distance from `baseline` by `progress` (0 = flat on the baseline).
pub fn reveal(points: &[NormalizedPoint], progress: f32, baseline: f32) -> Vec<NormalizedPoint> {
    let t = progress.clamp(0.0, 1.0);
    points.iter().map(|p| p.scaled_from_baseline(baseline, t)).collect()
}
