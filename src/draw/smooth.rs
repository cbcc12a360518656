//! Stroke expansion: turns a styled line into the polyline that gets painted.

use super::line::DrawingLine;
use super::point::Point;

/// Expands a line into its drawable polyline.
///
/// Straight mode returns the points unchanged; segments are the consecutive
/// pairs. Smoothed mode interpolates `granularity` additional points between
/// each consecutive pair with a Catmull-Rom curve through the neighboring
/// points, so the painted path passes through every captured point.
/// Deterministic for identical input. Lines with fewer than two points come
/// back unchanged and expand to zero segments downstream.
pub fn expand_line(line: &DrawingLine) -> Vec<Point> {
    if line.enable_smoothed_path && line.points.len() >= 2 {
        smooth_points(&line.points, line.granularity)
    } else {
        line.points.clone()
    }
}

/// Interpolates the polyline with `granularity` inserted points per segment.
///
/// Neighbors are clamped at both ends, which keeps the first and last source
/// points on the curve.
fn smooth_points(points: &[Point], granularity: usize) -> Vec<Point> {
    let n = points.len();
    let mut out = Vec::with_capacity(n + (n - 1) * granularity);
    out.push(points[0]);

    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];

        for j in 1..=granularity {
            let t = j as f64 / (granularity + 1) as f64;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
        out.push(p2);
    }

    out
}

/// Evaluates the uniform Catmull-Rom segment between `p1` and `p2` at `t`.
fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    let x = 0.5
        * (2.0 * p1.x
            + (p2.x - p0.x) * t
            + (2.0 * p0.x - 5.0 * p1.x + 4.0 * p2.x - p3.x) * t2
            + (3.0 * p1.x - p0.x - 3.0 * p2.x + p3.x) * t3);
    let y = 0.5
        * (2.0 * p1.y
            + (p2.y - p0.y) * t
            + (2.0 * p0.y - 5.0 * p1.y + 4.0 * p2.y - p3.y) * t2
            + (3.0 * p1.y - p0.y - 3.0 * p2.y + p3.y) * t3);

    Point::new(x, y)
}
