use crate::foundation::core::{BezPath, Point};

/// Cardinal-spline tension used by [`smooth_closed_path`].
pub const SPLINE_TENSION: f64 = 0.55;

/// Point counts below this build a straight-edged polygon instead of a spline.
pub const MIN_SPLINE_POINTS: usize = 6;

/// Build a smooth closed curve through `points`, treated as one periodic loop.
///
/// Each segment `p1 -> p2` is a cubic whose control points are offset from the endpoints by
/// `SPLINE_TENSION / 6` of the chord between the neighbors on either side (`p0..p2` and
/// `p1..p3`). Fewer than [`MIN_SPLINE_POINTS`] points produce a closed polygon.
pub fn smooth_closed_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n == 0 {
        return path;
    }

    path.move_to(points[0]);
    if n < MIN_SPLINE_POINTS {
        for &p in &points[1..] {
            path.line_to(p);
        }
        path.close_path();
        return path;
    }

    let k = SPLINE_TENSION / 6.0;
    let at = |i: usize| points[i % n];
    for i in 0..n {
        let p0 = at(i + n - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);
        let c1 = p1 + (p2 - p0) * k;
        let c2 = p2 - (p3 - p1) * k;
        path.curve_to(c1, c2, p2);
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
