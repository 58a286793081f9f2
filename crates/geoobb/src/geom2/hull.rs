use nalgebra::Vector2;
use std::cmp::Ordering;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    parallelogram_area(b - a, c - a)
}

/// Lexicographic (x, then y) order; NaN compares equal.
#[inline]
pub(crate) fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Andrew's monotone chain convex hull, CCW, ring not closed.
///
/// Collinear points are dropped; fewer than two distinct inputs give the
/// deduplicated input back.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Shoelace signed area of a ring (closed or not). CCW is positive.
pub fn ring_area(ring: &[Vector2<f64>]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|k| parallelogram_area(ring[k], ring[(k + 1) % n]))
        .sum();
    0.5 * twice
}
