//! Polygon predicates: containment (winding number) and traversal direction.
//!
//! Polygons are plain point slices treated as closed loops (last → first).

use super::types::{Point, Winding};

/// Cross-product test: > 0 if `p` lies left of the directed line `a → b`
/// (in y-up terms), < 0 if right, 0 if collinear.
#[inline]
pub fn is_left(a: &Point, b: &Point, p: &Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Nonzero winding-number containment test.
///
/// Edges starting at or below the probe's y and ending above it count +1 when
/// the probe is left of them; edges going the other way count −1 when it is
/// right of them. Points exactly on an edge follow whatever these half-open
/// rules produce; no special case exists for them. Self-intersecting loops are
/// handled like any winding-number test (nonzero = inside).
pub fn is_point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    let mut winding: i32 = 0;
    for i in 0..n {
        let p1 = &polygon[i];
        let p2 = &polygon[(i + 1) % n];
        if p1.y <= point.y {
            if p2.y > point.y && is_left(p1, p2, point) > 0.0 {
                winding += 1;
            }
        } else if p2.y <= point.y && is_left(p1, p2, point) < 0.0 {
            winding -= 1;
        }
    }
    winding != 0
}

/// Trapezoid form of the shoelace sum, `Σ (x_{i+1} − x_i)(y_{i+1} + y_i)`.
///
/// Equals twice the signed area with the sign flipped relative to the usual
/// cross-product form; negative means clockwise on a y-down screen.
pub fn signed_shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let cur = &points[i];
            let next = &points[(i + 1) % n];
            (next.x - cur.x) * (next.y + cur.y)
        })
        .sum()
}

/// Direction in which the user traced `points`.
///
/// A zero sum (empty, collinear or degenerate input) reports counterclockwise.
pub fn drawing_direction(points: &[Point]) -> Winding {
    if signed_shoelace_sum(points) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}
