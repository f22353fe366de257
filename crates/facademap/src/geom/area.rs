//! Lengths and zone areas.
//!
//! Area is recovered from an unordered bag of lines: deduplicate endpoints,
//! order them by angle around their centroid, then apply the shoelace formula.
//!
//! Limitations
//! - Deduplication is exact: endpoints that are meant to coincide must be
//!   bit-identical (snapping guarantees this for traced zones). Near-equal
//!   floats stay separate vertices.
//! - Angular ordering only reconstructs the boundary of zones that are
//!   star-shaped with respect to their vertex centroid. Other concave zones
//!   get a self-intersecting order and a wrong (but finite) area.

use std::collections::HashSet;

use super::types::{LineEnds, Point};

/// Euclidean distance between `p1` and `p2`, scaled by `meters_per_pixel`.
#[inline]
pub fn calculate_length(p1: &Point, p2: &Point, meters_per_pixel: f64) -> f64 {
    nalgebra::distance(p1, p2) * meters_per_pixel
}

// +0.0 and -0.0 are the same vertex.
#[inline]
fn coord_key(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Distinct endpoints of `lines`, in first-seen order.
pub fn unique_vertices(lines: &[LineEnds]) -> Vec<Point> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(lines.len() * 2);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        for p in [line.start(), line.end()] {
            if seen.insert((coord_key(p.x), coord_key(p.y))) {
                out.push(p);
            }
        }
    }
    out
}

/// Sort vertices by `atan2(y - cy, x - cx)` around their centroid (ascending, stable).
pub fn order_around_centroid(mut vertices: Vec<Point>) -> Vec<Point> {
    if vertices.is_empty() {
        return vertices;
    }
    let sum = vertices
        .iter()
        .fold(nalgebra::Vector2::<f64>::zeros(), |acc, p| acc + p.coords);
    let c = Point::from(sum / vertices.len() as f64);
    vertices.sort_by(|a, b| {
        let aa = (a.y - c.y).atan2(a.x - c.x);
        let bb = (b.y - c.y).atan2(b.x - c.x);
        aa.total_cmp(&bb)
    });
    vertices
}

/// Unsigned shoelace area of an ordered, implicitly closed vertex loop.
pub fn shoelace_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y
        })
        .sum();
    (twice / 2.0).abs()
}

/// Area (px²) of the polygon whose edges are `lines`, in any order.
pub fn polygon_area_from_lines(lines: &[LineEnds]) -> f64 {
    let ordered = order_around_centroid(unique_vertices(lines));
    shoelace_area(&ordered)
}
