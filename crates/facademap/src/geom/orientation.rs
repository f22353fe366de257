//! Bearing inference for traced facade segments.
//!
//! Model
//! - Axis-aligned segments probe a point just beside their midpoint: which side
//!   the zone interior lies on decides between the two opposite bearings.
//! - Diagonal segments use the unit perpendicular `(-dy, dx)/len`, flipped
//!   outward by the trace winding, and read off its `atan2` bearing.
//!
//! Zero-length segments have no perpendicular; the diagonal branch then
//! yields NaN. Callers drop such segments first (see `trace::segments_from_trace`).

use nalgebra::Vector2;

use super::angle::round_angle;
use super::polygon::{drawing_direction, is_point_in_polygon};
use super::types::{LineType, Point, TraceCfg};

/// Classify a segment by its deltas.
///
/// Strict inequalities: with `tolerance = 1` an exact 45° line (and a
/// zero-length one) is `Diagonal`.
#[inline]
pub fn line_type(dx: f64, dy: f64, tolerance: f64) -> LineType {
    if dx.abs() > dy.abs() * tolerance {
        LineType::Horizontal
    } else if dy.abs() > dx.abs() * tolerance {
        LineType::Vertical
    } else {
        LineType::Diagonal
    }
}

#[inline]
pub fn midpoint(a: &Point, b: &Point) -> Point {
    nalgebra::center(a, b)
}

/// Bearing (degrees, rounded to `cfg.round_angle_to`) the wall `start → end` faces.
///
/// `polygon` is the traced zone the segment belongs to.
pub fn determine_orientation(start: &Point, end: &Point, polygon: &[Point], cfg: &TraceCfg) -> f64 {
    let d = end - start;
    let mid = midpoint(start, end);
    let off = cfg.test_point_offset;

    let angle = match line_type(d.x, d.y, cfg.orientation_tolerance) {
        // Interior below the edge: the wall is the zone's north side.
        LineType::Horizontal => {
            let probe = Point::new(mid.x, mid.y + off);
            if is_point_in_polygon(&probe, polygon) {
                0.0
            } else {
                180.0
            }
        }
        // Interior to the right: the wall is the zone's west side.
        LineType::Vertical => {
            let probe = Point::new(mid.x + off, mid.y);
            if is_point_in_polygon(&probe, polygon) {
                270.0
            } else {
                90.0
            }
        }
        LineType::Diagonal => diagonal_bearing(d, polygon),
    };
    round_angle(angle, cfg.round_angle_to)
}

fn diagonal_bearing(d: Vector2<f64>, polygon: &[Point]) -> f64 {
    let length = d.norm();
    let perp = Vector2::new(-d.y / length, d.x / length);
    let winding = drawing_direction(polygon);
    tracing::debug!(?winding, dx = d.x, dy = d.y, "diagonal facade");

    let mut angle = perp.y.atan2(perp.x).to_degrees();
    angle = (angle + 360.0 - winding.outward_offset()) % 360.0;
    while angle < 0.0 {
        angle += 360.0;
    }
    while angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}
