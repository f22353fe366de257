//! Pixel-space 2D geometry for traced zones.
//!
//! Purpose
//! - Classify drawn segments, infer the compass bearing of the wall they
//!   represent, and compute lengths and zone areas.
//! - Every function is pure and synchronous; tolerances arrive through
//!   `TraceCfg` or explicit arguments, never through globals.
//!
//! Conventions
//! - y grows downward, so a negative shoelace sum is a clockwise trace on screen.
//! - Bearings are degrees in `[0, 360)`: 0 North, 90 East, 180 South, 270 West.
//! - Degenerate input degrades to NaN (angles) or `false`/`None`, not panics.

mod angle;
mod area;
mod orientation;
mod polygon;
mod snap;
mod types;

pub use angle::{adjust_angle, normalize_angle, round_angle};
pub use area::{
    calculate_length, order_around_centroid, polygon_area_from_lines, shoelace_area,
    unique_vertices,
};
pub use orientation::{determine_orientation, line_type, midpoint};
pub use polygon::{drawing_direction, is_left, is_point_in_polygon, signed_shoelace_sum};
pub use snap::find_nearest_point;
pub use types::{LineEnds, LineType, Point, Segment, TraceCfg, Winding};
