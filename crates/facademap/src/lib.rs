//! Geometry and orientation engine for traced floor plans.
//!
//! A zone is traced as a sequence of clicked pixel points. This crate turns
//! those points into facade segments with a real-world length and an inferred
//! compass bearing, computes zone areas, and keeps multi-zone bookkeeping
//! (shared walls, numbering, recalibration).
//!
//! Layout
//! - `geom`: pure functions over points, segments and polygons (angles, line
//!   classification, point-in-polygon, winding, orientation, length, area, snapping).
//! - `trace`: calibration, segments from clicked points, zones and facades.
//! - `sample`: reproducible star-shaped zones for tests and benchmarks.
//! - `api`: flat re-exports for the drawing/export layer.
//!
//! Coordinates are pixel space with y pointing down (screen convention).
//! North is up: 0° North, 90° East, 180° South, 270° West.

pub mod api;
pub mod geom;
pub mod sample;
pub mod trace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{LineEnds, LineType, Point, Segment, TraceCfg, Winding};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        calculate_length, determine_orientation, drawing_direction, find_nearest_point,
        is_point_in_polygon, line_type, normalize_angle, polygon_area_from_lines, round_angle,
        LineEnds, LineType, Point, Segment, TraceCfg, Winding,
    };
    pub use crate::trace::{
        segments_from_trace, zone_area, Calibration, CompassSector, HorizonSectors, ZoneId,
        ZoneSet,
    };
}
