//! Flat function surface for the drawing/export layer.
//!
//! The UI calls these by name; they are thin re-exports of `geom` and `trace`
//! so callers do not depend on the module layout.

pub use crate::geom::{
    adjust_angle, calculate_length, determine_orientation, drawing_direction, find_nearest_point,
    is_point_in_polygon, line_type, normalize_angle, polygon_area_from_lines, round_angle,
};
pub use crate::sample::{
    closed, draw_star_zone, ReplayToken as ZoneReplay, StarZoneCfg, VertexCount,
};
pub use crate::trace::{
    facade_name, segments_from_trace, zone_area, Calibration, CompassSector, FacadeRow,
    HorizonSectors, ZoneId, ZoneSet,
};
