//! From clicked points to calibrated facades and zones.
//!
//! Purpose
//! - Turn a traced point list into `Segment`s (calibrated length + bearing).
//! - Keep a multi-zone session: shared walls between zones, facade numbering,
//!   horizon metadata and recalibration.
//!
//! Cross-refs: `geom::{determine_orientation, calculate_length, polygon_area_from_lines}`.

mod calibration;
mod compass;
mod segments;
mod zone;

pub use calibration::{Calibration, CalibrationError};
pub use compass::{facade_name, CompassSector, HorizonParseError, HorizonSectors};
pub use segments::{round_length, segments_from_trace, zone_area};
pub use zone::{
    Connection, Facade, FacadeRow, Zone, ZoneError, ZoneId, ZoneSet, DEFAULT_ROOF_HEIGHT,
};

#[cfg(test)]
mod tests;
