use crate::geom::{
    determine_orientation, polygon_area_from_lines, LineEnds, Point, Segment, TraceCfg,
};

use super::calibration::Calibration;
use super::zone::ZoneError;

/// Round a length to `decimals` places (half away from zero).
#[inline]
pub fn round_length(length: f64, decimals: u32) -> f64 {
    let k = 10f64.powi(decimals as i32);
    (length * k).round() / k
}

/// Build facade segments from consecutive clicked points.
///
/// The full point list serves as the zone polygon for orientation. Segments
/// whose rounded length is not positive are dropped, so no zero-length
/// segment ever reaches orientation inference.
pub fn segments_from_trace(
    points: &[Point],
    calibration: &Calibration,
    cfg: &TraceCfg,
) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    points
        .windows(2)
        .filter_map(|w| {
            let (start, end) = (w[0], w[1]);
            let length = round_length(calibration.length(&start, &end), cfg.length_decimals);
            if length.is_nan() || length <= 0.0 {
                tracing::debug!(x = start.x, y = start.y, "dropping zero-length segment");
                return None;
            }
            let angle = determine_orientation(&start, &end, points, cfg);
            Some(Segment {
                start,
                end,
                length,
                angle,
            })
        })
        .collect()
}

/// Calibrated area (m²) of the zone bounded by `segments`.
///
/// Line `i` runs from the start of segment `i` to the start of segment
/// `i + 1` (wrapping), which closes an open trace.
pub fn zone_area(segments: &[Segment], calibration: &Calibration) -> Result<f64, ZoneError> {
    if segments.len() < 3 {
        return Err(ZoneError::TooFewSegments {
            count: segments.len(),
        });
    }
    let n = segments.len();
    let lines: Vec<LineEnds> = (0..n)
        .map(|i| LineEnds::new(segments[i].start, segments[(i + 1) % n].start))
        .collect();
    Ok(calibration.area(polygon_area_from_lines(&lines)))
}
