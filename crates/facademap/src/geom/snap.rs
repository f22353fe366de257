use super::types::Point;

/// First candidate within `snap_distance` (inclusive) of `position`, if any.
///
/// First match, not closest match: the order of `candidates` breaks ties.
pub fn find_nearest_point(
    position: &Point,
    candidates: &[Point],
    snap_distance: f64,
) -> Option<Point> {
    candidates
        .iter()
        .find(|p| nalgebra::distance(position, *p) <= snap_distance)
        .copied()
}
