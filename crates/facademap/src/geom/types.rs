//! Basic value types and the tolerance/config bundle.
//!
//! - `TraceCfg`: the knobs the drawing layer used to keep as constants.
//! - `Segment`: one facade edge with its calibrated length and bearing.
//! - `LineEnds`: a bare endpoint record used by area computation.

use nalgebra::Point2;

/// Pixel-space coordinate (y down).
pub type Point = Point2<f64>;

/// Tracing configuration (tolerances and rounding).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceCfg {
    /// Ratio between |dx| and |dy| above which a line counts as axis-aligned.
    pub orientation_tolerance: f64,
    /// Offset (px) of the probe point used for axis-aligned orientation.
    pub test_point_offset: f64,
    /// Radius (px) within which the cursor snaps to an existing point.
    pub snap_distance: f64,
    /// Bearing rounding quantum in degrees; 0 disables rounding.
    pub round_angle_to: f64,
    /// Decimals kept on calibrated segment lengths.
    pub length_decimals: u32,
    /// Shortest admissible calibration reference line (px).
    pub min_calibration_length: f64,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            orientation_tolerance: 35.0,
            test_point_offset: 1.0,
            snap_distance: 5.0,
            round_angle_to: 90.0,
            length_decimals: 1,
            min_calibration_length: 5.0,
        }
    }
}

/// Line classification used by orientation inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineType {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Traversal direction of a closed point sequence, as seen on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Offset (degrees) that turns the left-hand perpendicular into the outward one.
    #[inline]
    pub fn outward_offset(self) -> f64 {
        match self {
            Winding::Clockwise => 90.0,
            Winding::CounterClockwise => -90.0,
        }
    }
}

/// A directed facade edge: pixel endpoints, calibrated length (m), bearing (deg).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length: f64,
    pub angle: f64,
}

impl Segment {
    /// True if `other` joins the same two endpoints, in either direction (exact match).
    pub fn same_edge(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    #[inline]
    pub fn ends(&self) -> LineEnds {
        LineEnds::new(self.start, self.end)
    }
}

/// Raw endpoints of a line, in the field layout the area routine consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEnds {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl LineEnds {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        }
    }
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }
}
