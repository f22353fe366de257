//! Pixel-to-meter scale.

use std::fmt;

use crate::geom::{calculate_length, Point, TraceCfg};

/// Errors raised while establishing a scale.
#[derive(Clone, Debug, PartialEq)]
pub enum CalibrationError {
    /// Scale must be finite and strictly positive.
    NonPositiveScale { value: f64 },
    /// Reference line shorter than the configured minimum.
    ReferenceTooShort { pixels: f64, min: f64 },
    /// Known real-world length must be finite and strictly positive.
    InvalidKnownLength { meters: f64 },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { value } => {
                write!(f, "meters per pixel must be finite and > 0 (got {value})")
            }
            Self::ReferenceTooShort { pixels, min } => write!(
                f,
                "reference line is {pixels:.1} px long; at least {min:.1} px required"
            ),
            Self::InvalidKnownLength { meters } => {
                write!(f, "known length must be finite and > 0 (got {meters} m)")
            }
        }
    }
}

impl std::error::Error for CalibrationError {}

/// Meters per pixel for one drawing session. Always finite and > 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    meters_per_pixel: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            meters_per_pixel: Self::DEFAULT_METERS_PER_PIXEL,
        }
    }
}

impl Calibration {
    /// Scale assumed before the user calibrates.
    pub const DEFAULT_METERS_PER_PIXEL: f64 = 0.15;

    pub fn new(meters_per_pixel: f64) -> Result<Self, CalibrationError> {
        if !meters_per_pixel.is_finite() || meters_per_pixel <= 0.0 {
            return Err(CalibrationError::NonPositiveScale {
                value: meters_per_pixel,
            });
        }
        Ok(Self { meters_per_pixel })
    }

    /// Scale from a reference line `a → b` whose real length is `known_meters`.
    pub fn from_reference(
        a: &Point,
        b: &Point,
        known_meters: f64,
        cfg: &TraceCfg,
    ) -> Result<Self, CalibrationError> {
        if !known_meters.is_finite() || known_meters <= 0.0 {
            return Err(CalibrationError::InvalidKnownLength {
                meters: known_meters,
            });
        }
        let pixels = calculate_length(a, b, 1.0);
        if pixels < cfg.min_calibration_length {
            tracing::warn!(pixels, min = cfg.min_calibration_length, "calibration line too short");
            return Err(CalibrationError::ReferenceTooShort {
                pixels,
                min: cfg.min_calibration_length,
            });
        }
        let cal = Self::new(known_meters / pixels)?;
        tracing::info!(
            mm_per_px = cal.millimeters_per_pixel(),
            pixels,
            known_meters,
            "calibrated"
        );
        Ok(cal)
    }

    #[inline]
    pub fn meters_per_pixel(&self) -> f64 {
        self.meters_per_pixel
    }

    #[inline]
    pub fn millimeters_per_pixel(&self) -> f64 {
        self.meters_per_pixel * 1000.0
    }

    /// Factor lengths scale by when switching to `new` (areas scale by its square).
    #[inline]
    pub fn rescale_ratio(&self, new: &Calibration) -> f64 {
        new.meters_per_pixel / self.meters_per_pixel
    }

    /// Real-world length (m) of the pixel segment `a → b`.
    #[inline]
    pub fn length(&self, a: &Point, b: &Point) -> f64 {
        calculate_length(a, b, self.meters_per_pixel)
    }

    /// Real-world area (m²) of a pixel area.
    #[inline]
    pub fn area(&self, pixel_area: f64) -> f64 {
        pixel_area * self.meters_per_pixel * self.meters_per_pixel
    }
}
