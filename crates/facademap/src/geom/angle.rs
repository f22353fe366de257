//! Degree-valued bearing helpers.

/// Map an angle (degrees) into `[0, 360)`.
///
/// Non-finite input yields NaN and a warning; callers check `is_nan()` before
/// formatting the result.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        tracing::warn!(angle, "invalid angle");
        return f64::NAN;
    }
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Round `angle` to the nearest multiple of `step`.
///
/// `step == 0` (or NaN) means "no rounding" and returns `angle` unchanged.
/// Halves round toward +∞. No wrapping into `[0, 360)` happens here.
#[inline]
pub fn round_angle(angle: f64, step: f64) -> f64 {
    if step == 0.0 || step.is_nan() {
        return angle;
    }
    // `q + 0.5` can itself round up (e.g. q = 0.49999999999999994), so
    // compare the exact fractional part instead.
    let q = angle / step;
    let f = q.floor();
    if q - f >= 0.5 {
        (f + 1.0) * step
    } else {
        f * step
    }
}

/// Apply a global bearing adjustment (e.g. plan not drawn north-up) and normalize.
///
/// Returns `None` when the stored angle is not a usable number.
pub fn adjust_angle(angle: f64, adjustment: f64) -> Option<f64> {
    if !angle.is_finite() {
        return None;
    }
    let a = normalize_angle(angle + adjustment);
    (!a.is_nan()).then_some(a)
}
