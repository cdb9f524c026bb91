//! Fixed-accuracy rounding.
//!
//! Every coordinate written into a point goes through [`fix_accuracy`] so that
//! repeated incremental edits do not accumulate floating point noise.

/// Step used when rounding coordinates.
pub const ACCURACY: f64 = 1e-3;

const SCALE: f64 = 1000.0;

/// Rounds `value` to the nearest multiple of [`ACCURACY`].
///
/// Non-finite values pass through unchanged.
pub fn fix_accuracy(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let fixed = (value * SCALE).round() / SCALE;
    // Normalise -0.0 so snapshots compare bit-identical.
    if fixed == 0.0 {
        0.0
    } else {
        fixed
    }
}

/// Returns true when `a` and `b` differ by at most `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Normalises an angle in radians into `(-PI, PI]`.
pub fn normalize_radian(radian: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    if !radian.is_finite() {
        return radian;
    }
    let mut r = radian % TAU;
    if r <= -PI {
        r += TAU;
    } else if r > PI {
        r -= TAU;
    }
    r
}

/// Returns true when two angles differ by at most `tolerance` once wrapped
/// into `(-PI, PI]`, so `-PI + e` and `PI` compare equal.
pub fn approx_eq_radian(a: f64, b: f64, tolerance: f64) -> bool {
    normalize_radian(a - b).abs() <= tolerance
}
