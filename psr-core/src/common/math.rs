use std::f64::consts::{PI, TAU};

use crate::error::PsrError;

/// Wraps `angle` \[rad\] into (-π, π].
///
/// The angle is first reduced into [0, 2π), and anything above π is shifted down by a full turn.
#[inline]
#[must_use]
pub fn wrap(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Evaluates at `x` the affine function passing through `(x0, y0)` and `(x1, y1)`.
///
/// `x` may lie outside `[x0, x1]`, in which case the line is extrapolated.
///
/// # Errors
///
/// Returns [`PsrError::DivisionByZero`] if `x0 == x1`.
pub fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> Result<f64, PsrError> {
    if x0 == x1 {
        return Err(PsrError::DivisionByZero);
    }
    Ok(lerp_unchecked(x0, y0, x1, y1, x))
}

#[inline]
pub(crate) fn lerp_unchecked(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let m = (y1 - y0) / (x1 - x0);
    y0 + (x - x0) * m
}
