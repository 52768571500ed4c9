//! Min/max normalization onto `[0, 1]`.
//!
//! The rescale is `(x - min) / (max - min)`. A constant sequence has no valid
//! rescale (the denominator is zero), so it is rejected instead of producing
//! NaN/inf values downstream. When `max - min` overflows, every term is halved
//! first so the endpoints still land on exactly `0` and `1`.

use super::Series;
use crate::error::AppError;

/// Rescale `x` so its minimum maps to `0` and its maximum maps to `1`.
///
/// # Errors
/// Returns an exit-code-2 error if `x` is empty, contains a non-finite value,
/// or is constant (`max == min`).
pub fn normalize(x: &Series) -> Result<Series, AppError> {
    let (min, max) = finite_range(x)?;
    let span = max - min;
    if span == 0.0 {
        return Err(AppError::input(format!(
            "Cannot normalize a constant sequence (all {} values equal {min}).",
            x.len()
        )));
    }
    if span.is_finite() {
        return Ok(x.map(|v| (v - min) / span));
    }
    let half_span = max / 2.0 - min / 2.0;
    Ok(x.map(|v| (v / 2.0 - min / 2.0) / half_span))
}

/// Minimum and maximum of a non-empty, all-finite sequence.
pub fn finite_range(x: &Series) -> Result<(f64, f64), AppError> {
    if x.is_empty() {
        return Err(AppError::input("Cannot normalize an empty sequence."));
    }
    if let Some((idx, v)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(AppError::input(format!(
            "Non-finite input value {v} at index {idx}."
        )));
    }
    Ok((x.min(), x.max()))
}
