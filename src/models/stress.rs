//! Curve evaluation for `fs` / `rs`.
//!
//! Both curves share the same two steps:
//! - normalize the input sequence onto `[0, 1]`
//! - evaluate the decay kernel with curve-specific coefficients
//!
//! The model is an improvised approximation of a stress value, not a
//! physically derived one.

use crate::domain::{CurveKind, StressVariant, rs_coefficients};
use crate::error::AppError;
use crate::math::{Series, exp_decay, normalize};

/// `fs` curve: normalized input through the coefficients of `variant`.
pub fn fs(x: &Series, c: f64, p: f64, variant: StressVariant) -> Result<Series, AppError> {
    let xn = normalize(x)?;
    let k = variant.fs_coefficients(c, p);
    Ok(exp_decay(&xn, k.a, k.b, k.c))
}

/// `rs` curve: `-p * exp(-3 x_n)`.
///
/// The `C` parameter is accepted so the signature matches [`fs`]; it has no effect.
pub fn rs(x: &Series, _c: f64, p: f64) -> Result<Series, AppError> {
    let xn = normalize(x)?;
    let k = rs_coefficients(p);
    Ok(exp_decay(&xn, k.a, k.b, k.c))
}

/// Evaluate the given curve kind.
pub fn evaluate(
    kind: CurveKind,
    variant: StressVariant,
    x: &Series,
    c: f64,
    p: f64,
) -> Result<Series, AppError> {
    match kind {
        CurveKind::Fs => fs(x, c, p, variant),
        CurveKind::Rs => rs(x, c, p),
    }
}

/// Evaluate a curve on an input that is already normalized.
///
/// Used where the same normalized axis feeds several curves.
pub fn evaluate_normalized(kind: CurveKind, variant: StressVariant, xn: &Series, c: f64, p: f64) -> Series {
    let k = kind.coefficients(variant, c, p);
    exp_decay(xn, k.a, k.b, k.c)
}
