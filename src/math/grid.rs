//! Evenly spaced grids for input sequences and parameter sweeps.

use super::Series;
use crate::error::AppError;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<Series, AppError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(AppError::input(format!(
            "Invalid range: min={min}, max={max} (must be finite and max>min)."
        )));
    }
    if steps < 2 {
        return Err(AppError::input("Grid steps must be >= 2."));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| min + step * i as f64).collect();
    // Pin the last point so floating error never overshoots the bound.
    out[steps - 1] = max;
    Ok(Series::from_vec(out))
}

/// Parameter axis for sweeps: a single value when `steps == 1`, otherwise
/// [`linspace`].
pub fn axis(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    match steps {
        0 => Err(AppError::input("Axis steps must be >= 1.")),
        1 if min.is_finite() => Ok(vec![min]),
        1 => Err(AppError::input(format!("Invalid axis value: {min}."))),
        _ => Ok(linspace(min, max, steps)?.iter().copied().collect()),
    }
}
