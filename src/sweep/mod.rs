//! Parameter sweeps over `(C, p)`.
//!
//! Every grid cell is an independent curve evaluation, so the grid is
//! evaluated in parallel. Results are returned in row-major grid order
//! (`C` outer, `p` inner) regardless of scheduling.

use rayon::prelude::*;

use crate::domain::{SweepConfig, SweepPoint};
use crate::error::AppError;
use crate::math::{Series, axis, linspace};
use crate::models::evaluate_normalized;

/// Evaluate the configured curve for every `(C, p)` pair.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>, AppError> {
    let cs = axis(config.c_min, config.c_max, config.c_steps)?;
    let ps = axis(config.p_min, config.p_max, config.p_steps)?;
    // The unit grid is already normalized.
    let xn = linspace(0.0, 1.0, config.points)?;

    let pairs: Vec<(f64, f64)> = cs
        .iter()
        .flat_map(|&c| ps.iter().map(move |&p| (c, p)))
        .collect();

    pairs
        .par_iter()
        .map(|&(c, p)| {
            let y = evaluate_normalized(config.curve, config.variant, &xn, c, p);
            summarize(c, p, &y)
        })
        .collect()
}

fn summarize(c: f64, p: f64, y: &Series) -> Result<SweepPoint, AppError> {
    if y.iter().any(|v| !v.is_finite()) {
        return Err(AppError::new(
            4,
            format!("Non-finite curve value in sweep at C={c}, p={p}."),
        ));
    }
    Ok(SweepPoint {
        c,
        p,
        start: y[0],
        end: y[y.len() - 1],
        min: y.min(),
        max: y.max(),
    })
}
