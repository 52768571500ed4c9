//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of one evaluation:
//! - variant and tuning parameters (`C`, `p`)
//! - the raw and normalized input
//! - the computed `fs` / `rs` values
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveFile, StressVariant};
use crate::error::AppError;
use crate::math::Series;

/// Assemble a `CurveFile` from in-memory results.
pub fn build_curve_file(
    variant: StressVariant,
    c: f64,
    p: f64,
    x: &Series,
    x_norm: &Series,
    fs: Option<&Series>,
    rs: Option<&Series>,
) -> CurveFile {
    CurveFile {
        tool: "stress".to_string(),
        generated_at: Utc::now(),
        variant,
        c,
        p,
        x: x.iter().copied().collect(),
        x_norm: x_norm.iter().copied().collect(),
        fs: fs.map(|v| v.iter().copied().collect()),
        rs: rs.map(|v| v.iter().copied().collect()),
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::input(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid curve JSON: {e}")))?;

    let n = curve.x_norm.len();
    let lengths_ok = curve.x.len() == n
        && curve.fs.as_ref().is_none_or(|v| v.len() == n)
        && curve.rs.as_ref().is_none_or(|v| v.len() == n);
    if !lengths_ok {
        return Err(AppError::input("Invalid curve JSON: series lengths differ."));
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_json_write_then_read() {
        let x = Series::from_vec(vec![0.0, 2.0, 4.0]);
        let xn = Series::from_vec(vec![0.0, 0.5, 1.0]);
        let rs = Series::from_vec(vec![-1.0, -0.25, -0.125]);
        let curve = build_curve_file(StressVariant::Alternate, 0.5, 1.0, &x, &xn, None, Some(&rs));

        let path = std::env::temp_dir().join(format!("stress_curves_curve_{}.json", std::process::id()));
        write_curve_json(&path, &curve).unwrap();
        let back = read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.tool, "stress");
        assert_eq!(back.variant, StressVariant::Alternate);
        assert_eq!(back.x_norm, vec![0.0, 0.5, 1.0]);
        assert_eq!(back.rs, Some(vec![-1.0, -0.25, -0.125]));
        assert!(back.fs.is_none());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let path = std::env::temp_dir().join(format!("stress_curves_bad_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"tool":"stress","generated_at":"2025-01-01T00:00:00Z","variant":"primary",
               "c":1.0,"p":1.0,"x":[0.0,1.0],"x_norm":[0.0,1.0],"fs":[1.0]}"#,
        )
        .unwrap();
        let err = read_curve_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.exit_code(), 2);
    }
}
