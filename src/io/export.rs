//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::CurveFile;
use crate::error::AppError;

/// Write per-sample results to a CSV file.
///
/// Columns for curves that were not computed are left empty.
pub fn write_results_csv(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "index,x,x_norm,fs,rs")
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for (i, (x, xn)) in curve.x.iter().zip(&curve.x_norm).enumerate() {
        writeln!(
            file,
            "{},{},{:.10},{},{}",
            i,
            x,
            xn,
            fmt_cell(curve.fs.as_deref(), i),
            fmt_cell(curve.rs.as_deref(), i),
        )
        .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

fn fmt_cell(values: Option<&[f64]>, i: usize) -> String {
    values
        .and_then(|v| v.get(i))
        .map(|v| format!("{v:.10}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::StressVariant;

    #[test]
    fn export_writes_header_and_rows() {
        let curve = CurveFile {
            tool: "stress".to_string(),
            generated_at: Utc::now(),
            variant: StressVariant::Primary,
            c: 1.0,
            p: 1.0,
            x: vec![0.0, 10.0],
            x_norm: vec![0.0, 1.0],
            fs: None,
            rs: Some(vec![-1.0, -0.5]),
        };
        let path = std::env::temp_dir().join(format!("stress_curves_export_{}.csv", std::process::id()));
        write_results_csv(&path, &curve).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,x,x_norm,fs,rs");
        assert_eq!(lines[1], "0,0,0.0000000000,,-1.0000000000");
        assert_eq!(lines[2], "1,10,1.0000000000,,-0.5000000000");
    }
}
