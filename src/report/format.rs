//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/model code stays clean and testable
//! - output changes are localized

use crate::domain::{Coefficients, CurveFile, CurveKind, SweepConfig, SweepPoint, rs_coefficients};

/// Format the evaluation summary: parameters, coefficients and a value table.
pub fn format_eval_summary(curve: &CurveFile) -> String {
    let mut out = String::new();

    out.push_str("=== stress - Improvised Stress Curve ===\n");
    out.push_str(&format!("Variant: {}\n", curve.variant.display_name()));
    out.push_str(&format!("C = {}, p = {}\n", curve.c, curve.p));
    out.push_str(&format!("Samples: {}\n", curve.x.len()));

    if curve.fs.is_some() {
        let k = curve.variant.fs_coefficients(curve.c, curve.p);
        out.push_str(&format_coefficients(CurveKind::Fs, k));
    }
    if curve.rs.is_some() {
        out.push_str(&format_coefficients(CurveKind::Rs, rs_coefficients(curve.p)));
    }

    out.push('\n');
    out.push_str(&format!("{:>6} {:>14} {:>10}", "#", "x", "x_norm"));
    if curve.fs.is_some() {
        out.push_str(&format!(" {:>14}", "fs"));
    }
    if curve.rs.is_some() {
        out.push_str(&format!(" {:>14}", "rs"));
    }
    out.push('\n');

    for (i, (x, xn)) in curve.x.iter().zip(&curve.x_norm).enumerate() {
        out.push_str(&format!("{i:>6} {x:>14.6} {xn:>10.6}"));
        for v in [&curve.fs, &curve.rs].into_iter().flatten() {
            out.push_str(&format!(" {:>14.6}", v[i]));
        }
        out.push('\n');
    }

    out
}

/// One line per curve: kernel coefficients plus the values at both ends of
/// the normalized axis.
fn format_coefficients(kind: CurveKind, k: Coefficients) -> String {
    format!(
        "{}: a={:.6}, b={:.6}, c={:.6} | start={:.6}, end={:.6}\n",
        kind.display_name(),
        k.a,
        k.b,
        k.c,
        k.start_value(),
        k.end_value()
    )
}

/// Format sweep results as a table, one row per `(C, p)` cell.
pub fn format_sweep(results: &[SweepPoint], config: &SweepConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== stress - Sweep ({}, variant {}) ===\n",
        config.curve.display_name(),
        config.variant.display_name()
    ));
    out.push_str(&format!(
        "C in [{}, {}] x {} | p in [{}, {}] x {} | {} points per curve\n\n",
        config.c_min, config.c_max, config.c_steps, config.p_min, config.p_max, config.p_steps, config.points
    ));
    out.push_str(&format!(
        "{:>10} {:>10} {:>14} {:>14} {:>14} {:>14}\n",
        "C", "p", "start", "end", "min", "max"
    ));

    for s in results {
        out.push_str(&format!(
            "{:>10.4} {:>10.4} {:>14.6} {:>14.6} {:>14.6} {:>14.6}\n",
            s.c, s.p, s.start, s.end, s.min, s.max
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::StressVariant;

    #[test]
    fn eval_summary_lists_only_computed_curves() {
        let curve = CurveFile {
            tool: "stress".to_string(),
            generated_at: Utc::now(),
            variant: StressVariant::Primary,
            c: 0.5,
            p: 2.0,
            x: vec![0.0, 1.0],
            x_norm: vec![0.0, 1.0],
            fs: Some(vec![76.0, 18.0]),
            rs: None,
        };
        let txt = format_eval_summary(&curve);
        assert!(txt.contains("Variant: primary"));
        assert!(txt.contains("fs: a=60.000000"));
        assert!(txt.contains("start=76.000000"));
        assert!(!txt.contains("rs: a="));
        assert_eq!(txt.lines().count(), 9);
    }

    #[test]
    fn sweep_table_has_row_per_cell() {
        let config = SweepConfig {
            c_min: 0.0,
            c_max: 1.0,
            c_steps: 2,
            p_min: 1.0,
            p_max: 1.0,
            p_steps: 1,
            variant: StressVariant::Alternate,
            curve: CurveKind::Rs,
            points: 5,
        };
        let rows = vec![
            SweepPoint { c: 0.0, p: 1.0, start: -1.0, end: -0.05, min: -1.0, max: -0.05 },
            SweepPoint { c: 1.0, p: 1.0, start: -1.0, end: -0.05, min: -1.0, max: -0.05 },
        ];
        let txt = format_sweep(&rows, &config);
        assert!(txt.starts_with("=== stress - Sweep (rs, variant alternate) ==="));
        assert_eq!(txt.lines().count(), 6);
    }
}
