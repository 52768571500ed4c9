//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during evaluation
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::f64::consts::PI;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Coefficients for the decay kernel `a * exp(-b * x) + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Kernel value at the normalized start (`x = 0`).
    pub fn start_value(self) -> f64 {
        self.a + self.c
    }

    /// Kernel value at the normalized end (`x = 1`).
    pub fn end_value(self) -> f64 {
        self.a * (-self.b).exp() + self.c
    }
}

/// Which coefficient set the `fs` curve uses.
///
/// Two near-identical copies of the model exist, differing only in how `fs`
/// derives its coefficients from `C` and `p`. Neither is canonical, so both are
/// kept and the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StressVariant {
    /// `a = 60·C·p`, `b = π`, `c = 8 + 16·C`.
    #[default]
    Primary,
    /// `a = 3·C·p + C`, `b = 1.8·π`, `c = 1.4·C`.
    Alternate,
}

impl StressVariant {
    pub fn display_name(self) -> &'static str {
        match self {
            StressVariant::Primary => "primary",
            StressVariant::Alternate => "alternate",
        }
    }

    /// Coefficients for `fs` given the tuning parameters `C` and `p`.
    pub fn fs_coefficients(self, c: f64, p: f64) -> Coefficients {
        match self {
            StressVariant::Primary => Coefficients {
                a: 60.0 * c * p,
                b: PI,
                c: 8.0 + 16.0 * c,
            },
            StressVariant::Alternate => Coefficients {
                a: 3.0 * c * p + c,
                b: 1.8 * PI,
                c: 1.4 * c,
            },
        }
    }
}

/// Coefficients for `rs`; identical in both model copies and independent of `C`.
pub fn rs_coefficients(p: f64) -> Coefficients {
    Coefficients {
        a: -p,
        b: 3.0,
        c: 0.0,
    }
}

/// A single curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Fs,
    Rs,
}

impl CurveKind {
    pub fn display_name(self) -> &'static str {
        match self {
            CurveKind::Fs => "fs",
            CurveKind::Rs => "rs",
        }
    }

    /// Marker used in ASCII plots.
    pub fn marker(self) -> char {
        match self {
            CurveKind::Fs => 'f',
            CurveKind::Rs => 'r',
        }
    }

    pub fn coefficients(self, variant: StressVariant, c: f64, p: f64) -> Coefficients {
        match self {
            CurveKind::Fs => variant.fs_coefficients(c, p),
            CurveKind::Rs => rs_coefficients(p),
        }
    }
}

/// Which curve(s) a command should compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveSelection {
    Fs,
    Rs,
    Both,
}

impl CurveSelection {
    pub fn kinds(self) -> &'static [CurveKind] {
        match self {
            CurveSelection::Fs => &[CurveKind::Fs],
            CurveSelection::Rs => &[CurveKind::Rs],
            CurveSelection::Both => &[CurveKind::Fs, CurveKind::Rs],
        }
    }
}

/// Where the input sequence comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSource {
    /// Values given inline on the command line.
    Inline(Vec<f64>),
    /// CSV file with an `x` column (or the first column).
    File(PathBuf),
    /// Evenly spaced grid.
    Linspace { min: f64, max: f64, steps: usize },
    /// Sorted uniform random positions, deterministic per seed.
    Random { count: usize, lo: f64, hi: f64, seed: u64 },
}

/// Configuration for a single evaluation run.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub source: SampleSource,
    pub c: f64,
    pub p: f64,
    pub variant: StressVariant,
    pub curves: CurveSelection,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

/// Configuration for a `(C, p)` parameter sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub c_min: f64,
    pub c_max: f64,
    pub c_steps: usize,
    pub p_min: f64,
    pub p_max: f64,
    pub p_steps: usize,
    pub variant: StressVariant,
    pub curve: CurveKind,
    /// Number of evenly spaced input points each curve is evaluated on.
    pub points: usize,
}

/// Summary of one curve in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub c: f64,
    pub p: f64,
    pub start: f64,
    pub end: f64,
    pub min: f64,
    pub max: f64,
}

/// A saved evaluation (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub variant: StressVariant,
    pub c: f64,
    pub p: f64,
    pub x: Vec<f64>,
    pub x_norm: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fs: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rs: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_coefficients() {
        let k = StressVariant::Primary.fs_coefficients(0.5, 2.0);
        assert_eq!(k.a, 60.0);
        assert_eq!(k.b, PI);
        assert_eq!(k.c, 16.0);
    }

    #[test]
    fn alternate_coefficients() {
        let k = StressVariant::Alternate.fs_coefficients(2.0, 0.5);
        assert_eq!(k.a, 5.0);
        assert!((k.b - 1.8 * PI).abs() < 1e-15);
        assert!((k.c - 2.8).abs() < 1e-12);
    }

    #[test]
    fn rs_ignores_c_and_negates_p() {
        let k = CurveKind::Rs.coefficients(StressVariant::Alternate, 99.0, 1.25);
        assert_eq!(k, Coefficients { a: -1.25, b: 3.0, c: 0.0 });
        assert_eq!(k.start_value(), -1.25);
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(StressVariant::default(), StressVariant::Primary);
    }
}
