//! Command-line parsing for the stress curve tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model/math code. Flags are resolved into domain configs in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CurveKind, CurveSelection, StressVariant};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "stress", version, about = "Improvised exponential stress curves")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate fs/rs over an input sequence, print a table and optionally plot/export.
    Eval(EvalArgs),
    /// Summarize a curve over a grid of (C, p) values.
    Sweep(SweepArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Where the input sequence comes from. Exactly one must be given.
#[derive(Debug, Args, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Comma-separated input values, e.g. `0,5,10`.
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<String>,

    /// CSV file with an `x` column (or values in the first column).
    #[arg(long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Evenly spaced grid as `MIN,MAX,N`.
    #[arg(long, value_name = "MIN,MAX,N", allow_hyphen_values = true)]
    pub linspace: Option<String>,

    /// Number of uniform random sample positions (see `--lo`, `--hi`, `--seed`).
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,
}

/// Options for `stress eval`.
#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Lower bound for `--random` positions.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub lo: f64,

    /// Upper bound for `--random` positions.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub hi: f64,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Tuning parameter `C`.
    #[arg(short = 'C', long = "c-param", default_value_t = 1.0, allow_hyphen_values = true)]
    pub c: f64,

    /// Tuning parameter `p`.
    #[arg(short = 'p', long = "p-param", default_value_t = 1.0, allow_hyphen_values = true)]
    pub p: f64,

    /// Coefficient set used by fs.
    #[arg(long, value_enum, default_value_t = StressVariant::Primary)]
    pub variant: StressVariant,

    /// Which curve(s) to compute.
    #[arg(long, value_enum, default_value_t = CurveSelection::Both)]
    pub curve: CurveSelection,

    /// Render an ASCII plot after the table.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the evaluation (params + input + curves) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for `stress sweep`.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub c_min: f64,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub c_max: f64,

    /// Number of `C` values (1 means just `--c-min`).
    #[arg(long, default_value_t = 5)]
    pub c_steps: usize,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub p_min: f64,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub p_max: f64,

    /// Number of `p` values (1 means just `--p-min`).
    #[arg(long, default_value_t = 5)]
    pub p_steps: usize,

    /// Coefficient set used by fs.
    #[arg(long, value_enum, default_value_t = StressVariant::Primary)]
    pub variant: StressVariant,

    /// Curve to sweep.
    #[arg(long, value_enum, default_value_t = CurveKind::Fs)]
    pub curve: CurveKind,

    /// Points per curve on the normalized axis.
    #[arg(long, default_value_t = 101)]
    pub points: usize,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `stress eval --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
