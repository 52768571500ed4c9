//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the input sequence
//! - evaluates the requested curves or sweep
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, PlotArgs, SourceArgs, SweepArgs};
use crate::domain::{CurveFile, CurveKind, EvalConfig, SampleSource, SweepConfig};
use crate::error::AppError;
use crate::io::{build_curve_file, load_samples, parse_inline, parse_linspace};
use crate::math::{Series, normalize};
use crate::models::evaluate_normalized;

/// Entry point for the `stress` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args)?;
    let curve = run_eval(&config)?;

    println!("{}", crate::report::format_eval_summary(&curve));

    if config.plot {
        println!(
            "{}",
            crate::plot::render_ascii_plot(&curve, config.plot_width, config.plot_height)
        );
    }

    if let Some(path) = &config.export_results {
        crate::io::write_results_csv(path, &curve)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::write_curve_json(path, &curve)?;
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args);
    let results = crate::sweep::run_sweep(&config)?;
    println!("{}", crate::report::format_sweep(&results, &config));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::read_curve_json(&args.curve)?;
    println!("{}", crate::plot::render_ascii_plot(&curve, args.width, args.height));
    Ok(())
}

/// Evaluate the configured curves on the configured input.
///
/// The input is normalized once and shared by every requested curve.
pub fn run_eval(config: &EvalConfig) -> Result<CurveFile, AppError> {
    let x = load_samples(&config.source)?;
    let xn = normalize(&x)?;

    let mut fs: Option<Series> = None;
    let mut rs: Option<Series> = None;
    for &kind in config.curves.kinds() {
        let y = evaluate_normalized(kind, config.variant, &xn, config.c, config.p);
        if let Some(idx) = y.iter().position(|v| !v.is_finite()) {
            return Err(AppError::new(
                4,
                format!(
                    "Non-finite {} value at sample {idx} (C={}, p={}).",
                    kind.display_name(),
                    config.c,
                    config.p
                ),
            ));
        }
        match kind {
            CurveKind::Fs => fs = Some(y),
            CurveKind::Rs => rs = Some(y),
        }
    }

    Ok(build_curve_file(
        config.variant,
        config.c,
        config.p,
        &x,
        &xn,
        fs.as_ref(),
        rs.as_ref(),
    ))
}

pub fn eval_config_from_args(args: &EvalArgs) -> Result<EvalConfig, AppError> {
    Ok(EvalConfig {
        source: sample_source_from_args(&args.source, args)?,
        c: args.c,
        p: args.p,
        variant: args.variant,
        curves: args.curve,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
    })
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    SweepConfig {
        c_min: args.c_min,
        c_max: args.c_max,
        c_steps: args.c_steps,
        p_min: args.p_min,
        p_max: args.p_max,
        p_steps: args.p_steps,
        variant: args.variant,
        curve: args.curve,
        points: args.points,
    }
}

fn sample_source_from_args(source: &SourceArgs, args: &EvalArgs) -> Result<SampleSource, AppError> {
    if let Some(text) = &source.x {
        return Ok(SampleSource::Inline(parse_inline(text)?));
    }
    if let Some(path) = &source.input {
        return Ok(SampleSource::File(path.clone()));
    }
    if let Some(text) = &source.linspace {
        return parse_linspace(text);
    }
    if let Some(count) = source.random {
        return Ok(SampleSource::Random {
            count,
            lo: args.lo,
            hi: args.hi,
            seed: args.seed,
        });
    }
    Err(AppError::input(
        "No input given: use one of --x, --input, --linspace or --random.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurveSelection, StressVariant};

    fn config(source: SampleSource, curves: CurveSelection) -> EvalConfig {
        EvalConfig {
            source,
            c: 0.5,
            p: 2.0,
            variant: StressVariant::Primary,
            curves,
            plot: false,
            plot_width: 40,
            plot_height: 10,
            export_results: None,
            export_curve: None,
        }
    }

    #[test]
    fn run_eval_computes_requested_curves() {
        let cfg = config(SampleSource::Inline(vec![0.0, 5.0, 10.0]), CurveSelection::Both);
        let curve = run_eval(&cfg).unwrap();
        assert_eq!(curve.x_norm, vec![0.0, 0.5, 1.0]);
        let fs = curve.fs.unwrap();
        let rs = curve.rs.unwrap();
        assert!((fs[0] - (60.0 + 16.0)).abs() < 1e-12);
        assert_eq!(rs[0], -2.0);
    }

    #[test]
    fn run_eval_only_rs() {
        let cfg = config(
            SampleSource::Linspace { min: 1.0, max: 3.0, steps: 3 },
            CurveSelection::Rs,
        );
        let curve = run_eval(&cfg).unwrap();
        assert!(curve.fs.is_none());
        assert_eq!(curve.rs.map(|v| v.len()), Some(3));
    }

    #[test]
    fn run_eval_rejects_constant_input() {
        let cfg = config(SampleSource::Inline(vec![2.0, 2.0]), CurveSelection::Both);
        assert_eq!(run_eval(&cfg).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn run_eval_flags_overflow() {
        let mut cfg = config(SampleSource::Inline(vec![0.0, 1.0]), CurveSelection::Fs);
        cfg.c = f64::MAX;
        cfg.p = f64::MAX;
        assert_eq!(run_eval(&cfg).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn eval_args_resolve_to_config() {
        let cli = crate::cli::Cli::parse_from(["stress", "eval", "--linspace", "0,10,5", "--curve", "fs"]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        let cfg = eval_config_from_args(&args).unwrap();
        assert_eq!(cfg.source, SampleSource::Linspace { min: 0.0, max: 10.0, steps: 5 });
        assert_eq!(cfg.curves, CurveSelection::Fs);
        assert_eq!(cfg.variant, StressVariant::Primary);
    }
}
