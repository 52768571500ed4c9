//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Curves are drawn over the normalized axis with one marker per curve kind:
//! `f` for fs and `r` for rs. Where curves cross, the one drawn first wins.

use crate::domain::{CurveFile, CurveKind};

/// Render every curve stored in `curve`.
pub fn render_ascii_plot(curve: &CurveFile, width: usize, height: usize) -> String {
    let series: Vec<(CurveKind, Vec<(f64, f64)>)> = [(CurveKind::Fs, &curve.fs), (CurveKind::Rs, &curve.rs)]
        .into_iter()
        .filter_map(|(kind, values)| values.as_ref().map(|v| (kind, pair_sorted(&curve.x_norm, v))))
        .collect();

    render_plot(&series, width, height)
}

fn render_plot(series: &[(CurveKind, Vec<(f64, f64)>)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for (kind, points) in series {
        draw_curve(&mut grid, points, kind.marker(), (x_min, x_max), (y_min, y_max));
    }

    let legend: Vec<String> = series
        .iter()
        .map(|(kind, _)| format!("{}={}", kind.marker(), kind.display_name()))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x_norm=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}] | {}\n",
        legend.join(" ")
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Zip x/y into points ordered by x, dropping non-finite pairs.
fn pair_sorted(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a, b))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

fn x_range(series: &[(CurveKind, Vec<(f64, f64)>)]) -> Option<(f64, f64)> {
    bounds(series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.0))).filter(|(lo, hi)| hi > lo)
}

/// Value range across all curves. A flat curve (e.g. `p = 0`) gets a unit
/// margin on both sides so it sits mid-plot under a header that contains it.
fn y_range(series: &[(CurveKind, Vec<(f64, f64)>)]) -> Option<(f64, f64)> {
    bounds(series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)))
        .map(|(lo, hi)| if hi > lo { (lo, hi) } else { (lo - 1.0, hi + 1.0) })
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], ch: char, xr: (f64, f64), yr: (f64, f64)) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, xr.0, xr.1, width);
        let row = map_y(y, yr.0, yr.1, height);
        match prev {
            Some(prev_cell) => draw_line(grid, prev_cell, (col, row), ch),
            None if grid[row][col] == ' ' => grid[row][col] = ch,
            None => {}
        }
        prev = Some((col, row));
    }
}

/// Connect two cells by stepping along the longer axis and rounding the other.
///
/// Cells already holding a marker are left untouched.
fn draw_line(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize), ch: char) {
    let (c0, r0) = (from.0 as f64, from.1 as f64);
    let (dc, dr) = (to.0 as f64 - c0, to.1 as f64 - r0);
    let steps = dc.abs().max(dr.abs()) as usize;

    for i in 0..=steps {
        let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
        let col = (c0 + dc * t).round() as usize;
        let row = (r0 + dr * t).round() as usize;
        if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            if *cell == ' ' {
                *cell = ch;
            }
        }
    }
}
