//! Input sequence loading.
//!
//! Sources:
//! - CSV files: the `x` column if the header has one, else the first column
//! - inline comma-separated lists (`--x 0,5,10`)
//! - evenly spaced grids
//! - sorted uniform random positions from a seeded RNG
//!
//! Every unusable CSV row is collected with its physical line number. Loading a
//! file with any such row is an error, since dropping rows would shift the
//! min/max the curves are normalized against.

use std::path::Path;

use csv::StringRecord;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Uniform;

use crate::domain::SampleSource;
use crate::error::AppError;
use crate::math::{Series, linspace};

/// A CSV row that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Parsed CSV input plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct LoadedSamples {
    pub x: Series,
    pub row_errors: Vec<RowError>,
}

/// Resolve a sample source into a concrete input sequence.
pub fn load_samples(source: &SampleSource) -> Result<Series, AppError> {
    match source {
        SampleSource::Inline(values) => Ok(Series::from_vec(values.clone())),
        SampleSource::File(path) => {
            let loaded = read_samples_csv(path)?;
            if loaded.row_errors.is_empty() {
                return Ok(loaded.x);
            }
            let details: Vec<String> = loaded
                .row_errors
                .iter()
                .map(|e| format!("line {}: {}", e.line, e.message))
                .collect();
            Err(AppError::input(format!(
                "CSV '{}' has {} unusable row(s): {}",
                path.display(),
                loaded.row_errors.len(),
                details.join("; ")
            )))
        }
        SampleSource::Linspace { min, max, steps } => linspace(*min, *max, *steps),
        SampleSource::Random { count, lo, hi, seed } => random_samples(*count, *lo, *hi, *seed),
    }
}

/// Parse a comma-separated list of numbers, e.g. `"0, 5, 10"`.
///
/// Empty fields (`"1,,2"`) are rejected.
pub fn parse_inline(text: &str) -> Result<Vec<f64>, AppError> {
    text.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(idx, s)| {
            if s.is_empty() {
                return Err(AppError::input(format!("Empty value at position {} in '{text}'.", idx + 1)));
            }
            s.parse::<f64>()
                .map_err(|e| AppError::input(format!("Invalid number '{s}': {e}")))
        })
        .collect()
}

/// Parse a `MIN,MAX,N` triple.
pub fn parse_linspace(text: &str) -> Result<SampleSource, AppError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [min, max, steps] = parts.as_slice() else {
        return Err(AppError::input(format!(
            "Expected MIN,MAX,N for --linspace, got '{text}'."
        )));
    };
    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| AppError::input(format!("Invalid --linspace bound '{s}': {e}")))
    };
    let steps = steps
        .parse::<usize>()
        .map_err(|e| AppError::input(format!("Invalid --linspace count '{steps}': {e}")))?;
    Ok(SampleSource::Linspace {
        min: parse(*min)?,
        max: parse(*max)?,
        steps,
    })
}

/// Read an input sequence from a CSV file.
pub fn read_samples_csv(path: &Path) -> Result<LoadedSamples, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let lines = LineIndex::new(text.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Err(AppError::input(format!("CSV '{}' is empty.", path.display())));
    };
    let first = first.map_err(|e| AppError::input(format!("Failed to read CSV header: {e}")))?;

    let mut values = Vec::new();
    let mut row_errors = Vec::new();
    let mut last_line = lines.line_of(first.position(), 1);

    // A first row that is not numeric is a header.
    let column = match header_column(&first) {
        Some(col) => col,
        None => {
            push_value(&first, 0, last_line, &mut values, &mut row_errors);
            0
        }
    };

    for record in records {
        match record {
            Ok(rec) => {
                last_line = lines.line_of(rec.position(), last_line + 1);
                push_value(&rec, column, last_line, &mut values, &mut row_errors);
            }
            Err(e) => {
                last_line = lines.line_of(e.position(), last_line + 1);
                row_errors.push(RowError {
                    line: last_line,
                    message: e.to_string(),
                });
            }
        }
    }

    if values.is_empty() {
        return Err(AppError::input(format!(
            "CSV '{}' contains no usable values.",
            path.display()
        )));
    }

    Ok(LoadedSamples {
        x: Series::from_vec(values),
        row_errors,
    })
}

/// Maps reader byte offsets to 1-based physical line numbers.
///
/// The reader skips blank lines, and a record's offset may point at the blank
/// lines before it, so line breaks at the offset are skipped first.
struct LineIndex<'a> {
    bytes: &'a [u8],
}

impl<'a> LineIndex<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn line_of(&self, pos: Option<&csv::Position>, fallback: usize) -> usize {
        let Some(pos) = pos else {
            return fallback;
        };
        let mut at = usize::try_from(pos.byte()).unwrap_or(usize::MAX).min(self.bytes.len());
        while at < self.bytes.len() && matches!(self.bytes[at], b'\n' | b'\r') {
            at += 1;
        }
        self.bytes[..at].iter().filter(|&&b| b == b'\n').count() + 1
    }
}

/// Column index to read if `record` is a header row.
fn header_column(record: &StringRecord) -> Option<usize> {
    let first = record.get(0)?;
    if first.parse::<f64>().is_ok() {
        return None;
    }
    Some(
        record
            .iter()
            .position(|h| h.eq_ignore_ascii_case("x"))
            .unwrap_or(0),
    )
}

fn push_value(
    record: &StringRecord,
    column: usize,
    line: usize,
    values: &mut Vec<f64>,
    row_errors: &mut Vec<RowError>,
) {
    match record.get(column).map(|s| s.parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() => values.push(v),
        Some(Ok(v)) => row_errors.push(RowError {
            line,
            message: format!("non-finite value {v}"),
        }),
        Some(Err(e)) => row_errors.push(RowError {
            line,
            message: format!("invalid number: {e}"),
        }),
        None => row_errors.push(RowError {
            line,
            message: format!("missing column {}", column + 1),
        }),
    }
}

/// Generate `count` sorted positions uniformly distributed in `[lo, hi]`.
pub fn random_samples(count: usize, lo: f64, hi: f64, seed: u64) -> Result<Series, AppError> {
    if !(lo.is_finite() && hi.is_finite() && hi > lo) {
        return Err(AppError::input(format!(
            "Invalid random range: lo={lo}, hi={hi} (must be finite and hi>lo)."
        )));
    }
    if count < 2 {
        return Err(AppError::input("Random sample count must be >= 2."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(lo, hi);
    let mut values: Vec<f64> = (0..count).map(|_| dist.sample(&mut rng)).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    Ok(Series::from_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("stress_curves_{name}_{}.csv", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn parse_inline_list() {
        assert_eq!(parse_inline("0, 5,10").unwrap(), vec![0.0, 5.0, 10.0]);
        assert!(parse_inline("1,abc").is_err());
    }

    #[test]
    fn parse_inline_rejects_empty_fields() {
        let err = parse_inline("1,,2").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("position 2"));
        assert!(parse_inline("1,2,").is_err());
        assert!(parse_inline("").is_err());
    }

    #[test]
    fn parse_linspace_triple() {
        assert_eq!(
            parse_linspace("0,10,5").unwrap(),
            SampleSource::Linspace { min: 0.0, max: 10.0, steps: 5 }
        );
        assert!(parse_linspace("0,10").is_err());
        assert!(parse_linspace("0,10,x").is_err());
    }

    #[test]
    fn csv_with_x_header_reads_named_column() {
        let path = temp_csv("named", "t,x\n0,1.5\n1,bad\n2,3.5\n");
        let loaded = read_samples_csv(&path).unwrap();
        assert_eq!(loaded.x.as_slice(), &[1.5, 3.5]);
        assert_eq!(loaded.row_errors.len(), 1);
        assert_eq!(loaded.row_errors[0].line, 3);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn csv_row_errors_count_blank_lines() {
        let path = temp_csv("blank_lines", "x\n\n1.0\n\nbad\n2.0\n");
        let loaded = read_samples_csv(&path).unwrap();
        let _ = std::fs::remove_file(path);
        assert_eq!(loaded.x.as_slice(), &[1.0, 2.0]);
        assert_eq!(loaded.row_errors.len(), 1);
        assert_eq!(loaded.row_errors[0].line, 5);
    }

    #[test]
    fn load_samples_fails_on_unusable_rows() {
        let path = temp_csv("load_bad", "x\n1.0\nbad\n3.0\n");
        let err = load_samples(&SampleSource::File(path.clone())).unwrap_err();
        let _ = std::fs::remove_file(path);
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("line 3"), "{}", err.message());
    }

    #[test]
    fn load_samples_reads_clean_file() {
        let path = temp_csv("load_ok", "x\n1.0\n3.0\n");
        let x = load_samples(&SampleSource::File(path.clone())).unwrap();
        let _ = std::fs::remove_file(path);
        assert_eq!(x.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn csv_without_header_reads_first_column() {
        let path = temp_csv("bare", "0\n5\n10\n");
        let loaded = read_samples_csv(&path).unwrap();
        assert_eq!(loaded.x.as_slice(), &[0.0, 5.0, 10.0]);
        assert!(loaded.row_errors.is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn csv_without_values_is_an_error() {
        let path = temp_csv("empty", "x\n");
        assert!(read_samples_csv(&path).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn random_samples_are_sorted_bounded_and_seeded() {
        let a = random_samples(50, -1.0, 4.0, 7).unwrap();
        let b = random_samples(50, -1.0, 4.0, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-1.0..=4.0).contains(v)));
        assert!(a.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }
}
