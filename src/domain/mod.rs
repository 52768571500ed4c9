//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - model selection enums (`StressVariant`, `CurveKind`, `CurveSelection`)
//! - coefficient triples (`Coefficients`)
//! - run configuration (`EvalConfig`, `SweepConfig`)
//! - portable outputs (`CurveFile`, `SweepPoint`)

pub mod types;

pub use types::*;
