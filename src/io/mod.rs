//! Input/output helpers.
//!
//! - input sequences from CSV, inline lists or a seeded generator (`samples`)
//! - per-sample CSV exports (`export`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod samples;

pub use curve::*;
pub use export::*;
pub use samples::*;
