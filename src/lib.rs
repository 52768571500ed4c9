//! `stress-curves` library crate.
//!
//! An improvised exponential model for a "stress" value over a normalized
//! input sequence. It is a quick approximation, not a rigorous simulation.
//!
//! The binary (`stress`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the curve functions can be reused directly

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod sweep;

pub use math::{Series, exp_decay, normalize};
pub use models::{fs, rs};
