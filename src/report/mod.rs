//! Terminal reports for evaluations and sweeps.

pub mod format;

pub use format::*;
