//! Stress curve implementations.
//!
//! Curves are implemented as small, pure functions so that sweep/report code can
//! stay generic.

pub mod stress;

pub use stress::*;
