//! Mathematical primitives: normalization, the exponential decay kernel and
//! evenly spaced grids.

pub mod decay;
pub mod grid;
pub mod normalize;

pub use decay::*;
pub use grid::*;
pub use normalize::*;

/// Ordered sequence of samples (positions, times, curve values).
pub type Series = nalgebra::DVector<f64>;
