//! The exponential decay kernel `a * exp(-b * x) + c`.
//!
//! Limits worth keeping in mind:
//! - at `x = 0` the value is `a + c`
//! - as `b * x → ∞` the value approaches `c`

use super::Series;

/// Evaluate `a * exp(-b * x) + c` elementwise.
pub fn exp_decay(x: &Series, a: f64, b: f64, c: f64) -> Series {
    x.map(|v| exp_decay_at(v, a, b, c))
}

/// Scalar form of [`exp_decay`].
pub fn exp_decay_at(x: f64, a: f64, b: f64, c: f64) -> f64 {
    a * (-b * x).exp() + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_flat() {
        let x = Series::from_vec(vec![0.0, 1.0, 2.0]);
        let y = exp_decay(&x, 1.0, 0.0, 0.0);
        assert_eq!(y.as_slice(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn value_at_origin_is_a_plus_c() {
        let y = exp_decay_at(0.0, 2.5, 7.0, -1.0);
        assert!((y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn large_exponent_approaches_offset() {
        let y = exp_decay_at(100.0, 50.0, 3.0, 8.0);
        assert!((y - 8.0).abs() < 1e-9, "expected ~8, got {y}");
    }

    #[test]
    fn output_has_input_length() {
        let x = Series::from_vec(vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(exp_decay(&x, 1.0, 1.0, 1.0).len(), 4);
    }
}
