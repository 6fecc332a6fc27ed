//! Decimal Rounding
//!
//! Percentages are rounded on the exact binary value of the `f64`, half to
//! even. Scaling first (`(v * 100.0).round() / 100.0`) rounds a different
//! number and drifts by one unit in the last place on ordinary inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` decimal places, half to even.
///
/// Non-finite values are returned unchanged.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    round_dp(value, 1)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    round_dp(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_binary_value_not_scaled_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round2(2.675), 2.67);
        // 26.615 is stored as 26.61499999...
        assert_eq!(round2(26.615), 26.61);
        assert_eq!(round1(0.35), 0.3);
    }

    #[test]
    fn test_exact_midpoints_go_to_even() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(round1(33.333_333), 33.3);
        assert_eq!(round2(-0.954_5), -0.95);
        assert_eq!(round1(100.0), 100.0);
        assert!(round2(f64::NAN).is_nan());
    }
}
