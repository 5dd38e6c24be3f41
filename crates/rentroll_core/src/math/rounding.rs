//! Currency rounding for billing amounts.

/// Rounds a currency amount to two decimal places, half-up.
///
/// A `f64::EPSILON` nudge is applied before rounding to counter binary
/// floating-point representation error, so amounts that are conceptually
/// exact cents (e.g. `1.005` stored as `1.00499999...`) round upward as
/// expected.
///
/// Intended for the non-negative amounts this library produces; for negative
/// inputs the underlying `f64::round` rounds halves away from zero rather
/// than toward positive infinity.
///
/// # Examples
///
/// ```
/// use rentroll_core::math::rounding::round_to_cents;
///
/// assert_eq!(round_to_cents(72.9), 72.9);
/// assert_eq!(round_to_cents(100.0 * (14.0 / 30.0)), 46.67);
/// assert_eq!(round_to_cents(1.005), 1.01);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    ((amount + f64::EPSILON) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_cents_unchanged() {
        assert_eq!(round_to_cents(100.0), 100.0);
        assert_eq!(round_to_cents(72.9), 72.9);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_to_cents(1.005), 1.01);
        assert_eq!(round_to_cents(2.675), 2.68);
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(round_to_cents(46.6666666), 46.67);
        assert_eq!(round_to_cents(23.333333), 23.33);
    }

    #[test]
    fn test_compound_rent_sequence() {
        // 10% growth from 100: values the rounding must preserve exactly.
        let mut rent = 100.0;
        for expected in [110.0, 121.0, 133.1] {
            rent = round_to_cents(rent * 1.1);
            assert_relative_eq!(rent, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_decay_sequence() {
        let mut rent = 100.0;
        for expected in [90.0, 81.0, 72.9] {
            rent = round_to_cents(rent * 0.9);
            assert_relative_eq!(rent, expected, epsilon = 1e-12);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_result_is_fixed_point(amount in 0.0f64..1_000_000.0) {
                let rounded = round_to_cents(amount);
                prop_assert_eq!(round_to_cents(rounded), rounded);
            }

            #[test]
            fn test_within_half_cent(amount in 0.0f64..1_000_000.0) {
                let rounded = round_to_cents(amount);
                prop_assert!((rounded - amount).abs() <= 0.005 + 1e-9);
            }

            #[test]
            fn test_non_negative_stays_non_negative(amount in 0.0f64..1_000_000.0) {
                prop_assert!(round_to_cents(amount) >= 0.0);
            }
        }
    }
}
