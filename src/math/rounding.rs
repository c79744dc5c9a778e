//! Division with an explicit rounding direction.
//!
//! Rounding always goes against the trader or depositor:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, minted shares, burn payout | [`Rounding::Down`] |
//! | Fee, paired deposit amount | [`Rounding::Up`] |
//!
//! ```
//! use cpmm_math::domain::Rounding;
//! use cpmm_math::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// `numerator / denominator` rounded in `rounding`'s direction.
///
/// Returns [`None`] when `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        // quotient < u128::MAX whenever a remainder exists, so +1 is safe.
        Rounding::Up if numerator % denominator != 0 => Some(quotient + 1),
        Rounding::Up => Some(quotient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator() {
        assert_eq!(div_round(1, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_quotient_ignores_direction() {
        assert_eq!(div_round(120_000, 500, Rounding::Down), Some(240));
        assert_eq!(div_round(120_000, 500, Rounding::Up), Some(240));
        assert_eq!(div_round(0, 7, Rounding::Up), Some(0));
    }

    #[test]
    fn remainder_rounds_by_direction() {
        // 1_000 × 30 / 10_000 = 3 exactly; 999 × 30 / 10_000 = 2.997
        assert_eq!(div_round(999 * 30, 10_000, Rounding::Down), Some(2));
        assert_eq!(div_round(999 * 30, 10_000, Rounding::Up), Some(3));
        assert_eq!(div_round(1, u128::MAX, Rounding::Up), Some(1));
    }

    #[test]
    fn extremes() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(div_round(u128::MAX, 2, Rounding::Down), Some(u128::MAX / 2));
        assert_eq!(div_round(u128::MAX, 2, Rounding::Up), Some(u128::MAX / 2 + 1));
        assert_eq!(div_round(u128::MAX, u128::MAX - 1, Rounding::Up), Some(2));
    }
}
