//! Basis-point percentages for fees and slippage tolerances.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Standard basis-point denominator (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage in basis points (1 bp = 0.01%).
///
/// Values above the denominator in use are meaningless as a fee or
/// tolerance; [`apply`](Self::apply) takes the denominator explicitly so a
/// pool configured with a finer scale can reuse the type.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, BasisPoints, Rounding, BPS_DENOMINATOR};
///
/// let fee = BasisPoints::new(30);
/// let charged = fee.apply(Amount::new(1_000), BPS_DENOMINATOR, Rounding::Up);
/// assert_eq!(charged, Ok(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0 bp.
    pub const ZERO: Self = Self(0);

    /// 0.30%, the default swap fee.
    pub const DEFAULT_FEE: Self = Self(30);

    /// Wraps a raw basis-point value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is a usable fraction of `denominator`
    /// (strictly below 100%).
    #[must_use]
    pub const fn is_below(&self, denominator: u32) -> bool {
        self.0 < denominator
    }

    /// Computes `amount × self / denominator` with explicit rounding.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `amount × self` overflows.
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn apply(
        &self,
        amount: Amount,
        denominator: u32,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        amount
            .mul_div(
                Amount::new(u128::from(self.0)),
                Amount::new(u128::from(denominator)),
                rounding,
            )
            .map_err(|e| match e {
                AmmError::Overflow(_) => AmmError::Overflow("basis points apply overflow"),
                other => other,
            })
    }

    /// Returns `denominator − self`, the portion left after the fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `self` is at or above 100%.
    pub const fn complement(&self, denominator: u32) -> crate::error::Result<u32> {
        if self.0 >= denominator {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        Ok(denominator - self.0)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn apply_exact() {
        // 30bp of 1_000_000_000 = 3_000_000
        let Ok(fee) = BasisPoints::new(30).apply(
            Amount::new(1_000_000_000),
            BPS_DENOMINATOR,
            Rounding::Down,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(3_000_000));
    }

    #[test]
    fn apply_dust_rounds_by_direction() {
        let bp = BasisPoints::new(30);
        assert_eq!(
            bp.apply(Amount::new(1), BPS_DENOMINATOR, Rounding::Down),
            Ok(Amount::ZERO)
        );
        assert_eq!(
            bp.apply(Amount::new(1), BPS_DENOMINATOR, Rounding::Up),
            Ok(Amount::new(1))
        );
    }

    #[test]
    fn apply_zero_bp() {
        assert_eq!(
            BasisPoints::ZERO.apply(Amount::new(1_000), BPS_DENOMINATOR, Rounding::Up),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::MAX, BPS_DENOMINATOR, Rounding::Down);
        assert_eq!(
            result,
            Err(AmmError::Overflow("basis points apply overflow"))
        );
    }

    #[test]
    fn apply_zero_denominator() {
        assert_eq!(
            BasisPoints::new(30).apply(Amount::new(10), 0, Rounding::Down),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(30).complement(BPS_DENOMINATOR), Ok(9_970));
        assert!(BasisPoints::new(10_000).complement(BPS_DENOMINATOR).is_err());
    }

    #[test]
    fn is_below() {
        assert!(BasisPoints::DEFAULT_FEE.is_below(BPS_DENOMINATOR));
        assert!(!BasisPoints::new(10_000).is_below(BPS_DENOMINATOR));
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
