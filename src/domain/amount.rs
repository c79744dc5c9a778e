//! Token quantity in the asset's smallest unit.

use core::fmt;

use super::Rounding;
use crate::math::mul_div;

/// A quantity of asset X or Y, in the smallest on-chain unit
/// (micro-units for a 6-decimal token).
///
/// Negative amounts cannot be represented, so "non-positive" in the pool
/// rules reduces to zero. Arithmetic is checked and never panics.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, Rounding};
///
/// let reserve = Amount::new(50_000);
/// let share = reserve.mul_div(Amount::new(500), Amount::new(120_000), Rounding::Down);
/// assert_eq!(share, Ok(Amount::new(208)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw smallest-unit value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw smallest-unit value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self × numerator / denominator`, multiplying first so no
    /// precision is lost before the single rounding step. The product may
    /// exceed `u128`; only the quotient has to fit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    ///
    /// [`AmmError::Overflow`]: crate::error::AmmError::Overflow
    /// [`AmmError::DivisionByZero`]: crate::error::AmmError::DivisionByZero
    pub fn mul_div(
        &self,
        numerator: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> crate::error::Result<Self> {
        mul_div(self.0, numerator.0, denominator.0, rounding).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
