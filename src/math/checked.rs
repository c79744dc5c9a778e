//! `Result`-returning arithmetic on [`Amount`] and [`Shares`].
//!
//! The newtypes expose `Option`-returning `checked_*` methods; this trait
//! lifts them into [`AmmError`] so pool code can chain with `?`.
//!
//! ```
//! use cpmm_math::domain::Amount;
//! use cpmm_math::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(50_000).safe_add(&Amount::new(1_000));
//! assert_eq!(reserve, Ok(Amount::new(51_000)));
//! assert!(Amount::ZERO.safe_sub(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for the amount newtypes.
///
/// Overflow and underflow each map to their own [`AmmError`] variant.
/// Results are never saturated.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] past `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] below zero.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share supply underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_chain() {
        // 50_000 + 1_000 − 2_000 = 49_000
        let result = Amount::new(50_000)
            .safe_add(&Amount::new(1_000))
            .and_then(|v| v.safe_sub(&Amount::new(2_000)));
        assert_eq!(result, Ok(Amount::new(49_000)));
    }

    #[test]
    fn amount_errors_are_specific() {
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
        let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn shares_add_sub() {
        assert_eq!(
            Shares::new(120_000).safe_sub(&Shares::new(500)),
            Ok(Shares::new(119_500))
        );
        let Err(AmmError::Underflow(_)) = Shares::new(1).safe_sub(&Shares::new(2)) else {
            panic!("expected Underflow");
        };
        let Err(AmmError::Overflow(_)) = Shares::new(u128::MAX).safe_add(&Shares::new(1)) else {
            panic!("expected Overflow");
        };
    }
}
