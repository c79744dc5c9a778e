//! Liquidity-provider share units.

use core::fmt;

use super::Amount;

/// Outstanding or held LP shares.
///
/// Kept distinct from [`Amount`] so a share count can never be passed
/// where a reserve quantity is expected. Conversions between the two are
/// explicit through [`as_amount`](Self::as_amount) and
/// [`from_amount`](Self::from_amount).
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::Shares;
///
/// let minted = Shares::new(1_000);
/// assert_eq!(minted.checked_add(&Shares::new(500)), Some(Shares::new(1_500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
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

    /// Reinterprets the share count as an [`Amount`] for mixed arithmetic.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }

    /// Builds a share count from an [`Amount`] produced by mixed arithmetic.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
