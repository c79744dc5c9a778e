//! Snapshot of a pool's accounting.

use core::fmt;

use super::{Amount, Shares, SwapDirection};
use crate::error::AmmError;

/// Reserves and outstanding LP shares of a two-asset pool at one moment.
///
/// A `PoolState` is a value: operations never mutate it in place but
/// return the next snapshot, and whoever holds the snapshot (a contract,
/// a UI store, a [`SimulatedPool`](crate::sim::SimulatedPool)) decides
/// how to persist it.
///
/// # Invariant
///
/// Either all three fields are zero (empty pool) or all three are
/// positive. [`new`](Self::new) enforces this; snapshots produced by
/// [`PoolMath`](crate::pool::PoolMath) preserve it.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, PoolState, Shares};
///
/// let state = PoolState::new(Amount::new(60_000), Amount::new(60_000), Shares::new(120_000))
///     .expect("consistent snapshot");
/// assert!(!state.is_empty());
/// assert_eq!(state.spot_price_y_per_x(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
}

impl PoolState {
    /// A pool with no reserves and no shares.
    pub const EMPTY: Self = Self {
        reserve_x: Amount::ZERO,
        reserve_y: Amount::ZERO,
        total_shares: Shares::ZERO,
    };

    /// Creates a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if some but not all of the fields
    /// are zero.
    pub fn new(
        reserve_x: Amount,
        reserve_y: Amount,
        total_shares: Shares,
    ) -> crate::error::Result<Self> {
        let state = Self {
            reserve_x,
            reserve_y,
            total_shares,
        };
        state.validate()?;
        Ok(state)
    }

    /// Builds a snapshot without checking the invariant.
    ///
    /// Only used internally after arithmetic that preserves it by
    /// construction.
    pub(crate) const fn from_parts(
        reserve_x: Amount,
        reserve_y: Amount,
        total_shares: Shares,
    ) -> Self {
        Self {
            reserve_x,
            reserve_y,
            total_shares,
        }
    }

    /// Checks the empty/non-empty invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] when the fields disagree about
    /// whether the pool is empty.
    pub fn validate(&self) -> crate::error::Result<()> {
        let zeros = [
            self.reserve_x.is_zero(),
            self.reserve_y.is_zero(),
            self.total_shares.is_zero(),
        ];
        let all_zero = zeros.iter().all(|z| *z);
        let none_zero = zeros.iter().all(|z| !*z);
        if all_zero || none_zero {
            Ok(())
        } else {
            Err(AmmError::InvalidState(
                "reserves and shares must be all zero or all positive",
            ))
        }
    }

    /// Reserve of asset X.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Reserve of asset Y.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Outstanding LP shares.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` when no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a swap in `direction`.
    pub const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Returns a copy with the input/output reserves of `direction` replaced.
    pub(crate) const fn with_reserves_for(
        &self,
        direction: SwapDirection,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Self {
        match direction {
            SwapDirection::XToY => Self::from_parts(reserve_in, reserve_out, self.total_shares),
            SwapDirection::YToX => Self::from_parts(reserve_out, reserve_in, self.total_shares),
        }
    }

    /// The constant-product invariant `reserve_x × reserve_y`, or `None`
    /// if it does not fit in `u128`.
    #[must_use]
    pub const fn product(&self) -> Option<u128> {
        self.reserve_x.get().checked_mul(self.reserve_y.get())
    }

    /// Marginal price of X in units of Y (`reserve_y / reserve_x`), or
    /// `0.0` for an empty pool.
    #[must_use]
    pub fn spot_price_y_per_x(&self) -> f64 {
        if self.reserve_x.is_zero() || self.reserve_y.is_zero() {
            return 0.0;
        }
        self.reserve_y.get() as f64 / self.reserve_x.get() as f64
    }

    /// Fraction of the pool owned by `holder_shares`, in `[0, 1]` for a
    /// holder within the supply, or `0.0` when no shares exist.
    #[must_use]
    pub fn share_of_pool(&self, holder_shares: Shares) -> f64 {
        if self.total_shares.is_zero() {
            return 0.0;
        }
        holder_shares.get() as f64 / self.total_shares.get() as f64
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(x={}, y={}, shares={})",
            self.reserve_x, self.reserve_y, self.total_shares
        )
    }
}
