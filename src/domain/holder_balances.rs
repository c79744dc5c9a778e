//! Per-holder asset and share balances.

use core::fmt;

use super::{Amount, Shares, SwapDirection};
use crate::error::AmmError;

/// What one account holds outside the pool: both assets and its LP shares.
///
/// The pool math consumes a holder's balance to reject withdrawals and
/// swaps the holder cannot fund; [`SimulatedPool`](crate::sim::SimulatedPool)
/// keeps one of these per holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolderBalances {
    token_x: Amount,
    token_y: Amount,
    lp_shares: Shares,
}

impl HolderBalances {
    /// Creates a balance record.
    pub const fn new(token_x: Amount, token_y: Amount, lp_shares: Shares) -> Self {
        Self {
            token_x,
            token_y,
            lp_shares,
        }
    }

    /// Asset X held.
    pub const fn token_x(&self) -> Amount {
        self.token_x
    }

    /// Asset Y held.
    pub const fn token_y(&self) -> Amount {
        self.token_y
    }

    /// LP shares held.
    pub const fn lp_shares(&self) -> Shares {
        self.lp_shares
    }

    /// Balance of the asset sold by a swap in `direction`.
    pub const fn input_balance(&self, direction: SwapDirection) -> Amount {
        match direction {
            SwapDirection::XToY => self.token_x,
            SwapDirection::YToX => self.token_y,
        }
    }

    /// Checks the holder can pay `amount` of the input asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] otherwise.
    pub const fn ensure_can_sell(
        &self,
        direction: SwapDirection,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let available = self.input_balance(direction);
        if amount.get() > available.get() {
            return Err(AmmError::InsufficientBalance {
                required: amount.get(),
                available: available.get(),
            });
        }
        Ok(())
    }

    /// Checks the holder can burn `shares`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ExceedsHolderBalance`] otherwise.
    pub const fn ensure_can_burn(&self, shares: Shares) -> crate::error::Result<()> {
        if shares.get() > self.lp_shares.get() {
            return Err(AmmError::ExceedsHolderBalance {
                requested: shares.get(),
                balance: self.lp_shares.get(),
            });
        }
        Ok(())
    }

    /// Returns the balances after paying `x` and `y` and receiving
    /// `shares`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if either asset is short.
    /// - [`AmmError::Overflow`] if the share balance overflows.
    pub fn after_deposit(
        &self,
        x: Amount,
        y: Amount,
        shares: Shares,
    ) -> crate::error::Result<Self> {
        let token_x = debit(self.token_x, x)?;
        let token_y = debit(self.token_y, y)?;
        let lp_shares = self
            .lp_shares
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("holder share balance overflow"))?;
        Ok(Self::new(token_x, token_y, lp_shares))
    }

    /// Returns the balances after burning `shares` and receiving `x` and
    /// `y`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExceedsHolderBalance`] if the holder owns fewer shares.
    /// - [`AmmError::Overflow`] if an asset balance overflows.
    pub fn after_withdrawal(
        &self,
        shares: Shares,
        x: Amount,
        y: Amount,
    ) -> crate::error::Result<Self> {
        self.ensure_can_burn(shares)?;
        let lp_shares = self
            .lp_shares
            .checked_sub(&shares)
            .ok_or(AmmError::Underflow("holder share balance underflow"))?;
        let token_x = credit(self.token_x, x)?;
        let token_y = credit(self.token_y, y)?;
        Ok(Self::new(token_x, token_y, lp_shares))
    }

    /// Returns the balances after selling `amount_in` and receiving
    /// `amount_out` in `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if the input asset is short.
    /// - [`AmmError::Overflow`] if the output balance overflows.
    pub fn after_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        self.ensure_can_sell(direction, amount_in)?;
        match direction {
            SwapDirection::XToY => Ok(Self::new(
                debit(self.token_x, amount_in)?,
                credit(self.token_y, amount_out)?,
                self.lp_shares,
            )),
            SwapDirection::YToX => Ok(Self::new(
                credit(self.token_x, amount_out)?,
                debit(self.token_y, amount_in)?,
                self.lp_shares,
            )),
        }
    }

    /// Returns the balances after an external credit of both assets
    /// (a faucet drop or a transfer in).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a balance overflows.
    pub fn after_credit(&self, x: Amount, y: Amount) -> crate::error::Result<Self> {
        Ok(Self::new(
            credit(self.token_x, x)?,
            credit(self.token_y, y)?,
            self.lp_shares,
        ))
    }
}

fn debit(balance: Amount, amount: Amount) -> crate::error::Result<Amount> {
    balance
        .checked_sub(&amount)
        .ok_or(AmmError::InsufficientBalance {
            required: amount.get(),
            available: balance.get(),
        })
}

fn credit(balance: Amount, amount: Amount) -> crate::error::Result<Amount> {
    balance
        .checked_add(&amount)
        .ok_or(AmmError::Overflow("holder balance overflow"))
}

impl fmt::Display for HolderBalances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HolderBalances(x={}, y={}, lp={})",
            self.token_x, self.token_y, self.lp_shares
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn holder() -> HolderBalances {
        HolderBalances::new(Amount::new(5_000), Amount::new(2_000), Shares::new(100))
    }

    #[test]
    fn input_balance_by_direction() {
        assert_eq!(holder().input_balance(SwapDirection::XToY), Amount::new(5_000));
        assert_eq!(holder().input_balance(SwapDirection::YToX), Amount::new(2_000));
    }

    #[test]
    fn cannot_sell_more_than_held() {
        assert!(holder()
            .ensure_can_sell(SwapDirection::YToX, Amount::new(2_000))
            .is_ok());
        assert_eq!(
            holder().ensure_can_sell(SwapDirection::YToX, Amount::new(2_001)),
            Err(AmmError::InsufficientBalance {
                required: 2_001,
                available: 2_000
            })
        );
    }

    #[test]
    fn cannot_burn_more_than_held() {
        assert_eq!(
            holder().ensure_can_burn(Shares::new(101)),
            Err(AmmError::ExceedsHolderBalance {
                requested: 101,
                balance: 100
            })
        );
    }

    #[test]
    fn swap_moves_both_assets() {
        let Ok(after) = holder().after_swap(
            SwapDirection::XToY,
            Amount::new(1_000),
            Amount::new(390),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(after.token_x(), Amount::new(4_000));
        assert_eq!(after.token_y(), Amount::new(2_390));
        assert_eq!(after.lp_shares(), Shares::new(100));
    }

    #[test]
    fn deposit_and_withdrawal() {
        let Ok(after) = holder().after_deposit(
            Amount::new(1_000),
            Amount::new(500),
            Shares::new(50),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(
            after,
            HolderBalances::new(Amount::new(4_000), Amount::new(1_500), Shares::new(150))
        );

        let Ok(back) = after.after_withdrawal(
            Shares::new(150),
            Amount::new(10),
            Amount::new(20),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(back.lp_shares(), Shares::ZERO);
        assert_eq!(back.token_x(), Amount::new(4_010));
    }

    #[test]
    fn deposit_short_of_funds() {
        let result = holder().after_deposit(Amount::new(1), Amount::new(2_001), Shares::new(1));
        assert!(matches!(result, Err(AmmError::InsufficientBalance { .. })));
    }

    #[test]
    fn credit_adds_both_sides() {
        let Ok(after) = HolderBalances::default().after_credit(
            Amount::new(5_000),
            Amount::new(5_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(after.token_x(), Amount::new(5_000));
        assert_eq!(after.token_y(), Amount::new(5_000));
    }
}
