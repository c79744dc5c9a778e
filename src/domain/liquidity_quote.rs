//! Results of quoting a deposit (mint) or a withdrawal (burn).

use core::fmt;

use super::{Amount, Shares};
use crate::error::AmmError;

/// How a deposit was priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MintKind {
    /// First deposit into an empty pool, priced by the geometric mean.
    Initial,
    /// Deposit into a live pool, priced by the binding reserve ratio.
    Proportional,
}

/// Outcome of a deposit quote.
///
/// `amount_x` / `amount_y` are what the depositor offered and what the
/// pool takes. `used_x` / `used_y` are the amounts that actually back the
/// minted shares at the current ratio; the difference
/// ([`excess_x`](Self::excess_x), [`excess_y`](Self::excess_y)) is
/// donated to the pool unless the caller chooses to refund it by
/// depositing only the used amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MintQuote {
    kind: MintKind,
    shares: Shares,
    amount_x: Amount,
    amount_y: Amount,
    used_x: Amount,
    used_y: Amount,
}

impl MintQuote {
    pub(crate) const fn initial(shares: Shares, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            kind: MintKind::Initial,
            shares,
            amount_x,
            amount_y,
            used_x: amount_x,
            used_y: amount_y,
        }
    }

    pub(crate) const fn proportional(
        shares: Shares,
        amount_x: Amount,
        amount_y: Amount,
        used_x: Amount,
        used_y: Amount,
    ) -> Self {
        Self {
            kind: MintKind::Proportional,
            shares,
            amount_x,
            amount_y,
            used_x,
            used_y,
        }
    }

    /// Pricing path taken.
    #[must_use]
    pub const fn kind(&self) -> MintKind {
        self.kind
    }

    /// Shares minted.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Asset X deposited.
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Asset Y deposited.
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// Asset X backing the minted shares.
    pub const fn used_x(&self) -> Amount {
        self.used_x
    }

    /// Asset Y backing the minted shares.
    pub const fn used_y(&self) -> Amount {
        self.used_y
    }

    /// Asset X deposited beyond the binding ratio.
    pub const fn excess_x(&self) -> Amount {
        Amount::new(self.amount_x.get().saturating_sub(self.used_x.get()))
    }

    /// Asset Y deposited beyond the binding ratio.
    pub const fn excess_y(&self) -> Amount {
        Amount::new(self.amount_y.get().saturating_sub(self.used_y.get()))
    }

    /// Minimum-shares guard for transaction construction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SlippageExceeded`] if fewer than `min_shares`
    /// would be minted.
    pub const fn ensure_min_shares(&self, min_shares: Shares) -> crate::error::Result<()> {
        if self.shares.get() < min_shares.get() {
            return Err(AmmError::SlippageExceeded {
                expected_min: min_shares.get(),
                actual: self.shares.get(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for MintQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MintQuote({:?}, x={}, y={}, shares={})",
            self.kind, self.amount_x, self.amount_y, self.shares
        )
    }
}

/// Outcome of a withdrawal quote: the share of each reserve paid out for
/// `shares` burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurnQuote {
    shares: Shares,
    amount_x: Amount,
    amount_y: Amount,
}

impl BurnQuote {
    pub(crate) const fn new(shares: Shares, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            shares,
            amount_x,
            amount_y,
        }
    }

    /// Shares burned.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Asset X paid out.
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Asset Y paid out.
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// Minimum-withdrawal guard for transaction construction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SlippageExceeded`] for the first side whose
    /// payout is below its minimum.
    pub const fn ensure_min_amounts(
        &self,
        min_x: Amount,
        min_y: Amount,
    ) -> crate::error::Result<()> {
        if self.amount_x.get() < min_x.get() {
            return Err(AmmError::SlippageExceeded {
                expected_min: min_x.get(),
                actual: self.amount_x.get(),
            });
        }
        if self.amount_y.get() < min_y.get() {
            return Err(AmmError::SlippageExceeded {
                expected_min: min_y.get(),
                actual: self.amount_y.get(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BurnQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BurnQuote(shares={}, x={}, y={})",
            self.shares, self.amount_x, self.amount_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_uses_everything() {
        let q = MintQuote::initial(Shares::new(2_000), Amount::new(1_000), Amount::new(4_000));
        assert_eq!(q.kind(), MintKind::Initial);
        assert_eq!(q.excess_x(), Amount::ZERO);
        assert_eq!(q.excess_y(), Amount::ZERO);
    }

    #[test]
    fn proportional_reports_excess() {
        let q = MintQuote::proportional(
            Shares::new(10),
            Amount::new(100),
            Amount::new(300),
            Amount::new(100),
            Amount::new(200),
        );
        assert_eq!(q.kind(), MintKind::Proportional);
        assert_eq!(q.excess_x(), Amount::ZERO);
        assert_eq!(q.excess_y(), Amount::new(100));
    }

    #[test]
    fn min_shares_guard() {
        let q = MintQuote::initial(Shares::new(2_000), Amount::new(1_000), Amount::new(4_000));
        assert!(q.ensure_min_shares(Shares::new(2_000)).is_ok());
        assert_eq!(
            q.ensure_min_shares(Shares::new(2_001)),
            Err(AmmError::SlippageExceeded {
                expected_min: 2_001,
                actual: 2_000
            })
        );
    }

    #[test]
    fn burn_min_amounts_guard() {
        let q = BurnQuote::new(Shares::new(500), Amount::new(250), Amount::new(240));
        assert!(q.ensure_min_amounts(Amount::new(250), Amount::new(240)).is_ok());
        assert_eq!(
            q.ensure_min_amounts(Amount::new(250), Amount::new(241)),
            Err(AmmError::SlippageExceeded {
                expected_min: 241,
                actual: 240
            })
        );
        assert!(q.ensure_min_amounts(Amount::new(251), Amount::ZERO).is_err());
    }

    #[test]
    fn display() {
        let q = BurnQuote::new(Shares::new(500), Amount::new(250), Amount::new(250));
        assert_eq!(q.to_string(), "BurnQuote(shares=500, x=250, y=250)");
    }
}
