//! Result of quoting a swap.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// Ephemeral outcome of a swap quote.
///
/// Carries the requested input, the direction, the fee charged on the
/// input and the computed output. A quote against an empty pool or with
/// a zero input is valid and has a zero output; it is
/// [`apply_swap`](crate::pool::PoolMath::apply_swap) that refuses to
/// execute such a swap.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, SwapDirection, SwapQuote};
///
/// let quote = SwapQuote::new(
///     SwapDirection::XToY,
///     Amount::new(1_000),
///     Amount::new(3),
///     Amount::new(977),
/// );
/// assert!(quote.ensure_min_out(Amount::new(970)).is_ok());
/// assert!(quote.ensure_min_out(Amount::new(980)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    fee: Amount,
    amount_out: Amount,
}

impl SwapQuote {
    /// Assembles a quote from its parts.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        fee: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            fee,
            amount_out,
        }
    }

    /// A quote that produces nothing.
    pub const fn zero(direction: SwapDirection, amount_in: Amount) -> Self {
        Self::new(direction, amount_in, Amount::ZERO, Amount::ZERO)
    }

    /// Swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Requested input amount, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Fee taken from the input.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Input left after the fee, the part priced by the curve.
    pub const fn amount_in_after_fee(&self) -> Amount {
        Amount::new(self.amount_in.get().saturating_sub(self.fee.get()))
    }

    /// Quoted output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns `true` if the swap would pay out nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount_out.is_zero()
    }

    /// Realized rate `amount_out / amount_in`, or `0.0` for a zero input.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        if self.amount_in.is_zero() {
            return 0.0;
        }
        self.amount_out.get() as f64 / self.amount_in.get() as f64
    }

    /// Slippage guard for transaction construction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SlippageExceeded`] if the quoted output is below
    /// `min_out`.
    pub const fn ensure_min_out(&self, min_out: Amount) -> crate::error::Result<()> {
        if self.amount_out.get() < min_out.get() {
            return Err(AmmError::SlippageExceeded {
                expected_min: min_out.get(),
                actual: self.amount_out.get(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({}, in={}, fee={}, out={})",
            self.direction, self.amount_in, self.fee, self.amount_out
        )
    }
}
