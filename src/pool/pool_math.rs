//! Constant-product pricing, minting and burning.
//!
//! The pool holds reserves `x` and `y` and keeps `x × y` from decreasing.
//! A swap charges its fee on the input before pricing:
//!
//! 1. `fee = ceil(amount_in × fee_bps / bps_denominator)`
//! 2. `after_fee = amount_in − fee`
//! 3. `amount_out = floor(reserve_out × after_fee / (reserve_in + after_fee))`
//! 4. `reserve_in += amount_in` (or `after_fee` under [`FeePolicy::Exclude`])
//! 5. `reserve_out −= amount_out`
//!
//! Liquidity is tracked in shares. The first deposit mints
//! `floor(√(x × y))` and must clear the configured floor; later deposits
//! mint `min(Δx × S / x, Δy × S / y)`; burning `s` shares pays out
//! `s / S` of each reserve.
//!
//! Every function here takes a [`PoolState`] by reference and returns
//! values or the next snapshot. Nothing is mutated in place.
//!
//! [`FeePolicy::Exclude`]: crate::config::FeePolicy::Exclude

use tracing::debug;

use crate::config::PoolMathConfig;
use crate::domain::{
    Amount, BasisPoints, BurnQuote, HolderBalances, MintQuote, PoolState, Rounding, Shares,
    SwapDirection, SwapQuote,
};
use crate::error::{AmmError, Result};
use crate::math::{sqrt_product, CheckedArithmetic};
use crate::traits::{FromConfig, PoolStateSource};

/// Shares minted by the first deposit into an empty pool.
///
/// `floor(√(amount_x × amount_y))`, which does not depend on argument
/// order. The result must be strictly greater than
/// `minimum_initial_shares`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero.
/// - [`AmmError::BelowMinimumInitialShares`] if the deposit is too small.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, Shares};
/// use cpmm_math::pool::initial_shares;
///
/// let minted = initial_shares(Amount::new(60_000), Amount::new(60_000), Shares::new(1_000));
/// assert_eq!(minted, Ok(Shares::new(60_000)));
/// assert!(initial_shares(Amount::new(1), Amount::new(1), Shares::new(1_000)).is_err());
/// ```
pub fn initial_shares(
    amount_x: Amount,
    amount_y: Amount,
    minimum_initial_shares: Shares,
) -> Result<Shares> {
    if amount_x.is_zero() || amount_y.is_zero() {
        return Err(AmmError::InvalidAmount(
            "initial deposit needs both assets",
        ));
    }
    let shares = Shares::new(sqrt_product(amount_x.get(), amount_y.get()));
    if shares <= minimum_initial_shares {
        return Err(AmmError::BelowMinimumInitialShares {
            shares: shares.get(),
            minimum: minimum_initial_shares.get(),
        });
    }
    Ok(shares)
}

/// Stateless calculator for a two-asset constant-product pool.
///
/// A `PoolMath` only holds its [`PoolMathConfig`]; it is `Copy`,
/// `Send` and `Sync`, and can be shared freely. Callers that keep a
/// shared [`PoolState`] serialize their own read-quote-apply sequences.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, PoolState, SwapDirection};
/// use cpmm_math::pool::PoolMath;
///
/// let math = PoolMath::default();
/// let (state, minted) = math
///     .apply_mint(&PoolState::EMPTY, Amount::new(50_000_000_000), Amount::new(50_000_000_000))
///     .expect("first deposit");
/// assert_eq!(minted.shares().get(), 50_000_000_000);
///
/// let (next, quote) = math
///     .apply_swap(&state, Amount::new(1_000_000_000), SwapDirection::XToY)
///     .expect("swap");
/// assert_eq!(quote.amount_out(), Amount::new(977_508_480));
/// assert_eq!(next.reserve_x(), Amount::new(51_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolMath {
    config: PoolMathConfig,
}

impl FromConfig<PoolMathConfig> for PoolMath {
    fn from_config(config: &PoolMathConfig) -> Result<Self> {
        Self::new(*config)
    }
}

impl PoolMath {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolMathConfig::validate`] failures.
    pub fn new(config: PoolMathConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PoolMathConfig {
        &self.config
    }

    // -- swaps --------------------------------------------------------------

    fn swap_fee(&self, amount_in: Amount) -> Result<Amount> {
        self.config
            .fee_bps()
            .apply(amount_in, self.config.bps_denominator(), Rounding::Up)
    }

    /// Output of selling `amount_in` against `reserve_in`/`reserve_out`.
    ///
    /// A zero input or an empty side quotes `0` rather than failing, so
    /// a UI can preview freely; [`apply_swap`](Self::apply_swap) is where
    /// such swaps are refused.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `reserve_in + amount_in` does not
    /// fit in `u128`.
    pub fn quote_swap(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Amount> {
        Ok(self.swap_parts(reserve_in, reserve_out, amount_in)?.1)
    }

    /// Returns `(fee, amount_out)`.
    fn swap_parts(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<(Amount, Amount)> {
        if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }
        let fee = self.swap_fee(amount_in)?;
        let after_fee = amount_in.safe_sub(&fee)?;
        let denominator = reserve_in
            .checked_add(&after_fee)
            .ok_or(AmmError::Overflow("swap denominator overflow"))?;
        let amount_out = reserve_out.mul_div(after_fee, denominator, Rounding::Down)?;
        Ok((fee, amount_out))
    }

    /// Quotes a swap of `amount_in` in `direction` against `state`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidState`] if `state` is inconsistent.
    /// - [`AmmError::Overflow`] as for [`quote_swap`](Self::quote_swap).
    pub fn quote_swap_for(
        &self,
        state: &PoolState,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapQuote> {
        state.validate()?;
        let (reserve_in, reserve_out) = state.reserves_for(direction);
        let (fee, amount_out) = self.swap_parts(reserve_in, reserve_out, amount_in)?;
        let quote = SwapQuote::new(direction, amount_in, fee, amount_out);
        debug!(
            %direction,
            reserve_in = %reserve_in,
            reserve_out = %reserve_out,
            amount_in = %amount_in,
            fee = %fee,
            amount_out = %amount_out,
            "swap quoted"
        );
        Ok(quote)
    }

    /// Quotes a swap against whatever `source` currently holds.
    ///
    /// # Errors
    ///
    /// Propagates the source's error, then as for
    /// [`quote_swap_for`](Self::quote_swap_for).
    pub fn quote_swap_from<S>(
        &self,
        source: &S,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapQuote>
    where
        S: PoolStateSource + ?Sized,
    {
        let state = source.pool_state()?;
        self.quote_swap_for(&state, amount_in, direction)
    }

    /// Quotes a swap after checking the holder can pay for it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if the holder lacks `amount_in`
    ///   of the input asset.
    /// - Otherwise as for [`quote_swap_for`](Self::quote_swap_for).
    pub fn quote_swap_for_holder(
        &self,
        state: &PoolState,
        holder: &HolderBalances,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapQuote> {
        holder.ensure_can_sell(direction, amount_in)?;
        self.quote_swap_for(state, amount_in, direction)
    }

    /// Executes a swap and returns the next snapshot with its quote.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty, the
    ///   output rounds to zero, or the output would not leave the output
    ///   reserve strictly positive.
    /// - [`AmmError::Overflow`] if the input reserve overflows.
    pub fn apply_swap(
        &self,
        state: &PoolState,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<(PoolState, SwapQuote)> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be positive"));
        }
        if state.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let quote = self.quote_swap_for(state, amount_in, direction)?;
        let (reserve_in, reserve_out) = state.reserves_for(direction);
        if quote.amount_out().is_zero() || quote.amount_out() >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        let credited = if self.config.fee_policy().retains_fee() {
            amount_in
        } else {
            quote.amount_in_after_fee()
        };
        let next_in = reserve_in
            .checked_add(&credited)
            .ok_or(AmmError::Overflow("input reserve overflow"))?;
        let next_out = reserve_out.safe_sub(&quote.amount_out())?;
        let next = state.with_reserves_for(direction, next_in, next_out);
        debug!(before = %state, after = %next, "swap applied");
        Ok((next, quote))
    }

    // -- liquidity ----------------------------------------------------------

    /// Shares for the first deposit, using the configured floor.
    ///
    /// # Errors
    ///
    /// As for [`initial_shares`].
    pub fn quote_initial_mint(&self, amount_x: Amount, amount_y: Amount) -> Result<Shares> {
        initial_shares(amount_x, amount_y, self.config.minimum_initial_shares())
    }

    /// Shares for a deposit into a live pool.
    ///
    /// Each side is priced independently against its reserve and the
    /// smaller result is minted. The whole deposit still goes into the
    /// pool; [`MintQuote::excess_x`] / [`MintQuote::excess_y`] report the
    /// part not backing any share so a caller can refund it instead.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::NoShareIncrease`] if the deposit mints zero shares.
    /// - [`AmmError::Overflow`] on intermediate overflow.
    pub fn quote_proportional_mint(
        &self,
        state: &PoolState,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<MintQuote> {
        state.validate()?;
        if amount_x.is_zero() || amount_y.is_zero() {
            return Err(AmmError::InvalidAmount("deposit needs both assets"));
        }
        if state.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let supply = state.total_shares().as_amount();
        let share_x = amount_x.mul_div(supply, state.reserve_x(), Rounding::Down)?;
        let share_y = amount_y.mul_div(supply, state.reserve_y(), Rounding::Down)?;
        let shares = Shares::from_amount(share_x.min(share_y));
        if shares.is_zero() {
            return Err(AmmError::NoShareIncrease);
        }

        let used_x = shares
            .as_amount()
            .mul_div(state.reserve_x(), supply, Rounding::Up)?;
        let used_y = shares
            .as_amount()
            .mul_div(state.reserve_y(), supply, Rounding::Up)?;
        let quote = MintQuote::proportional(shares, amount_x, amount_y, used_x, used_y);
        debug!(
            %state,
            amount_x = %amount_x,
            amount_y = %amount_y,
            shares = %shares,
            excess_x = %quote.excess_x(),
            excess_y = %quote.excess_y(),
            "proportional mint quoted"
        );
        Ok(quote)
    }

    /// Quotes a deposit, choosing the initial or proportional path from
    /// whether `state` is empty.
    ///
    /// # Errors
    ///
    /// As for [`quote_initial_mint`](Self::quote_initial_mint) or
    /// [`quote_proportional_mint`](Self::quote_proportional_mint).
    pub fn quote_mint(
        &self,
        state: &PoolState,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<MintQuote> {
        state.validate()?;
        if state.is_empty() {
            let shares = self.quote_initial_mint(amount_x, amount_y)?;
            debug!(
                amount_x = %amount_x,
                amount_y = %amount_y,
                shares = %shares,
                "initial mint quoted"
            );
            return Ok(MintQuote::initial(shares, amount_x, amount_y));
        }
        self.quote_proportional_mint(state, amount_x, amount_y)
    }

    /// Deposits `amount_x` and `amount_y` and returns the next snapshot.
    ///
    /// # Errors
    ///
    /// As for [`quote_mint`](Self::quote_mint), plus
    /// [`AmmError::Overflow`] if a reserve or the share supply overflows.
    pub fn apply_mint(
        &self,
        state: &PoolState,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<(PoolState, MintQuote)> {
        let quote = self.quote_mint(state, amount_x, amount_y)?;
        let next = PoolState::from_parts(
            state.reserve_x().safe_add(&amount_x)?,
            state.reserve_y().safe_add(&amount_y)?,
            state.total_shares().safe_add(&quote.shares())?,
        );
        debug!(before = %state, after = %next, "mint applied");
        Ok((next, quote))
    }

    /// Assets paid out for burning `shares`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::ExceedsShareSupply`] if `shares` exceeds the supply.
    /// - [`AmmError::Overflow`] on intermediate overflow.
    pub fn quote_burn(&self, state: &PoolState, shares: Shares) -> Result<BurnQuote> {
        state.validate()?;
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("burn amount must be positive"));
        }
        let supply = state.total_shares();
        if shares > supply {
            return Err(AmmError::ExceedsShareSupply {
                requested: shares.get(),
                supply: supply.get(),
            });
        }
        let amount_x = state
            .reserve_x()
            .mul_div(shares.as_amount(), supply.as_amount(), Rounding::Down)?;
        let amount_y = state
            .reserve_y()
            .mul_div(shares.as_amount(), supply.as_amount(), Rounding::Down)?;
        debug!(%state, shares = %shares, amount_x = %amount_x, amount_y = %amount_y, "burn quoted");
        Ok(BurnQuote::new(shares, amount_x, amount_y))
    }

    /// Quotes a burn after checking the holder owns the shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ExceedsHolderBalance`] if the holder owns fewer than
    ///   `shares`.
    /// - Otherwise as for [`quote_burn`](Self::quote_burn).
    pub fn quote_burn_for_holder(
        &self,
        state: &PoolState,
        holder: &HolderBalances,
        shares: Shares,
    ) -> Result<BurnQuote> {
        holder.ensure_can_burn(shares)?;
        self.quote_burn(state, shares)
    }

    /// Burns `shares` and returns the next snapshot. Burning the whole
    /// supply returns the pool to [`PoolState::EMPTY`].
    ///
    /// # Errors
    ///
    /// As for [`quote_burn`](Self::quote_burn).
    pub fn apply_burn(&self, state: &PoolState, shares: Shares) -> Result<(PoolState, BurnQuote)> {
        let quote = self.quote_burn(state, shares)?;
        let next = PoolState::from_parts(
            state.reserve_x().safe_sub(&quote.amount_x())?,
            state.reserve_y().safe_sub(&quote.amount_y())?,
            state.total_shares().safe_sub(&shares)?,
        );
        debug!(before = %state, after = %next, "burn applied");
        Ok((next, quote))
    }

    // -- helpers for transaction construction -------------------------------

    /// Counter-asset amount that matches `amount` at the current reserve
    /// ratio.
    ///
    /// `direction` names the given side: [`SwapDirection::XToY`] means
    /// `amount` is asset X and the result is asset Y. The result rounds up
    /// so the given side is the binding one in a proportional mint.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::Overflow`] on intermediate overflow.
    pub fn paired_amount(
        &self,
        state: &PoolState,
        amount: Amount,
        direction: SwapDirection,
    ) -> Result<Amount> {
        state.validate()?;
        if state.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let (reserve_given, reserve_other) = state.reserves_for(direction);
        amount.mul_div(reserve_other, reserve_given, Rounding::Up)
    }

    /// Smallest acceptable output for a quoted `amount` under
    /// `tolerance`: `floor(amount × (denominator − tolerance) / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `tolerance` is 100% or more.
    /// - [`AmmError::Overflow`] on intermediate overflow.
    pub fn min_output(&self, amount: Amount, tolerance: BasisPoints) -> Result<Amount> {
        let denominator = self.config.bps_denominator();
        if !tolerance.is_below(denominator) {
            return Err(AmmError::InvalidAmount(
                "slippage tolerance must be below 100%",
            ));
        }
        let kept = BasisPoints::new(tolerance.complement(denominator)?);
        kept.apply(amount, denominator, Rounding::Down)
    }

    /// Size of `amount_in` relative to the input reserve, in basis points,
    /// rounded up.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::Overflow`] if the ratio does not fit in `u32`
    ///   basis points.
    pub fn price_impact_bps(
        &self,
        state: &PoolState,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<BasisPoints> {
        state.validate()?;
        if state.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let (reserve_in, _) = state.reserves_for(direction);
        let scaled = amount_in.mul_div(
            Amount::new(u128::from(self.config.bps_denominator())),
            reserve_in,
            Rounding::Up,
        )?;
        u32::try_from(scaled.get())
            .map(BasisPoints::new)
            .map_err(|_| AmmError::Overflow("price impact exceeds u32 basis points"))
    }
}
