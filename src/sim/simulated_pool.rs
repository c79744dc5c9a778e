//! In-memory pool with per-holder balances.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::{
    Amount, BurnQuote, HolderBalances, MintQuote, PoolState, Shares, SwapDirection, SwapQuote,
};
use crate::error::{AmmError, Result};
use crate::pool::PoolMath;
use crate::traits::PoolStateSource;

/// Whole tokens of each asset handed out by [`SimulatedPool::faucet`].
pub const FAUCET_TOKENS: u64 = 5_000;

#[derive(Debug, Default)]
struct Ledger {
    state: PoolState,
    holders: HashMap<String, HolderBalances>,
}

impl Ledger {
    fn holder(&self, id: &str) -> Result<HolderBalances> {
        self.holders.get(id).copied().ok_or(AmmError::UnknownHolder)
    }

    fn commit(&mut self, holder: &str, state: PoolState, balances: HolderBalances) {
        self.state = state;
        self.holders.insert(holder.to_owned(), balances);
    }
}

/// A pool that owns its [`PoolState`] and the balances of every holder
/// trading against it.
///
/// Each operation takes one lock, quotes against the current snapshot,
/// checks the holder can afford it, then commits the new snapshot and the
/// holder's new balances together. A failed operation changes nothing.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, Shares, SwapDirection};
/// use cpmm_math::sim::SimulatedPool;
///
/// let pool = SimulatedPool::default();
/// pool.faucet("alice").expect("faucet");
/// let seed = Amount::new(1_000_000_000);
/// pool.add_liquidity("alice", seed, seed, Shares::ZERO)
///     .expect("initial deposit");
/// let quote = pool
///     .swap("alice", Amount::new(10_000_000), SwapDirection::XToY, Amount::ZERO)
///     .expect("swap");
/// assert!(quote.amount_out() > Amount::ZERO);
/// ```
#[derive(Debug, Default)]
pub struct SimulatedPool {
    math: PoolMath,
    ledger: Mutex<Ledger>,
}

impl SimulatedPool {
    /// Creates an empty pool priced by `math`.
    #[must_use]
    pub fn new(math: PoolMath) -> Self {
        Self {
            math,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    /// Creates a pool seeded with an existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if `state` is inconsistent.
    pub fn with_state(math: PoolMath, state: PoolState) -> Result<Self> {
        state.validate()?;
        Ok(Self {
            math,
            ledger: Mutex::new(Ledger {
                state,
                holders: HashMap::new(),
            }),
        })
    }

    /// The calculator in use.
    #[must_use]
    pub const fn math(&self) -> &PoolMath {
        &self.math
    }

    /// Current pool snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PoolState {
        self.ledger.lock().state
    }

    /// Balances of `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownHolder`] if `holder` was never credited.
    pub fn balances(&self, holder: &str) -> Result<HolderBalances> {
        self.ledger.lock().holder(holder)
    }

    /// Number of holders with a balance record.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.ledger.lock().holders.len()
    }

    /// Adds `x` and `y` to `holder`'s balances, creating the holder if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a balance overflows.
    pub fn credit(&self, holder: &str, x: Amount, y: Amount) -> Result<HolderBalances> {
        let mut ledger = self.ledger.lock();
        let current = ledger.holders.get(holder).copied().unwrap_or_default();
        let next = current.after_credit(x, y)?;
        ledger.holders.insert(holder.to_owned(), next);
        debug!(holder, x = %x, y = %y, "holder credited");
        Ok(next)
    }

    /// Credits [`FAUCET_TOKENS`] whole tokens of both assets at the
    /// configured scale.
    ///
    /// # Errors
    ///
    /// As for [`credit`](Self::credit).
    pub fn faucet(&self, holder: &str) -> Result<HolderBalances> {
        let drop = self.math.config().scale().from_whole(FAUCET_TOKENS);
        self.credit(holder, drop, drop)
    }

    /// Sells `amount_in` of the input asset for at least `min_out` of the
    /// output asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownHolder`] for an unknown holder.
    /// - [`AmmError::InsufficientBalance`] if the holder cannot pay.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_out`.
    /// - Anything [`PoolMath::apply_swap`] returns.
    pub fn swap(
        &self,
        holder: &str,
        amount_in: Amount,
        direction: SwapDirection,
        min_out: Amount,
    ) -> Result<SwapQuote> {
        let mut ledger = self.ledger.lock();
        let (next, balances, quote) = self
            .plan_swap(&ledger, holder, amount_in, direction, min_out)
            .inspect_err(|err| {
                warn!(holder, %direction, amount_in = %amount_in, error = %err, "swap rejected");
            })?;
        ledger.commit(holder, next, balances);
        Ok(quote)
    }

    fn plan_swap(
        &self,
        ledger: &Ledger,
        holder: &str,
        amount_in: Amount,
        direction: SwapDirection,
        min_out: Amount,
    ) -> Result<(PoolState, HolderBalances, SwapQuote)> {
        let balances = ledger.holder(holder)?;
        balances.ensure_can_sell(direction, amount_in)?;
        let (next, quote) = self.math.apply_swap(&ledger.state, amount_in, direction)?;
        quote.ensure_min_out(min_out)?;
        let balances = balances.after_swap(direction, amount_in, quote.amount_out())?;
        Ok((next, balances, quote))
    }

    /// Deposits `x` and `y` for at least `min_shares` new shares. An empty
    /// pool is initialized; a live pool mints proportionally and keeps any
    /// excess.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownHolder`] for an unknown holder.
    /// - [`AmmError::InsufficientBalance`] if the holder cannot pay.
    /// - [`AmmError::SlippageExceeded`] if fewer than `min_shares` are minted.
    /// - Anything [`PoolMath::apply_mint`] returns.
    pub fn add_liquidity(
        &self,
        holder: &str,
        x: Amount,
        y: Amount,
        min_shares: Shares,
    ) -> Result<MintQuote> {
        let mut ledger = self.ledger.lock();
        let (next, balances, quote) = self
            .plan_deposit(&ledger, holder, x, y, min_shares)
            .inspect_err(|err| {
                warn!(holder, x = %x, y = %y, error = %err, "deposit rejected");
            })?;
        ledger.commit(holder, next, balances);
        Ok(quote)
    }

    fn plan_deposit(
        &self,
        ledger: &Ledger,
        holder: &str,
        x: Amount,
        y: Amount,
        min_shares: Shares,
    ) -> Result<(PoolState, HolderBalances, MintQuote)> {
        let balances = ledger.holder(holder)?;
        let (next, quote) = self.math.apply_mint(&ledger.state, x, y)?;
        quote.ensure_min_shares(min_shares)?;
        let balances = balances.after_deposit(x, y, quote.shares())?;
        Ok((next, balances, quote))
    }

    /// Burns `shares` for at least `min_x` and `min_y`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownHolder`] for an unknown holder.
    /// - [`AmmError::ExceedsHolderBalance`] if the holder owns fewer shares.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    /// - Anything [`PoolMath::apply_burn`] returns.
    pub fn remove_liquidity(
        &self,
        holder: &str,
        shares: Shares,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<BurnQuote> {
        let mut ledger = self.ledger.lock();
        let (next, balances, quote) = self
            .plan_withdrawal(&ledger, holder, shares, min_x, min_y)
            .inspect_err(|err| {
                warn!(holder, shares = %shares, error = %err, "withdrawal rejected");
            })?;
        ledger.commit(holder, next, balances);
        Ok(quote)
    }

    fn plan_withdrawal(
        &self,
        ledger: &Ledger,
        holder: &str,
        shares: Shares,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<(PoolState, HolderBalances, BurnQuote)> {
        let balances = ledger.holder(holder)?;
        balances.ensure_can_burn(shares)?;
        let (next, quote) = self.math.apply_burn(&ledger.state, shares)?;
        quote.ensure_min_amounts(min_x, min_y)?;
        let balances = balances.after_withdrawal(shares, quote.amount_x(), quote.amount_y())?;
        Ok((next, balances, quote))
    }
}

impl PoolStateSource for SimulatedPool {
    fn pool_state(&self) -> Result<PoolState> {
        Ok(self.snapshot())
    }
}
