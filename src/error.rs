//! Unified error type for pool math.
//!
//! Every fallible operation in the crate returns [`AmmError`]. None of the
//! variants is fatal: they all describe an input that the pool cannot
//! accept, and the caller decides whether to surface a message, adjust the
//! parameters, or abort building the transaction.

use thiserror::Error;

/// Errors produced by quoting, applying, and simulating pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A zero or non-numeric amount was supplied.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A swap would exhaust or exceed the output-side reserve, or the pool
    /// holds no liquidity at all.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The first deposit into an empty pool does not clear the minimum
    /// initial share floor.
    #[error("initial deposit mints {shares} shares, must exceed {minimum}")]
    BelowMinimumInitialShares {
        /// Shares the deposit would have minted.
        shares: u128,
        /// Configured floor.
        minimum: u128,
    },

    /// A proportional deposit rounds down to zero shares.
    #[error("deposit does not increase shares")]
    NoShareIncrease,

    /// A burn requests more shares than are outstanding.
    #[error("burn of {requested} shares exceeds supply of {supply}")]
    ExceedsShareSupply {
        /// Shares requested.
        requested: u128,
        /// Outstanding share supply.
        supply: u128,
    },

    /// A burn requests more shares than the holder owns.
    #[error("burn of {requested} shares exceeds holder balance of {balance}")]
    ExceedsHolderBalance {
        /// Shares requested.
        requested: u128,
        /// Shares held.
        balance: u128,
    },

    /// The holder does not have enough of the input asset.
    #[error("insufficient balance: need {required}, have {available}")]
    InsufficientBalance {
        /// Amount the operation needs.
        required: u128,
        /// Amount the holder has.
        available: u128,
    },

    /// A quoted amount fell below the caller's minimum.
    #[error("slippage exceeded: minimum {expected_min}, quoted {actual}")]
    SlippageExceeded {
        /// Minimum acceptable amount.
        expected_min: u128,
        /// Amount actually quoted.
        actual: u128,
    },

    /// An intermediate value does not fit in `u128`.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would go below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The fee setting is unusable.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A pool snapshot violates the empty/non-empty invariant.
    #[error("invalid pool state: {0}")]
    InvalidState(&'static str),

    /// The simulated pool has no record of the holder.
    #[error("unknown holder")]
    UnknownHolder,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_below_minimum() {
        let e = AmmError::BelowMinimumInitialShares {
            shares: 1,
            minimum: 1_000,
        };
        assert_eq!(
            e.to_string(),
            "initial deposit mints 1 shares, must exceed 1000"
        );
    }

    #[test]
    fn display_static_messages() {
        assert_eq!(
            AmmError::InvalidAmount("zero").to_string(),
            "invalid amount: zero"
        );
        assert_eq!(
            AmmError::InsufficientLiquidity.to_string(),
            "insufficient liquidity"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            AmmError::ExceedsShareSupply {
                requested: 2,
                supply: 1
            },
            AmmError::ExceedsShareSupply {
                requested: 2,
                supply: 1
            }
        );
        assert_ne!(AmmError::NoShareIncrease, AmmError::DivisionByZero);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<AmmError>();
    }
}
