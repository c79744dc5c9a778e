//! Common re-exports.
//!
//! ```rust
//! use cpmm_math::prelude::*;
//! ```

pub use crate::config::{FeePolicy, PoolMathConfig};
pub use crate::domain::{
    Amount, BasisPoints, BurnQuote, FixedPointScale, HolderBalances, MintKind, MintQuote,
    PoolState, Rounding, Shares, SwapDirection, SwapQuote,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::PoolMath;
#[cfg(feature = "simulation")]
pub use crate::sim::SimulatedPool;
pub use crate::traits::{FromConfig, PoolStateSource};
