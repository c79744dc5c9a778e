//! # cpmm-math
//!
//! Arithmetic for a two-asset constant-product pool (`x × y = k`) with a
//! proportional fee on the input side and fungible LP shares.
//!
//! All quantities are `u128` integers in each asset's smallest unit
//! (6 decimals by default). Every operation reads an explicit
//! [`PoolState`](domain::PoolState) snapshot and returns a quote or the
//! next snapshot; nothing is mutated behind the caller's back.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `simulation` | yes | [`SimulatedPool`](sim::SimulatedPool): an in-memory pool with holder balances |
//! | `serde` | no | `Serialize` / `Deserialize` for config and value types |
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_math::prelude::*;
//!
//! let math = PoolMath::default();
//! let scale = math.config().scale();
//!
//! // seed 50 000 X and 50 000 Y
//! let (pool, minted) = math
//!     .apply_mint(&PoolState::EMPTY, scale.from_whole(50_000), scale.from_whole(50_000))
//!     .expect("initial deposit");
//! assert!(minted.shares() > Shares::ZERO);
//!
//! // preview, guard, then apply a 1 000 X sale
//! let quote = math
//!     .quote_swap_for(&pool, scale.from_whole(1_000), SwapDirection::XToY)
//!     .expect("quote");
//! assert_eq!(scale.format(quote.amount_out()), "977.50848");
//!
//! let min_out = math.min_output(quote.amount_out(), BasisPoints::new(50)).expect("tolerance");
//! quote.ensure_min_out(min_out).expect("within tolerance");
//!
//! let (pool, _) = math
//!     .apply_swap(&pool, scale.from_whole(1_000), SwapDirection::XToY)
//!     .expect("swap");
//! assert_eq!(pool.reserve_x(), scale.from_whole(51_000));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PoolState`](domain::PoolState), quotes |
//! | [`pool`]   | [`PoolMath`](pool::PoolMath): quote and apply swaps, mints, burns |
//! | [`config`] | [`PoolMathConfig`](config::PoolMathConfig) and [`FeePolicy`](config::FeePolicy) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig), [`PoolStateSource`](traits::PoolStateSource) |
//! | [`math`]   | Rounded division, integer square root, checked arithmetic |
//! | [`sim`]    | [`SimulatedPool`](sim::SimulatedPool) (feature `simulation`) |
//! | [`error`]  | [`AmmError`](error::AmmError) |
//! | [`prelude`] | Common re-exports |
//!
//! # Logging
//!
//! Quotes and state transitions emit `tracing` events at `debug`;
//! rejected simulated operations emit `warn`. The crate never installs a
//! subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
#[cfg(feature = "simulation")]
pub mod sim;
pub mod traits;
