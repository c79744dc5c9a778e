//! Value types of the constant-product pool model.
//!
//! Amounts and shares are `u128` newtypes in the asset's smallest unit,
//! fees are basis points, and every division names its [`Rounding`].
//! [`PoolState`] is the snapshot every pool operation consumes and
//! produces; the quote types describe one operation's outcome.

mod amount;
mod basis_points;
mod fixed_point_scale;
mod holder_balances;
mod liquidity_quote;
mod pool_state;
mod rounding;
mod shares;
mod swap_direction;
mod swap_quote;

pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use fixed_point_scale::FixedPointScale;
pub use holder_balances::HolderBalances;
pub use liquidity_quote::{BurnQuote, MintKind, MintQuote};
pub use pool_state::PoolState;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_quote::SwapQuote;
