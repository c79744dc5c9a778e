//! Injectable parameters for the pool math.
//!
//! [`PoolMathConfig`] carries the fee, the basis-point denominator, the
//! first-deposit share floor, the token decimal scale and the
//! [`FeePolicy`]. Its defaults reproduce a 0.30%-fee, 6-decimal pool.

mod fee_policy;
mod pool_math_config;

pub use fee_policy::FeePolicy;
pub use pool_math_config::{PoolMathConfig, DEFAULT_MINIMUM_INITIAL_SHARES};
