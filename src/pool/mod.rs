//! The constant-product calculator.
//!
//! [`PoolMath`] quotes and applies swaps, deposits and withdrawals
//! against a [`PoolState`](crate::domain::PoolState) snapshot.
//! [`initial_shares`] is the first-deposit rule on its own, for callers
//! that only need to validate a pool initialization.

mod pool_math;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool_math::{initial_shares, PoolMath};
