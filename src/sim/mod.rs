//! An in-memory pool for demos and tests.
//!
//! [`SimulatedPool`] plays the part of the on-chain contract: it owns the
//! snapshot and every holder's balances and serializes updates behind a
//! lock. Enabled by the `simulation` feature.

mod simulated_pool;

pub use simulated_pool::{SimulatedPool, FAUCET_TOKENS};
