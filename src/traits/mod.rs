//! Seams between the pool math and its callers.
//!
//! [`FromConfig`] builds a calculator from its configuration;
//! [`PoolStateSource`] lets a quote read from a live snapshot or from a
//! [`SimulatedPool`](crate::sim::SimulatedPool) interchangeably.

mod from_config;
mod state_source;

pub use from_config::FromConfig;
pub use state_source::PoolStateSource;
