//! Where a pool snapshot comes from.

use crate::domain::PoolState;

/// Anything that can produce the current [`PoolState`].
///
/// A dashboard that fetched reserves from chain passes the snapshot
/// itself; tests and demos pass a [`SimulatedPool`](crate::sim::SimulatedPool).
/// Quoting code takes `&impl PoolStateSource` and never needs to know
/// which.
pub trait PoolStateSource {
    /// Returns the snapshot to quote against.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`](crate::error::AmmError::InvalidState)
    /// if the source holds an inconsistent snapshot.
    fn pool_state(&self) -> crate::error::Result<PoolState>;
}

impl PoolStateSource for PoolState {
    fn pool_state(&self) -> crate::error::Result<PoolState> {
        self.validate()?;
        Ok(*self)
    }
}
