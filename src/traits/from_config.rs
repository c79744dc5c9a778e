//! Construction from a validated configuration.

use crate::error::AmmError;

/// Builds `Self` from a configuration value, validating it first.
///
/// There is no blanket implementation; each pairing is written out so the
/// validation it performs is explicit.
///
/// ```
/// use cpmm_math::config::PoolMathConfig;
/// use cpmm_math::pool::PoolMath;
/// use cpmm_math::traits::FromConfig;
///
/// let math = PoolMath::from_config(&PoolMathConfig::default());
/// assert!(math.is_ok());
/// ```
pub trait FromConfig<C> {
    /// Creates an instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] or [`AmmError::InvalidFee`]
    /// if `config` does not validate.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
