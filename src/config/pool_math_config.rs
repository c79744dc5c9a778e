//! Parameters of the constant-product math.

use super::FeePolicy;
use crate::domain::{BasisPoints, FixedPointScale, Shares, BPS_DENOMINATOR};
use crate::error::AmmError;

/// Default share floor for the first deposit.
pub const DEFAULT_MINIMUM_INITIAL_SHARES: Shares = Shares::new(1_000);

/// Everything [`PoolMath`](crate::pool::PoolMath) needs besides the pool
/// snapshot.
///
/// | Field | Default |
/// |-------|---------|
/// | `fee_bps` | 30 (0.30%) |
/// | `bps_denominator` | 10 000 |
/// | `minimum_initial_shares` | 1 000 |
/// | `scale` | 6 decimals |
/// | `fee_policy` | [`FeePolicy::RetainInReserves`] |
///
/// # Validation
///
/// - `bps_denominator` is non-zero.
/// - `fee_bps` is strictly below `bps_denominator`.
///
/// With the `serde` feature a deserialized config goes through the same
/// validation; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use cpmm_math::config::PoolMathConfig;
/// use cpmm_math::domain::BasisPoints;
///
/// let config = PoolMathConfig::default().with_fee(BasisPoints::new(5));
/// assert!(config.is_ok());
/// assert!(PoolMathConfig::default().with_fee(BasisPoints::new(10_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolMathConfig"))]
pub struct PoolMathConfig {
    fee_bps: BasisPoints,
    bps_denominator: u32,
    minimum_initial_shares: Shares,
    scale: FixedPointScale,
    fee_policy: FeePolicy,
}

impl Default for PoolMathConfig {
    fn default() -> Self {
        Self {
            fee_bps: BasisPoints::DEFAULT_FEE,
            bps_denominator: BPS_DENOMINATOR,
            minimum_initial_shares: DEFAULT_MINIMUM_INITIAL_SHARES,
            scale: FixedPointScale::MICRO,
            fee_policy: FeePolicy::RetainInReserves,
        }
    }
}

impl PoolMathConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `bps_denominator` is zero.
    /// - [`AmmError::InvalidFee`] if `fee_bps ≥ bps_denominator`.
    pub fn new(
        fee_bps: BasisPoints,
        bps_denominator: u32,
        minimum_initial_shares: Shares,
        scale: FixedPointScale,
        fee_policy: FeePolicy,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee_bps,
            bps_denominator,
            minimum_initial_shares,
            scale,
            fee_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.bps_denominator == 0 {
            return Err(AmmError::InvalidConfiguration(
                "bps denominator must be non-zero",
            ));
        }
        if !self.fee_bps.is_below(self.bps_denominator) {
            return Err(AmmError::InvalidFee("fee must be below the bps denominator"));
        }
        Ok(())
    }

    /// Returns a copy with a different fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is not below the
    /// denominator.
    pub fn with_fee(self, fee_bps: BasisPoints) -> Result<Self, AmmError> {
        Self::new(
            fee_bps,
            self.bps_denominator,
            self.minimum_initial_shares,
            self.scale,
            self.fee_policy,
        )
    }

    /// Returns a copy with a different first-deposit share floor.
    #[must_use]
    pub const fn with_minimum_initial_shares(mut self, minimum: Shares) -> Self {
        self.minimum_initial_shares = minimum;
        self
    }

    /// Returns a copy with a different fixed-point scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: FixedPointScale) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with a different fee policy.
    #[must_use]
    pub const fn with_fee_policy(mut self, fee_policy: FeePolicy) -> Self {
        self.fee_policy = fee_policy;
        self
    }

    /// Swap fee in basis points of the input.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }

    /// Denominator of the basis-point scale.
    #[must_use]
    pub const fn bps_denominator(&self) -> u32 {
        self.bps_denominator
    }

    /// Shares the first deposit must strictly exceed.
    pub const fn minimum_initial_shares(&self) -> Shares {
        self.minimum_initial_shares
    }

    /// Decimal scale of both assets.
    #[must_use]
    pub const fn scale(&self) -> FixedPointScale {
        self.scale
    }

    /// Fee handling on swaps.
    #[must_use]
    pub const fn fee_policy(&self) -> FeePolicy {
        self.fee_policy
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawPoolMathConfig {
    fee_bps: BasisPoints,
    bps_denominator: u32,
    minimum_initial_shares: Shares,
    scale: FixedPointScale,
    fee_policy: FeePolicy,
}

#[cfg(feature = "serde")]
impl Default for RawPoolMathConfig {
    fn default() -> Self {
        let d = PoolMathConfig::default();
        Self {
            fee_bps: d.fee_bps,
            bps_denominator: d.bps_denominator,
            minimum_initial_shares: d.minimum_initial_shares,
            scale: d.scale,
            fee_policy: d.fee_policy,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolMathConfig> for PoolMathConfig {
    type Error = AmmError;

    fn try_from(raw: RawPoolMathConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.fee_bps,
            raw.bps_denominator,
            raw.minimum_initial_shares,
            raw.scale,
            raw.fee_policy,
        )
    }
}
