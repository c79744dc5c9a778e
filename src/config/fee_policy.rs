//! What happens to the swap fee.

/// Where the fee portion of a swap input ends up.
///
/// Under [`RetainInReserves`](Self::RetainInReserves) the whole input,
/// fee included, is added to the input reserve, so fees accrue to
/// liquidity providers and the product `x × y` grows with every swap.
/// Under [`Exclude`](Self::Exclude) only `amount_in − fee` enters the
/// reserve and the fee is assumed to be routed elsewhere by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FeePolicy {
    /// Fee stays in the pool.
    #[default]
    RetainInReserves,
    /// Fee leaves the pool.
    Exclude,
}

impl FeePolicy {
    /// Returns `true` if the fee is added to the input reserve.
    #[must_use]
    pub const fn retains_fee(&self) -> bool {
        matches!(self, Self::RetainInReserves)
    }
}
