//! Which asset a swap sells.

use core::fmt;

/// Direction of a swap through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SwapDirection {
    /// Sell asset X, receive asset Y.
    XToY,
    /// Sell asset Y, receive asset X.
    YToX,
}

impl SwapDirection {
    /// Builds a direction from the `from_x` flag used by callers that track
    /// the input side as a boolean.
    pub const fn from_x(from_x: bool) -> Self {
        if from_x {
            Self::XToY
        } else {
            Self::YToX
        }
    }

    /// Returns `true` when asset X is the input.
    #[must_use]
    pub const fn is_from_x(&self) -> bool {
        matches!(self, Self::XToY)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => write!(f, "x-to-y"),
            Self::YToX => write!(f, "y-to-x"),
        }
    }
}
