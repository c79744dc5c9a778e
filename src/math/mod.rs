//! Integer arithmetic for pool calculations.
//!
//! Everything here works on `u128` and reports failure through `Option`
//! or [`AmmError`](crate::error::AmmError); nothing panics or saturates.
//!
//! - [`div_round`]: division with an explicit [`Rounding`](crate::domain::Rounding).
//! - [`isqrt`]: floor square root.
//! - [`mul_div`], [`sqrt_product`]: products that may pass `u128::MAX`,
//!   held in 256 bits.
//! - [`CheckedArithmetic`]: `Result`-returning add and sub on the amount newtypes.

mod checked;
mod rounding;
mod sqrt;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use sqrt::isqrt;
pub use wide::{mul_div, sqrt_product};
