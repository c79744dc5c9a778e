//! Products of two `u128` values without losing precision.
//!
//! Reserves at 18 decimals already sit near `10^23`, so `reserve × amount`
//! routinely passes `u128::MAX`. Both helpers here try the native product
//! first and fall back to a 256-bit intermediate; only the final result
//! has to fit in `u128`.
//!
//! ```
//! use cpmm_math::domain::Rounding;
//! use cpmm_math::math::{mul_div, sqrt_product};
//!
//! let reserve = 50_000 * 10u128.pow(18);
//! assert_eq!(sqrt_product(reserve, reserve), reserve);
//! assert_eq!(mul_div(reserve, reserve, reserve, Rounding::Down), Ok(reserve));
//! ```

use primitive_types::U256;

use super::{div_round, isqrt};
use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// `a × b / denominator` rounded in `rounding`'s direction, with the
/// product held in 256 bits when it does not fit in `u128`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    if let Some(product) = a.checked_mul(b) {
        return div_round(product, denominator, rounding).ok_or(AmmError::DivisionByZero);
    }

    let product = U256::from(a) * U256::from(b);
    let denominator = U256::from(denominator);
    let mut quotient = product / denominator;
    if rounding == Rounding::Up && !(product % denominator).is_zero() {
        quotient += U256::one();
    }
    narrow(quotient).ok_or(AmmError::Overflow("mul_div result overflow"))
}

/// `floor(√(a × b))`. Always fits in `u128` because both factors do.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    match a.checked_mul(b) {
        Some(product) => isqrt(product),
        None => (U256::from(a) * U256::from(b)).integer_sqrt().low_u128(),
    }
}

fn narrow(value: U256) -> Option<u128> {
    (value.bits() <= 128).then(|| value.low_u128())
}
