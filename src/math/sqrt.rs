//! Integer square root.

/// Floor of the square root of `n`, by Newton's method.
///
/// The first guess is a power of two at or above `√n`, so the iteration
/// decreases monotonically and stops at the floor root. Intermediate sums
/// stay below `2^65` and cannot overflow.
///
/// ```
/// use cpmm_math::math::isqrt;
///
/// assert_eq!(isqrt(14_400_000_000), 120_000);
/// assert_eq!(isqrt(15), 3);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x: u128 = 1 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
