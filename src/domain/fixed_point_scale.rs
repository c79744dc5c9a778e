//! Conversion between human-readable decimals and smallest-unit amounts.

use super::Amount;
use crate::error::AmmError;

/// Most decimal places an asset may use.
const MAX_DECIMALS: u8 = 18;

/// Number of fractional digits in an asset's smallest unit.
///
/// The default is 6 (micro-units): `1.5` tokens is `1_500_000` units.
/// Parsing works on the decimal string directly so no precision is lost
/// to floating point; digits beyond the scale are truncated, never
/// rounded up.
///
/// # Examples
///
/// ```
/// use cpmm_math::domain::{Amount, FixedPointScale};
///
/// let micro = FixedPointScale::MICRO;
/// assert_eq!(micro.parse("977.5084809"), Ok(Amount::new(977_508_480)));
/// assert_eq!(micro.format(Amount::new(977_508_480)), "977.50848");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct FixedPointScale(u8);

impl Default for FixedPointScale {
    fn default() -> Self {
        Self::MICRO
    }
}

impl FixedPointScale {
    /// Whole units only.
    pub const UNITS: Self = Self(0);

    /// Six decimals (`1 token = 1_000_000 units`).
    pub const MICRO: Self = Self(6);

    /// Creates a scale after checking the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] above 18 decimals.
    pub const fn new(decimals: u8) -> crate::error::Result<Self> {
        if decimals > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(decimals))
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.0
    }

    /// `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts whole tokens to smallest units. Cannot overflow since
    /// `u64::MAX × 10^18 < u128::MAX`.
    pub const fn from_whole(&self, tokens: u64) -> Amount {
        Amount::new(tokens as u128 * self.factor())
    }

    /// Parses a non-negative decimal string such as `"12.5"` into smallest
    /// units, truncating digits beyond the scale.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] for empty, signed, or non-numeric input.
    /// - [`AmmError::Overflow`] if the value does not fit in `u128`.
    pub fn parse(&self, input: &str) -> crate::error::Result<Amount> {
        let trimmed = input.trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmmError::InvalidAmount("not a decimal number"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(AmmError::InvalidAmount("not a decimal number"));
        }

        let mut units: u128 = 0;
        for b in whole.bytes() {
            units = push_digit(units, b)?;
        }
        let mut fraction_digits = frac.bytes().take(usize::from(self.0));
        for _ in 0..self.0 {
            let digit = fraction_digits.next().unwrap_or(b'0');
            units = push_digit(units, digit)?;
        }
        Ok(Amount::new(units))
    }

    /// Renders smallest units as a decimal string without trailing zeros.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        let factor = self.factor();
        let whole = amount.get() / factor;
        let frac = amount.get() % factor;
        if frac == 0 {
            return whole.to_string();
        }
        let digits = format!("{frac:0width$}", width = usize::from(self.0));
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}

fn push_digit(acc: u128, digit: u8) -> crate::error::Result<u128> {
    acc.checked_mul(10)
        .and_then(|v| v.checked_add(u128::from(digit - b'0')))
        .ok_or(AmmError::Overflow("decimal amount exceeds u128"))
}

impl TryFrom<u8> for FixedPointScale {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FixedPointScale> for u8 {
    fn from(scale: FixedPointScale) -> Self {
        scale.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn range_checked() {
        assert!(FixedPointScale::new(18).is_ok());
        assert!(matches!(
            FixedPointScale::new(19),
            Err(AmmError::InvalidConfiguration(_))
        ));
        assert_eq!(FixedPointScale::default(), FixedPointScale::MICRO);
    }

    #[test]
    fn from_whole_tokens() {
        assert_eq!(
            FixedPointScale::MICRO.from_whole(50_000),
            Amount::new(50_000_000_000)
        );
        assert_eq!(FixedPointScale::UNITS.from_whole(7), Amount::new(7));
    }

    #[test]
    fn parse_integer_and_fraction() {
        let s = FixedPointScale::MICRO;
        assert_eq!(s.parse("1000"), Ok(Amount::new(1_000_000_000)));
        assert_eq!(s.parse("0.5"), Ok(Amount::new(500_000)));
        assert_eq!(s.parse(".25"), Ok(Amount::new(250_000)));
        assert_eq!(s.parse("5."), Ok(Amount::new(5_000_000)));
        assert_eq!(s.parse("  3.000001 "), Ok(Amount::new(3_000_001)));
    }

    #[test]
    fn parse_truncates_extra_digits() {
        assert_eq!(
            FixedPointScale::MICRO.parse("0.0000019"),
            Ok(Amount::new(1))
        );
        assert_eq!(FixedPointScale::UNITS.parse("9.99"), Ok(Amount::new(9)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let s = FixedPointScale::MICRO;
        for bad in ["", ".", "-1", "+1", "abc", "1.2.3", "1e6", "NaN"] {
            assert!(
                matches!(s.parse(bad), Err(AmmError::InvalidAmount(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(
            FixedPointScale::MICRO.parse(&huge),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn format_trims_zeros() {
        let s = FixedPointScale::MICRO;
        assert_eq!(s.format(Amount::new(1_500_000)), "1.5");
        assert_eq!(s.format(Amount::new(2_000_000)), "2");
        assert_eq!(s.format(Amount::new(1)), "0.000001");
        assert_eq!(s.format(Amount::ZERO), "0");
        assert_eq!(FixedPointScale::UNITS.format(Amount::new(42)), "42");
    }
}
