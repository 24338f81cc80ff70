//! Q64.96 square-root price.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::KitError;

/// Number of fractional bits in a Q64.96 value.
pub const Q96_RESOLUTION: u32 = 96;

/// Square root of a pool price in Q64.96 fixed point:
/// `floor(sqrt(price) * 2^96)`.
///
/// The value is arbitrary-precision and always strictly positive. Use
/// [`crate::math::price_math`] to move between ticks, sqrt prices and
/// human prices.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use v3kit::domain::SqrtPriceX96;
///
/// let one = SqrtPriceX96::one();
/// assert_eq!(one.get(), &(BigUint::from(1u8) << 96));
/// assert!(SqrtPriceX96::new(BigUint::from(0u8)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SqrtPriceX96(BigUint);

impl SqrtPriceX96 {
    /// Creates a new `SqrtPriceX96`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPrice`] if the value is zero.
    pub fn new(value: BigUint) -> crate::error::Result<Self> {
        if value.is_zero() {
            return Err(KitError::InvalidPrice("sqrt price must be positive"));
        }
        Ok(Self(value))
    }

    /// `2^96`, the sqrt price of a 1:1 pool.
    #[must_use]
    pub fn one() -> Self {
        Self(q96())
    }

    /// Returns a reference to the raw Q64.96 integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the wrapper and returns the raw integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

/// `2^96` as a big integer.
#[must_use]
pub fn q96() -> BigUint {
    BigUint::one() << Q96_RESOLUTION
}

impl FromStr for SqrtPriceX96 {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigUint::from_str(s.trim())
            .map_err(|_| KitError::InvalidPrice("sqrt price is not a decimal integer"))?;
        Self::new(value)
    }
}

impl TryFrom<String> for SqrtPriceX96 {
    type Error = KitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SqrtPriceX96> for String {
    fn from(value: SqrtPriceX96) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SqrtPriceX96({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert_eq!(
            SqrtPriceX96::new(BigUint::zero()),
            Err(KitError::InvalidPrice("sqrt price must be positive"))
        );
    }

    #[test]
    fn one_is_two_pow_96() {
        assert_eq!(
            SqrtPriceX96::one().get().to_string(),
            "79228162514264337593543950336"
        );
    }

    #[test]
    fn parses_decimal_strings() {
        let Ok(p) = "4295128738".parse::<SqrtPriceX96>() else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), &BigUint::from(4_295_128_738u64));
        assert!("0".parse::<SqrtPriceX96>().is_err());
        assert!("0x10".parse::<SqrtPriceX96>().is_err());
    }

    #[test]
    fn ordering_follows_value() {
        let Ok(small) = SqrtPriceX96::new(BigUint::from(5u8)) else {
            panic!("expected Ok");
        };
        assert!(small < SqrtPriceX96::one());
    }

    #[test]
    fn display() {
        let Ok(p) = SqrtPriceX96::new(BigUint::from(7u8)) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{p}"), "SqrtPriceX96(7)");
    }
}
