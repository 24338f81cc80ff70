//! Human-readable exchange rate between two tokens.

use core::fmt;
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::BasisPoints;
use crate::error::KitError;
use crate::math::div_to_prec;

/// Significant digits kept on prices produced by division or scaling.
pub const PRICE_PRECISION: u64 = 40;

/// Decimal-adjusted exchange rate: units of one token per whole unit of
/// the other.
///
/// Wraps an arbitrary-precision decimal that must be strictly positive.
/// Values entered by the caller are kept exactly; prices derived through
/// [`inverse`](Self::inverse) or [`scale`](Self::scale) are rounded to
/// [`PRICE_PRECISION`] significant digits.
///
/// # Examples
///
/// ```
/// use v3kit::domain::HumanPrice;
///
/// let price: HumanPrice = "2000".parse().expect("valid");
/// let inv = price.inverse().expect("positive");
/// assert_eq!(inv.to_string(), "0.0005");
/// assert!(HumanPrice::from_f64(-1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BigDecimal", into = "BigDecimal")
)]
pub struct HumanPrice(BigDecimal);

impl HumanPrice {
    /// Creates a new `HumanPrice`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPrice`] if the value is zero or negative.
    pub fn new(value: BigDecimal) -> crate::error::Result<Self> {
        if value.is_zero() || value.is_negative() {
            return Err(KitError::InvalidPrice("price must be positive"));
        }
        Ok(Self(value))
    }

    /// Creates a price from an `f64`, going through its shortest decimal
    /// representation so that `2000.5` stays `2000.5`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPrice`] if the value is not finite or not
    /// strictly positive.
    pub fn from_f64(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(KitError::InvalidPrice("price must be finite"));
        }
        let decimal = BigDecimal::from_str(&value.to_string())
            .map_err(|_| KitError::InvalidPrice("price is not a decimal number"))?;
        Self::new(decimal)
    }

    /// Returns a reference to the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> &BigDecimal {
        &self.0
    }

    /// Consumes the wrapper and returns the decimal.
    #[must_use]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Lossy conversion to `f64`, for display and estimation.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::DivisionByZero`] if the reciprocal cannot be
    /// formed, which a validated price never triggers.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        let inv = div_to_prec(&BigDecimal::one(), &self.0, PRICE_PRECISION)
            .ok_or(KitError::DivisionByZero)?;
        Self::new(inv.normalized())
    }

    /// Multiplies the price by a basis-point factor (`10000` is identity).
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidPrice`] if the factor is zero.
    pub fn scale(&self, factor: BasisPoints) -> crate::error::Result<Self> {
        Self::new(
            factor
                .apply(&self.0)
                .with_prec(PRICE_PRECISION)
                .normalized(),
        )
    }
}

impl FromStr for HumanPrice {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = BigDecimal::from_str(s.trim())
            .map_err(|_| KitError::InvalidPrice("price is not a decimal number"))?;
        Self::new(decimal)
    }
}

impl TryFrom<BigDecimal> for HumanPrice {
    type Error = KitError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HumanPrice> for BigDecimal {
    fn from(value: HumanPrice) -> Self {
        value.0
    }
}

impl fmt::Display for HumanPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Both orientations of the price at a tick.
///
/// `direct` is token1 per token0; `inverse` is token0 per token1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPrices {
    /// Token1 per token0.
    pub direct: HumanPrice,
    /// Token0 per token1.
    pub inverse: HumanPrice,
}

impl TickPrices {
    /// Picks the inverse price when `invert` is set, the direct one otherwise.
    #[must_use]
    pub const fn select(&self, invert: bool) -> &HumanPrice {
        if invert {
            &self.inverse
        } else {
            &self.direct
        }
    }
}
