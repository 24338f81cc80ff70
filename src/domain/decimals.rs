//! Token decimal places and unit scaling.

use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use crate::error::KitError;

/// Represents the number of decimal places for a token amount.
///
/// Any ERC-20 `uint8` value is accepted. Scaling between human and raw
/// units is exact: it only moves the decimal point of an
/// arbitrary-precision value, so tokens with more than 18 decimals need no
/// special handling.
///
/// # Examples
///
/// ```
/// use v3kit::domain::Decimals;
///
/// let d = Decimals::new(6);
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.parse_units("1.5").expect("fits").to_string(), "1500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Six decimal places, as used by USDC and USDT.
    pub const SIX: Self = Self(6);

    /// Eight decimal places, as used by WBTC.
    pub const EIGHT: Self = Self(8);

    /// Eighteen decimal places, as used by WETH and most ERC-20 tokens.
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a new `Decimals` value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn factor(&self) -> BigUint {
        BigUint::from(10u8).pow(u32::from(self.0))
    }

    /// Multiplies `value` by `10^decimals` exactly.
    ///
    /// `expand(1.5)` with 6 decimals is `1500000`.
    #[must_use]
    pub fn expand(&self, value: &BigDecimal) -> BigDecimal {
        let (digits, scale) = value.as_bigint_and_exponent();
        BigDecimal::new(digits, scale - i64::from(self.0))
    }

    /// Divides `value` by `10^decimals` exactly.
    #[must_use]
    pub fn shrink(&self, value: &BigDecimal) -> BigDecimal {
        let (digits, scale) = value.as_bigint_and_exponent();
        BigDecimal::new(digits, scale + i64::from(self.0))
    }

    /// Parses a human-readable amount into raw integer units.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidAmount`] if `text` is not a decimal
    /// number, is negative, or has more fractional digits than the token
    /// supports.
    pub fn parse_units(&self, text: &str) -> crate::error::Result<BigUint> {
        let value = BigDecimal::from_str(text.trim())
            .map_err(|_| KitError::InvalidAmount("amount is not a decimal number"))?;
        if value.is_negative() {
            return Err(KitError::InvalidAmount("amount must not be negative"));
        }
        let raw = self.expand(&value);
        let whole = raw.with_scale(0);
        if whole != raw {
            return Err(KitError::InvalidAmount(
                "fractional component exceeds decimals",
            ));
        }
        let (digits, _) = whole.into_bigint_and_exponent();
        digits
            .to_biguint()
            .ok_or(KitError::InvalidAmount("amount must not be negative"))
    }

    /// Formats raw integer units as a human-readable amount.
    ///
    /// Always prints at least one fractional digit: `1000000` with 6
    /// decimals is `"1.0"`.
    #[must_use]
    pub fn format_units(&self, raw: &BigUint) -> String {
        let factor = self.factor();
        let whole = raw / &factor;
        let frac = raw % &factor;
        if self.0 == 0 || frac.is_zero() {
            return format!("{whole}.0");
        }
        let padded = format!("{:0>width$}", frac.to_string(), width = usize::from(self.0));
        format!("{whole}.{}", padded.trim_end_matches('0'))
    }

    /// Raw amount as an exact decimal, for mixing with prices.
    #[must_use]
    pub fn to_human(&self, raw: &BigUint) -> BigDecimal {
        BigDecimal::new(BigInt::from(raw.clone()), i64::from(self.0))
    }
}

impl From<u8> for Decimals {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(decimals: Decimals) -> Self {
        decimals.0
    }
}
