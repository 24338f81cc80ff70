//! Basis-point multipliers for price bands.

use core::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Number of basis points in 100%.
const BPS_PER_UNIT: u32 = 10_000;

/// A ratio expressed in basis points (1 bp = 0.01%, 10 000 bp = 1.0).
///
/// Used as an exact multiplier on decimal prices: `11_500` bp scales a
/// price by `1.15`, `9_000` bp by `0.90`. Values above 10 000 are valid
/// multipliers; use [`is_valid_percent`](Self::is_valid_percent) where a
/// value must be a proportion.
///
/// # Examples
///
/// ```
/// use v3kit::domain::BasisPoints;
///
/// let bp = BasisPoints::new(11_500);
/// assert_eq!(bp.get(), 11_500);
/// assert!(!bp.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points.
    pub const ZERO: Self = Self(0);

    /// 100%, the identity multiplier.
    pub const ONE: Self = Self(BPS_PER_UNIT);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the proportion range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_PER_UNIT
    }

    /// Exact decimal value of this ratio (`bp / 10_000`).
    #[must_use]
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.0), 4)
    }

    /// Multiplies `value` by this ratio without rounding.
    #[must_use]
    pub fn apply(&self, value: &BigDecimal) -> BigDecimal {
        value * &self.to_decimal()
    }

    /// `1 + self`, e.g. the one-spacing-forward factor `1 + spacing / 10_000`.
    #[must_use]
    pub const fn one_plus(&self) -> Self {
        Self(BPS_PER_UNIT.saturating_add(self.0))
    }

    /// `1 - self`, `None` if the result would be negative.
    #[must_use]
    pub const fn one_minus(&self) -> Option<Self> {
        match BPS_PER_UNIT.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
