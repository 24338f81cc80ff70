//! Discrete price point on the 1.0001 logarithmic grid.

use core::fmt;

use super::TickSpacing;
use crate::error::KitError;

/// Minimum valid tick index (Uniswap v3 standard).
pub const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index (Uniswap v3 standard).
pub const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated liquidity model.
///
/// Price increases exponentially with the tick index: `price = 1.0001^tick`.
/// Valid tick indices range from [`MIN`](Self::MIN) (`-887272`) to
/// [`MAX`](Self::MAX) (`887272`).
///
/// # Examples
///
/// ```
/// use v3kit::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::TickOutOfRange`] if `value` is outside
    /// the range `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(KitError::TickOutOfRange { tick: value as i64 });
        }
        Ok(Self(value))
    }

    /// Creates a `Tick` from a wide integer, as produced by rounding a
    /// logarithm.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::TickOutOfRange`] if `value` is outside the
    /// valid range.
    pub fn from_i64(value: i64) -> crate::error::Result<Self> {
        match i32::try_from(value) {
            Ok(v) => Self::new(v),
            Err(_) => Err(KitError::TickOutOfRange { tick: value }),
        }
    }

    /// Wraps a value the caller has already bounds-checked.
    pub(crate) const fn new_unchecked(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Checked addition of a delta to this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Checked subtraction of a delta from this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }

    /// Returns `true` if this tick is a multiple of `spacing`, i.e. usable
    /// as a position boundary in a pool with that spacing.
    #[must_use]
    pub const fn is_aligned(&self, spacing: TickSpacing) -> bool {
        self.0 % spacing.get() == 0
    }
}

impl TryFrom<i32> for Tick {
    type Error = KitError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tick> for i32 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
