//! Minimum tick granularity of a pool.

use core::fmt;

use crate::error::KitError;

/// Exclusive upper bound enforced by the v3 factory when enabling a fee.
const MAX_SPACING_EXCLUSIVE: i32 = 16_384;

/// Tick spacing of a pool: every initialisable tick is a multiple of it.
///
/// Standard values are derived from the fee tier
/// (see [`PoolFee::tick_spacing`](super::PoolFee::tick_spacing)):
/// 1, 10, 60 and 200.
///
/// # Examples
///
/// ```
/// use v3kit::domain::TickSpacing;
///
/// let spacing = TickSpacing::new(60).expect("valid spacing");
/// assert_eq!(spacing.get(), 60);
/// assert!(TickSpacing::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct TickSpacing(i32);

impl TickSpacing {
    /// Spacing of the 0.01% tier.
    pub const ONE: Self = Self(1);

    /// Spacing of the 0.05% tier.
    pub const TEN: Self = Self(10);

    /// Spacing of the 0.30% tier.
    pub const SIXTY: Self = Self(60);

    /// Spacing of the 1.00% tier.
    pub const TWO_HUNDRED: Self = Self(200);

    /// Creates a validated spacing in `1..16384`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidTickSpacing`] for zero, negative or
    /// oversized values.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value <= 0 {
            return Err(KitError::InvalidTickSpacing(
                "tick spacing must be greater than zero",
            ));
        }
        if value >= MAX_SPACING_EXCLUSIVE {
            return Err(KitError::InvalidTickSpacing(
                "tick spacing must be below 16384",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw spacing.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TickSpacing {
    type Error = KitError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TickSpacing> for i32 {
    fn from(spacing: TickSpacing) -> Self {
        spacing.0
    }
}

impl fmt::Display for TickSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickSpacing({})", self.0)
    }
}
