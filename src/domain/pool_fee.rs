//! Pool fee tiers as encoded on chain (uint24, hundredths of a basis point).

use core::fmt;

use super::TickSpacing;
use crate::error::KitError;

/// Largest value representable in the 3-byte fee field of a swap path.
const MAX_FEE: u32 = 0x00FF_FFFF;

/// Fee of a v3 pool in hundredths of a basis point (`3000` = 0.30%).
///
/// Any uint24 value is accepted so that paths through non-standard pools
/// can still be encoded, but only the four standard tiers map to a
/// [`TickSpacing`].
///
/// # Examples
///
/// ```
/// use v3kit::domain::{PoolFee, TickSpacing};
///
/// let fee = PoolFee::MEDIUM;
/// assert_eq!(fee.get(), 3000);
/// assert_eq!(fee.tick_spacing(), Some(TickSpacing::SIXTY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct PoolFee(u32);

impl PoolFee {
    /// 0.01%, stable pairs (spacing 1).
    pub const LOWEST: Self = Self(100);

    /// 0.05%, correlated pairs (spacing 10).
    pub const LOW: Self = Self(500);

    /// 0.30%, standard volatile pairs (spacing 60).
    pub const MEDIUM: Self = Self(3_000);

    /// 1.00%, exotic pairs (spacing 200).
    pub const HIGH: Self = Self(10_000);

    /// Creates a fee after checking it fits in 24 bits.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidFee`] if `value` exceeds `0xFFFFFF`.
    pub const fn new(value: u32) -> crate::error::Result<Self> {
        if value > MAX_FEE {
            return Err(KitError::InvalidFee("fee must fit in 24 bits"));
        }
        Ok(Self(value))
    }

    /// Returns the raw fee.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the tick spacing of a standard tier, `None` otherwise.
    #[must_use]
    pub const fn tick_spacing(&self) -> Option<TickSpacing> {
        match self.0 {
            100 => Some(TickSpacing::ONE),
            500 => Some(TickSpacing::TEN),
            3_000 => Some(TickSpacing::SIXTY),
            10_000 => Some(TickSpacing::TWO_HUNDRED),
            _ => None,
        }
    }

    /// Returns `true` if this fee matches one of the four standard tiers.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        self.tick_spacing().is_some()
    }

    /// Big-endian 3-byte encoding used in swap paths.
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }

    /// Decodes a big-endian 3-byte fee. Infallible: every 24-bit value is
    /// a valid fee.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }
}

impl TryFrom<u32> for PoolFee {
    type Error = KitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PoolFee> for u32 {
    fn from(fee: PoolFee) -> Self {
        fee.0
    }
}

impl fmt::Display for PoolFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolFee({})", self.0)
    }
}
