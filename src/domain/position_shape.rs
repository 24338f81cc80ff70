//! Kind of liquidity position a price band is derived for.

use core::fmt;
use core::str::FromStr;

use crate::error::KitError;

/// Position shape selecting how the band around the current price is laid
/// out.
///
/// The numeric codes match the wire encoding used by callers: `0` is
/// `Call`, `1` is `Put`, `2` is `Plain`.
///
/// # Examples
///
/// ```
/// use v3kit::domain::PositionShape;
///
/// let shape: PositionShape = "call".parse().expect("known shape");
/// assert_eq!(shape, PositionShape::Call);
/// assert_eq!(PositionShape::try_from(1u8), Ok(PositionShape::Put));
/// assert_eq!(PositionShape::Plain.to_string(), "PLAIN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum PositionShape {
    /// Band placed above the current price.
    Call,
    /// Band placed below the current price.
    Put,
    /// Band around the current price.
    Plain,
}

impl PositionShape {
    /// All shapes, in code order.
    pub const ALL: [Self; 3] = [Self::Call, Self::Put, Self::Plain];

    /// Returns the numeric code of the shape.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Call => 0,
            Self::Put => 1,
            Self::Plain => 2,
        }
    }

    /// Returns the upper-case label of the shape.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Put => "PUT",
            Self::Plain => "PLAIN",
        }
    }
}

impl TryFrom<u8> for PositionShape {
    type Error = KitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Call),
            1 => Ok(Self::Put),
            2 => Ok(Self::Plain),
            _ => Err(KitError::UnknownPositionShape(
                "position shape code must be 0, 1 or 2",
            )),
        }
    }
}

impl From<PositionShape> for u8 {
    fn from(value: PositionShape) -> Self {
        value.code()
    }
}

impl FromStr for PositionShape {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|shape| shape.label().eq_ignore_ascii_case(s))
            .ok_or(KitError::UnknownPositionShape(
                "position shape must be CALL, PUT or PLAIN",
            ))
    }
}

impl fmt::Display for PositionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
