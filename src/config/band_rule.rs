//! How a single position shape lays out its price band.

use crate::domain::BasisPoints;
use crate::error::KitError;

/// Band layout for one [`PositionShape`](crate::domain::PositionShape).
///
/// Multipliers are expressed in basis points of the current price, so
/// `11_500` means `× 1.15`.
///
/// # Variants
///
/// - [`Anchored`](BandRule::Anchored): one edge is `price_current × midpoint
///   × edge`, the other is the one-spacing-forward price.
/// - [`Symmetric`](BandRule::Symmetric): `price_current × (1 ∓ half_width)`.
/// - [`Unsupported`](BandRule::Unsupported): deriving a range fails with
///   [`KitError::UnsupportedPositionShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "rule", rename_all = "snake_case")
)]
pub enum BandRule {
    /// Band between a doubly-scaled anchor and the next spacing's price.
    Anchored {
        /// Factor applied to the current price to get the midpoint.
        midpoint: BasisPoints,
        /// Factor applied to the midpoint to get the far edge.
        edge: BasisPoints,
    },
    /// Band centred on the current price.
    Symmetric {
        /// Distance of each edge from the current price.
        half_width: BasisPoints,
    },
    /// No band can be derived for this shape.
    Unsupported,
}

impl BandRule {
    /// Validates the rule's multipliers.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidConfiguration`] if an anchored multiplier
    /// is zero, or if a symmetric half width is zero or reaches 100%.
    pub const fn validate(&self) -> Result<(), KitError> {
        match self {
            Self::Anchored { midpoint, edge } => {
                if midpoint.get() == 0 || edge.get() == 0 {
                    return Err(KitError::InvalidConfiguration(
                        "anchored band multipliers must be greater than zero",
                    ));
                }
                Ok(())
            }
            Self::Symmetric { half_width } => {
                if half_width.get() == 0 {
                    return Err(KitError::InvalidConfiguration(
                        "symmetric band half width must be greater than zero",
                    ));
                }
                if half_width.get() >= BasisPoints::ONE.get() {
                    return Err(KitError::InvalidConfiguration(
                        "symmetric band half width must be below 10000 basis points",
                    ));
                }
                Ok(())
            }
            Self::Unsupported => Ok(()),
        }
    }

    /// Returns `true` unless this is [`BandRule::Unsupported`].
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_requires_non_zero_multipliers() {
        let ok = BandRule::Anchored {
            midpoint: BasisPoints::new(11_500),
            edge: BasisPoints::new(11_500),
        };
        assert!(ok.validate().is_ok());

        let zero = BandRule::Anchored {
            midpoint: BasisPoints::ZERO,
            edge: BasisPoints::new(9_000),
        };
        assert!(matches!(
            zero.validate(),
            Err(KitError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn symmetric_half_width_bounds() {
        let rule = |bp| BandRule::Symmetric {
            half_width: BasisPoints::new(bp),
        };
        assert!(rule(1).validate().is_ok());
        assert!(rule(9_999).validate().is_ok());
        assert!(rule(0).validate().is_err());
        assert!(rule(10_000).validate().is_err());
    }

    #[test]
    fn unsupported_is_valid_but_not_supported() {
        assert!(BandRule::Unsupported.validate().is_ok());
        assert!(!BandRule::Unsupported.is_supported());
    }
}
