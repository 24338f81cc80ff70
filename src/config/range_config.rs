//! Per-shape band rules used when deriving position ranges.

use super::BandRule;
use crate::domain::{BasisPoints, PositionShape};
use crate::error::KitError;

/// Midpoint and edge factor for CALL positions (`× 1.15`).
pub const DEFAULT_CALL_FACTOR: BasisPoints = BasisPoints::new(11_500);

/// Midpoint and edge factor for PUT positions (`× 0.90`).
pub const DEFAULT_PUT_FACTOR: BasisPoints = BasisPoints::new(9_000);

/// Half width of the PLAIN band (`± 10%`).
pub const DEFAULT_PLAIN_HALF_WIDTH: BasisPoints = BasisPoints::new(1_000);

/// Band rules for every [`PositionShape`].
///
/// [`RangeConfig::default`] gives CALL a `1.15 × 1.15` anchor, PUT a
/// `0.90 × 0.90` anchor and PLAIN a symmetric `± 10%` band.
///
/// # Examples
///
/// ```
/// use v3kit::config::{BandRule, RangeConfig};
/// use v3kit::domain::{BasisPoints, PositionShape};
///
/// let config = RangeConfig::default()
///     .with_rule(PositionShape::Plain, BandRule::Unsupported)
///     .expect("valid rule");
/// assert!(!config.rule(PositionShape::Plain).is_supported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeConfigParts", into = "RangeConfigParts")
)]
pub struct RangeConfig {
    call: BandRule,
    put: BandRule,
    plain: BandRule,
}

impl RangeConfig {
    /// Creates a new `RangeConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidConfiguration`] if any rule fails
    /// [`BandRule::validate`].
    pub const fn new(call: BandRule, put: BandRule, plain: BandRule) -> Result<Self, KitError> {
        let config = Self { call, put, plain };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Validates every rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`KitError::InvalidConfiguration`] found.
    pub const fn validate(&self) -> Result<(), KitError> {
        if let Err(e) = self.call.validate() {
            return Err(e);
        }
        if let Err(e) = self.put.validate() {
            return Err(e);
        }
        self.plain.validate()
    }

    /// Returns the rule for `shape`.
    #[must_use]
    pub const fn rule(&self, shape: PositionShape) -> &BandRule {
        match shape {
            PositionShape::Call => &self.call,
            PositionShape::Put => &self.put,
            PositionShape::Plain => &self.plain,
        }
    }

    /// Returns a copy with the rule for `shape` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::InvalidConfiguration`] if `rule` is invalid.
    pub fn with_rule(mut self, shape: PositionShape, rule: BandRule) -> Result<Self, KitError> {
        rule.validate()?;
        match shape {
            PositionShape::Call => self.call = rule,
            PositionShape::Put => self.put = rule,
            PositionShape::Plain => self.plain = rule,
        }
        Ok(self)
    }
}

/// Unvalidated field layout used for (de)serialisation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeConfigParts {
    call: BandRule,
    put: BandRule,
    plain: BandRule,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeConfigParts> for RangeConfig {
    type Error = KitError;

    fn try_from(parts: RangeConfigParts) -> Result<Self, Self::Error> {
        Self::new(parts.call, parts.put, parts.plain)
    }
}

#[cfg(feature = "serde")]
impl From<RangeConfig> for RangeConfigParts {
    fn from(config: RangeConfig) -> Self {
        Self {
            call: config.call,
            put: config.put,
            plain: config.plain,
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            call: BandRule::Anchored {
                midpoint: DEFAULT_CALL_FACTOR,
                edge: DEFAULT_CALL_FACTOR,
            },
            put: BandRule::Anchored {
                midpoint: DEFAULT_PUT_FACTOR,
                edge: DEFAULT_PUT_FACTOR,
            },
            plain: BandRule::Symmetric {
                half_width: DEFAULT_PLAIN_HALF_WIDTH,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RangeConfig::default().validate().is_ok());
    }

    #[test]
    fn default_rules_per_shape() {
        let config = RangeConfig::default();
        assert_eq!(
            config.rule(PositionShape::Call),
            &BandRule::Anchored {
                midpoint: BasisPoints::new(11_500),
                edge: BasisPoints::new(11_500),
            }
        );
        assert_eq!(
            config.rule(PositionShape::Put),
            &BandRule::Anchored {
                midpoint: BasisPoints::new(9_000),
                edge: BasisPoints::new(9_000),
            }
        );
        assert_eq!(
            config.rule(PositionShape::Plain),
            &BandRule::Symmetric {
                half_width: BasisPoints::new(1_000),
            }
        );
    }

    #[test]
    fn new_rejects_invalid_rule() {
        let bad = BandRule::Symmetric {
            half_width: BasisPoints::ZERO,
        };
        let result = RangeConfig::new(BandRule::Unsupported, BandRule::Unsupported, bad);
        assert!(matches!(result, Err(KitError::InvalidConfiguration(_))));
    }

    #[test]
    fn with_rule_replaces_only_target_shape() {
        let Ok(config) = RangeConfig::default().with_rule(PositionShape::Put, BandRule::Unsupported)
        else {
            panic!("expected Ok");
        };
        assert!(!config.rule(PositionShape::Put).is_supported());
        assert!(config.rule(PositionShape::Call).is_supported());
        assert!(config.rule(PositionShape::Plain).is_supported());
    }

    #[test]
    fn with_rule_validates() {
        let bad = BandRule::Anchored {
            midpoint: BasisPoints::ZERO,
            edge: BasisPoints::ZERO,
        };
        assert!(RangeConfig::default().with_rule(PositionShape::Call, bad).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_keeps_rules() {
        let config = RangeConfig::default();
        let Ok(json) = serde_json::to_string(&config) else {
            panic!("expected Ok");
        };
        assert!(json.contains(r#""rule":"symmetric""#));
        assert_eq!(serde_json::from_str::<RangeConfig>(&json).ok(), Some(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_with_zero_multipliers_is_rejected() {
        let json = r#"{
            "call": { "rule": "anchored", "midpoint": 0, "edge": 0 },
            "put": { "rule": "unsupported" },
            "plain": { "rule": "unsupported" }
        }"#;
        let Err(e) = serde_json::from_str::<RangeConfig>(json) else {
            panic!("expected a deserialisation error");
        };
        assert!(e.to_string().contains("anchored band multipliers must be greater than zero"));
    }
}
