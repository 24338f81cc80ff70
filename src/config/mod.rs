//! Declarative, validated configuration.
//!
//! [`RangeConfig`] holds one [`BandRule`] per position shape and drives
//! [`derive_position_range`](crate::range::derive_position_range). With the
//! `serde` feature both types can be loaded from JSON or any other serde
//! format.

mod band_rule;
mod range_config;

pub use band_rule::BandRule;
pub use range_config::{
    RangeConfig, DEFAULT_CALL_FACTOR, DEFAULT_PLAIN_HALF_WIDTH, DEFAULT_PUT_FACTOR,
};
