//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use v3kit::prelude::*;
//! ```

pub use crate::chain::ChainId;
pub use crate::config::{BandRule, RangeConfig};
pub use crate::domain::{
    BasisPoints, Decimals, HumanPrice, PoolFee, PositionShape, SqrtPriceX96, Tick, TickPrices,
    TickSpacing, TokenAddress, TokenDescriptor, TokenPair,
};
pub use crate::error::{KitError, Result};
pub use crate::math::{
    human_price_from_tick, nearest_usable_tick, sqrt_price_at_tick, tick_from_human_price,
};
pub use crate::path::{decode_path, encode_path, EncodedPath, SwapRoute};
pub use crate::pool::{compute_pool_address, PoolState};
pub use crate::range::{derive_position_range, PositionRange};
