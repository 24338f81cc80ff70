//! Value types for ticks, prices, fees and tokens.
//!
//! Every type here is a newtype or small enum with a validated
//! constructor, so anything that reaches the math layer already satisfies
//! its range invariants.

mod basis_points;
mod decimals;
mod pool_fee;
mod position_shape;
mod price;
mod rounding;
mod sqrt_price;
mod tick;
mod tick_spacing;
mod token;
mod token_address;
mod token_pair;

pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use pool_fee::PoolFee;
pub use position_shape::PositionShape;
pub use price::{HumanPrice, TickPrices, PRICE_PRECISION};
pub use rounding::Rounding;
pub use sqrt_price::{q96, SqrtPriceX96, Q96_RESOLUTION};
pub use tick::{Tick, MAX_TICK, MIN_TICK};
pub use tick_spacing::TickSpacing;
pub use token::TokenDescriptor;
pub use token_address::{TokenAddress, ADDRESS_SIZE};
pub use token_pair::{sort_tokens, TokenPair};
