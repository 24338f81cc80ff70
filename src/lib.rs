//! # v3kit
//!
//! Off-chain math and encoding for Uniswap v3 style concentrated-liquidity
//! pools: conversions between ticks, Q64.96 sqrt prices and decimal-adjusted
//! human prices, tick-range derivation for new positions, and the packed
//! byte encoding of multi-hop swap paths.
//!
//! Every operation is a pure function over immutable values. All sqrt,
//! power and division steps run on arbitrary-precision integers and
//! decimals, so results match the on-chain conventions across the whole
//! tick domain.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for value, config and route types |
//!
//! # Quick Start
//!
//! ## Derive a position range
//!
//! ```rust
//! use v3kit::chain::ChainId;
//! use v3kit::config::RangeConfig;
//! use v3kit::domain::{PoolFee, PositionShape, Tick};
//! use v3kit::pool::PoolState;
//! use v3kit::tokens::mainnet;
//!
//! // USDC/WETH 0.3% pool with WETH at roughly 2000 USDC.
//! let state = PoolState::new(
//!     mainnet::usdc(),
//!     mainnet::weth(),
//!     PoolFee::MEDIUM,
//!     Tick::new(200_311).expect("in range"),
//!     ChainId::Mainnet,
//! )
//! .expect("standard fee");
//!
//! let range = state
//!     .position_range(PositionShape::Call, &RangeConfig::default())
//!     .expect("supported shape");
//! assert!(range.tick_lower < range.tick_upper);
//! ```
//!
//! ## Encode a swap path
//!
//! ```rust
//! use v3kit::domain::PoolFee;
//! use v3kit::path::encode_path;
//! use v3kit::tokens::mainnet;
//!
//! let tokens = [mainnet::usdc().address(), mainnet::weth().address(), mainnet::wbtc().address()];
//! let path = encode_path(&tokens, &[PoolFee::MEDIUM, PoolFee::MEDIUM]).expect("two hops");
//!
//! let route = path.decode().expect("well formed");
//! assert_eq!(route.tokens(), &tokens);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), [`HumanPrice`](domain::HumanPrice), [`PoolFee`](domain::PoolFee), … |
//! | [`math`] | Price engine, `mul_div`, tick snapping |
//! | [`range`] | [`derive_position_range`](range::derive_position_range) for CALL / PUT / PLAIN |
//! | [`path`] | [`SwapRoute`](path::SwapRoute) and the packed [`EncodedPath`](path::EncodedPath) codec |
//! | [`pool`] | CREATE2 pool addresses and [`PoolState`](pool::PoolState) |
//! | [`config`] | [`RangeConfig`](config::RangeConfig) band rules |
//! | [`chain`] | Supported networks, factories and wrapped native tokens |
//! | [`tokens`] | Well-known token descriptors |
//! | [`error`] | [`KitError`](error::KitError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod path;
pub mod pool;
pub mod prelude;
pub mod range;
pub mod tokens;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
