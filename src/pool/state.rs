//! Snapshot of a pool as seen by a position opener.

use tracing::debug;

use super::compute_pool_address;
use crate::chain::ChainId;
use crate::config::RangeConfig;
use crate::domain::{
    PoolFee, PositionShape, SqrtPriceX96, Tick, TickPrices, TickSpacing, TokenAddress,
    TokenDescriptor, TokenPair,
};
use crate::error::KitError;
use crate::math::{human_price_from_tick, nearest_usable_tick, sqrt_price_at_tick};
use crate::range::{derive_position_range, PositionRange};

/// A pool's tokens, fee and current tick, with everything derived from
/// them.
///
/// `tick_current` is the raw tick read from the pool; `tick` is that tick
/// snapped to the spacing. When token0 is the chain's wrapped native token
/// swaps of the native leg go zero-for-one and prices read naturally;
/// otherwise prices are inverted so they are quoted per native unit.
///
/// # Examples
///
/// ```
/// use v3kit::chain::ChainId;
/// use v3kit::domain::{PoolFee, Tick};
/// use v3kit::pool::PoolState;
/// use v3kit::tokens::mainnet;
///
/// let state = PoolState::new(
///     mainnet::weth(),
///     mainnet::usdc(),
///     PoolFee::MEDIUM,
///     Tick::new(200_311).expect("in range"),
///     ChainId::Mainnet,
/// )
/// .expect("standard fee");
///
/// assert_eq!(state.pair().token0().symbol(), "USDC");
/// assert_eq!(state.tick().get(), 200_340);
/// assert!(state.invert_price());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    chain: ChainId,
    pair: TokenPair,
    fee: PoolFee,
    tick_spacing: TickSpacing,
    tick_current: Tick,
    tick: Tick,
    zero_for_one: bool,
    invert_price: bool,
    address: TokenAddress,
}

impl PoolState {
    /// Builds the state of the `fee` pool between two tokens on `chain`.
    ///
    /// # Errors
    ///
    /// - [`KitError::InvalidToken`] if both tokens share an address.
    /// - [`KitError::InvalidFee`] if `fee` is not one of the standard tiers.
    pub fn new(
        token_a: TokenDescriptor,
        token_b: TokenDescriptor,
        fee: PoolFee,
        tick_current: Tick,
        chain: ChainId,
    ) -> crate::error::Result<Self> {
        let pair = TokenPair::new(token_a, token_b)?;
        let tick_spacing = fee
            .tick_spacing()
            .ok_or(KitError::InvalidFee("fee has no standard tick spacing"))?;
        let tick = nearest_usable_tick(tick_current, tick_spacing);

        let zero_for_one = chain.is_wrapped_native(pair.token0().address());
        let address = compute_pool_address(
            chain.factory(),
            pair.token0().address(),
            pair.token1().address(),
            fee,
        )?;

        debug!(
            %chain,
            pool = %address,
            token0 = pair.token0().symbol(),
            token1 = pair.token1().symbol(),
            fee = fee.get(),
            tick_current = tick_current.get(),
            tick = tick.get(),
            zero_for_one,
            "pool state"
        );

        Ok(Self {
            chain,
            pair,
            fee,
            tick_spacing,
            tick_current,
            tick,
            zero_for_one,
            invert_price: !zero_for_one,
            address,
        })
    }

    /// Network the pool lives on.
    #[must_use]
    pub const fn chain(&self) -> ChainId {
        self.chain
    }

    /// Sorted token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Pool fee.
    #[must_use]
    pub const fn fee(&self) -> PoolFee {
        self.fee
    }

    /// Tick spacing implied by the fee.
    #[must_use]
    pub const fn tick_spacing(&self) -> TickSpacing {
        self.tick_spacing
    }

    /// Raw current tick.
    #[must_use]
    pub const fn tick_current(&self) -> Tick {
        self.tick_current
    }

    /// Current tick snapped to the spacing.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// `true` when token0 is the wrapped native token.
    #[must_use]
    pub const fn zero_for_one(&self) -> bool {
        self.zero_for_one
    }

    /// `true` when prices should be quoted as token0 per token1.
    #[must_use]
    pub const fn invert_price(&self) -> bool {
        self.invert_price
    }

    /// CREATE2 address of the pool.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Sqrt price at the raw current tick.
    ///
    /// # Errors
    ///
    /// See [`sqrt_price_at_tick`].
    pub fn sqrt_price(&self) -> crate::error::Result<SqrtPriceX96> {
        sqrt_price_at_tick(self.tick_current)
    }

    /// Both price orientations at the raw current tick.
    ///
    /// # Errors
    ///
    /// See [`human_price_from_tick`].
    pub fn prices(&self) -> crate::error::Result<TickPrices> {
        human_price_from_tick(
            self.tick_current,
            self.pair.token0().decimals(),
            self.pair.token1().decimals(),
        )
    }

    /// Tick range for a new position of `shape` around the snapped tick.
    ///
    /// # Errors
    ///
    /// See [`derive_position_range`].
    pub fn position_range(
        &self,
        shape: PositionShape,
        config: &RangeConfig,
    ) -> crate::error::Result<PositionRange> {
        derive_position_range(
            shape,
            self.pair.token0().decimals(),
            self.pair.token1().decimals(),
            self.tick_spacing,
            self.tick,
            self.invert_price,
            config,
        )
    }
}
