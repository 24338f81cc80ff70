//! Tick range derivation for CALL, PUT and PLAIN positions.
//!
//! Given the pool's current (snapped) tick, [`derive_position_range`] picks
//! a human price band around it according to the shape's [`BandRule`] and
//! converts both edges back to usable ticks. Liquidity amounts are left to
//! the position manager.
//!
//! # Examples
//!
//! ```
//! use v3kit::config::RangeConfig;
//! use v3kit::domain::{Decimals, PositionShape, Tick, TickSpacing};
//! use v3kit::range::derive_position_range;
//!
//! let usdc = Decimals::new(6);
//! let weth = Decimals::new(18);
//!
//! let range = derive_position_range(
//!     PositionShape::Call,
//!     usdc,
//!     weth,
//!     TickSpacing::SIXTY,
//!     Tick::new(199_980).expect("in range"),
//!     true,
//!     &RangeConfig::default(),
//! )
//! .expect("supported shape");
//!
//! assert!(range.tick_lower < range.tick_upper);
//! assert_eq!(range.tick_lower.get() % 60, 0);
//! ```

use tracing::debug;

use crate::config::{BandRule, RangeConfig};
use crate::domain::{BasisPoints, Decimals, HumanPrice, PositionShape, Tick, TickSpacing};
use crate::error::KitError;
use crate::math::{human_price_from_tick, tick_from_human_price};

/// Price band and tick bounds for a new position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRange {
    /// Price at the current tick, in the requested orientation.
    pub price_current: HumanPrice,
    /// Band edges, ascending.
    pub band: [HumanPrice; 2],
    /// Lower tick bound, a multiple of the spacing.
    pub tick_lower: Tick,
    /// Upper tick bound, a multiple of the spacing and above `tick_lower`.
    pub tick_upper: Tick,
}

impl PositionRange {
    /// Width of the range in ticks.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.tick_upper.get() - self.tick_lower.get()
    }

    /// Returns `true` if `tick` lies in `[tick_lower, tick_upper)`.
    #[must_use]
    pub const fn contains(&self, tick: Tick) -> bool {
        tick.get() >= self.tick_lower.get() && tick.get() < self.tick_upper.get()
    }
}

/// Derives the price band and tick bounds for a position of `shape`.
///
/// `decimals0`/`decimals1` belong to the pool's token0/token1. With
/// `invert_price` set, prices are token0 per token1.
///
/// 1. `price_current` is the price at `current_tick`.
/// 2. `price_next = price_current × (1 + spacing / 10000)`.
/// 3. The shape's rule yields the band, which is sorted ascending.
/// 4. Each edge is converted to a snapped tick and the ticks are sorted.
///    An edge past either end of the domain lands on the outermost usable
///    tick.
///
/// # Errors
///
/// - [`KitError::UnsupportedPositionShape`] if the rule for `shape` is
///   [`BandRule::Unsupported`].
/// - [`KitError::InvalidTickRange`] if both edges snap to the same tick,
///   which includes a band lying wholly past the end of the domain.
pub fn derive_position_range(
    shape: PositionShape,
    decimals0: Decimals,
    decimals1: Decimals,
    tick_spacing: TickSpacing,
    current_tick: Tick,
    invert_price: bool,
    config: &RangeConfig,
) -> crate::error::Result<PositionRange> {
    let prices = human_price_from_tick(current_tick, decimals0, decimals1)?;
    let price_current = prices.select(invert_price).clone();

    let step = BasisPoints::new(spacing_as_bps(tick_spacing)).one_plus();
    let price_next = price_current.scale(step)?;

    let [first, second] = band_for(shape, config.rule(shape), &price_current, price_next)?;
    let band = if first <= second {
        [first, second]
    } else {
        [second, first]
    };

    let [low_edge, high_edge] = &band;
    let tick_a = tick_from_human_price(
        low_edge,
        decimals0,
        decimals1,
        invert_price,
        Some(tick_spacing),
    )?;
    let tick_b = tick_from_human_price(
        high_edge,
        decimals0,
        decimals1,
        invert_price,
        Some(tick_spacing),
    )?;
    let (tick_lower, tick_upper) = if tick_a <= tick_b {
        (tick_a, tick_b)
    } else {
        (tick_b, tick_a)
    };

    if tick_lower == tick_upper {
        return Err(KitError::InvalidTickRange(
            "band edges snap to the same tick",
        ));
    }

    debug!(
        %shape,
        current_tick = current_tick.get(),
        invert_price,
        %price_current,
        tick_lower = tick_lower.get(),
        tick_upper = tick_upper.get(),
        "derived position range"
    );

    Ok(PositionRange {
        price_current,
        band,
        tick_lower,
        tick_upper,
    })
}

fn band_for(
    shape: PositionShape,
    rule: &BandRule,
    price_current: &HumanPrice,
    price_next: HumanPrice,
) -> crate::error::Result<[HumanPrice; 2]> {
    match *rule {
        BandRule::Anchored { midpoint, edge } => {
            let mid = price_current.scale(midpoint)?;
            Ok([mid.scale(edge)?, price_next])
        }
        BandRule::Symmetric { half_width } => {
            let below = half_width.one_minus().ok_or(KitError::InvalidConfiguration(
                "symmetric band half width must be below 10000 basis points",
            ))?;
            Ok([
                price_current.scale(below)?,
                price_current.scale(half_width.one_plus())?,
            ])
        }
        BandRule::Unsupported => Err(KitError::UnsupportedPositionShape(shape)),
    }
}

/// Tick spacing read as basis points: a spacing of `60` is `0.60%`.
const fn spacing_as_bps(spacing: TickSpacing) -> u32 {
    spacing.get().unsigned_abs()
}
