//! Snapping ticks onto a pool's tick-spacing grid.
//!
//! Position boundaries must be multiples of the pool's tick spacing and lie
//! inside `[MIN_TICK, MAX_TICK]`. These helpers produce such ticks.
//!
//! # Examples
//!
//! ```
//! use v3kit::domain::{Tick, TickSpacing};
//! use v3kit::math::{max_usable_tick, min_usable_tick, nearest_usable_tick};
//!
//! assert_eq!(min_usable_tick(TickSpacing::SIXTY).get(), -887_220);
//! assert_eq!(max_usable_tick(TickSpacing::SIXTY).get(), 887_220);
//!
//! let tick = Tick::new(200_311).expect("in range");
//! assert_eq!(nearest_usable_tick(tick, TickSpacing::SIXTY).get(), 200_340);
//! ```

use crate::domain::{Tick, TickSpacing, MAX_TICK, MIN_TICK};

/// Lowest multiple of `spacing` that is a valid tick.
#[must_use]
pub const fn min_usable_tick(spacing: TickSpacing) -> Tick {
    let s = spacing.get();
    Tick::new_unchecked((MIN_TICK / s) * s)
}

/// Highest multiple of `spacing` that is a valid tick.
#[must_use]
pub const fn max_usable_tick(spacing: TickSpacing) -> Tick {
    let s = spacing.get();
    Tick::new_unchecked((MAX_TICK / s) * s)
}

/// Rounds `tick` to the nearest multiple of `spacing`.
///
/// Halfway cases round toward positive infinity (`-30` with spacing `60`
/// becomes `0`, `30` becomes `60`). A result that would fall outside the
/// tick domain is pulled back by one spacing, so the output always lies in
/// `[min_usable_tick(spacing), max_usable_tick(spacing)]`.
#[must_use]
pub const fn nearest_usable_tick(tick: Tick, spacing: TickSpacing) -> Tick {
    snap_raw_tick(tick.get() as i64, spacing)
}

/// Snaps a raw tick that may lie outside the domain.
///
/// Same rounding and pull-back as [`nearest_usable_tick`]. Anything still
/// outside the usable bounds afterwards is clamped to them.
pub(crate) const fn snap_raw_tick(tick: i64, spacing: TickSpacing) -> Tick {
    let s = spacing.get() as i64;

    let mut rounded = tick.saturating_mul(2).saturating_add(s).div_euclid(2 * s) * s;
    if rounded < MIN_TICK as i64 {
        rounded += s;
    } else if rounded > MAX_TICK as i64 {
        rounded -= s;
    }

    let min = min_usable_tick(spacing).get() as i64;
    let max = max_usable_tick(spacing).get() as i64;
    if rounded < min {
        rounded = min;
    } else if rounded > max {
        rounded = max;
    }

    #[allow(clippy::cast_possible_truncation)]
    Tick::new_unchecked(rounded as i32)
}
