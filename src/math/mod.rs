//! Arbitrary-precision price math and tick snapping.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `full_math` | [`mul_div`], [`mul_div_rounding_up`], [`div_round`] over big integers |
//! | `price_math` | tick ⇄ sqrt price ⇄ human price conversions |
//! | `tick_math` | usable tick bounds and [`nearest_usable_tick`] |
//! | `precision` | working precision, decimal powers and the `1.0001` root constants |

mod full_math;
mod precision;
mod price_math;
mod tick_math;

pub use full_math::{div_round, mul_div, mul_div_rounding_up};
pub use precision::{div_to_prec, pow_to_prec, WORKING_PRECISION};
pub use price_math::{
    human_price_from_tick, sqrt_price_at_tick, sqrt_price_from_ratio, tick_at_sqrt_price,
    tick_from_human_price,
};
pub use tick_math::{max_usable_tick, min_usable_tick, nearest_usable_tick};
