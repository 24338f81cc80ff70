//! Conversions between ticks, Q64.96 sqrt prices and human prices.
//!
//! Everything here runs on arbitrary-precision integers and decimals. The
//! only floating-point step is the initial estimate of a tick logarithm,
//! which is then confirmed against an exact bracket.
//!
//! # Examples
//!
//! ```
//! use v3kit::domain::{Decimals, HumanPrice, Tick};
//! use v3kit::math::{human_price_from_tick, tick_from_human_price};
//!
//! let usdc = Decimals::new(6);
//! let weth = Decimals::new(18);
//!
//! // 2000 USDC per WETH in a USDC/WETH pool (token0 = USDC).
//! let price: HumanPrice = "2000".parse().expect("valid");
//! let tick = tick_from_human_price(&price, usdc, weth, true, None).expect("in range");
//! assert_eq!(tick.get(), 200_311);
//!
//! let prices = human_price_from_tick(tick, usdc, weth).expect("valid tick");
//! assert!((prices.inverse.to_f64() - 2000.0).abs() < 0.2);
//! ```

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use tracing::trace;

use super::full_math::mul_div;
use super::precision::{
    div_q192, div_q96, div_to_prec, ln_biguint, pow_to_prec, quarter_tick_base, sqrt_tick_base,
    WORKING_PRECISION,
};
use super::tick_math::snap_raw_tick;
use crate::domain::{
    q96, Decimals, HumanPrice, SqrtPriceX96, Tick, TickPrices, TickSpacing, MAX_TICK, MIN_TICK,
    PRICE_PRECISION,
};
use crate::error::KitError;

/// Bracket corrections tried after the `f64` estimate before giving up on
/// refinement.
const MAX_BRACKET_STEPS: usize = 4;

/// `floor(sqrt(ratio) * 2^96)` for a positive decimal ratio.
///
/// Writing `ratio = m / 10^s`, the result is `isqrt(m * 2^192 * 10^k) /
/// 10^((s + k) / 2)` with `k` chosen to make the exponent even, which is
/// exact for any number of input digits.
///
/// # Errors
///
/// Returns [`KitError::InvalidPrice`] if `ratio` is zero or negative, or so
/// small that its sqrt price floors to zero.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use v3kit::math::sqrt_price_from_ratio;
///
/// let one = sqrt_price_from_ratio(&BigDecimal::from(1)).expect("positive");
/// assert_eq!(one.get().to_string(), "79228162514264337593543950336");
/// ```
pub fn sqrt_price_from_ratio(ratio: &BigDecimal) -> crate::error::Result<SqrtPriceX96> {
    let (mantissa, scale) = ratio.as_bigint_and_exponent();
    if !mantissa.is_positive() {
        return Err(KitError::InvalidPrice("ratio must be positive"));
    }
    let shifted = mantissa.magnitude() << 192u32;

    let root = if scale <= 0 {
        (shifted * pow10(scale.unsigned_abs())?).sqrt()
    } else if scale % 2 == 0 {
        shifted.sqrt() / pow10(scale.unsigned_abs() / 2)?
    } else {
        (shifted * BigUint::from(10u8)).sqrt() / pow10(scale.unsigned_abs() / 2 + 1)?
    };

    SqrtPriceX96::new(root)
}

/// `floor(sqrt(1.0001)^tick * 2^96)`.
///
/// # Examples
///
/// ```
/// use v3kit::domain::Tick;
/// use v3kit::math::sqrt_price_at_tick;
///
/// let p = sqrt_price_at_tick(Tick::MIN).expect("valid tick");
/// assert_eq!(p.get().to_string(), "4295128738");
/// ```
///
/// # Errors
///
/// Returns [`KitError::InvalidPrice`] only if the arithmetic degenerates,
/// which does not happen for ticks inside the domain.
pub fn sqrt_price_at_tick(tick: Tick) -> crate::error::Result<SqrtPriceX96> {
    let factor = pow_to_prec(sqrt_tick_base(), i64::from(tick.get()), WORKING_PRECISION)
        .ok_or(KitError::InvalidPrice("tick power is undefined"))?;
    let scaled = factor * BigDecimal::from(BigInt::from(q96()));
    let (floor, _) = scaled.with_scale(0).as_bigint_and_exponent();

    let value = floor
        .to_biguint()
        .ok_or(KitError::InvalidPrice("sqrt price must be positive"))?;
    trace!(tick = tick.get(), sqrt_price = %value, "sqrt price at tick");
    SqrtPriceX96::new(value)
}

/// Human prices at `tick`, adjusted for token decimals.
///
/// `direct` is token1 per token0 (`sqrtPrice^2 / 2^192 * 10^(d0 - d1)`);
/// `inverse` is its reciprocal. Both are rounded to
/// [`PRICE_PRECISION`](crate::domain::PRICE_PRECISION) significant digits.
///
/// # Errors
///
/// Returns [`KitError::InvalidPrice`] if the price underflows to zero.
pub fn human_price_from_tick(
    tick: Tick,
    decimals0: Decimals,
    decimals1: Decimals,
) -> crate::error::Result<TickPrices> {
    let sqrt_price = sqrt_price_at_tick(tick)?;
    let squared = sqrt_price.get() * sqrt_price.get();

    let raw = div_q192(&squared);
    let direct = decimals0.expand(&decimals1.shrink(&raw));

    let inverse_raw = div_to_prec(
        &BigDecimal::from(BigInt::from(q96() * q96())),
        &BigDecimal::from(BigInt::from(squared)),
        WORKING_PRECISION,
    )
    .ok_or(KitError::DivisionByZero)?;
    let inverse = decimals1.expand(&decimals0.shrink(&inverse_raw));

    Ok(TickPrices {
        direct: HumanPrice::new(direct.with_prec(PRICE_PRECISION).normalized())?,
        inverse: HumanPrice::new(inverse.with_prec(PRICE_PRECISION).normalized())?,
    })
}

/// Tick whose price is closest to `price`, optionally snapped to a spacing.
///
/// With `invert_price` set, `price` is read as token0 per token1; otherwise
/// as token1 per token0. The tick is `round(log_1.0001(raw price))`, ties
/// toward positive infinity.
///
/// With a spacing, the raw tick is snapped before it is range-checked, so a
/// price just past either end of the domain lands on the outermost usable
/// tick instead of failing.
///
/// # Errors
///
/// - [`KitError::TickOutOfRange`] if no spacing is given and the tick falls
///   outside the domain.
/// - [`KitError::InvalidPrice`] if the price is too small to represent as
///   a sqrt price.
pub fn tick_from_human_price(
    price: &HumanPrice,
    decimals0: Decimals,
    decimals1: Decimals,
    invert_price: bool,
    tick_spacing: Option<TickSpacing>,
) -> crate::error::Result<Tick> {
    let unit = BigDecimal::one();
    let (numerator, denominator) = if invert_price {
        (decimals0.expand(price.get()), decimals1.expand(&unit))
    } else {
        (decimals0.expand(&unit), decimals1.expand(price.get()))
    };

    let num_sqrt = sqrt_price_from_ratio(&numerator)?;
    let den_sqrt = sqrt_price_from_ratio(&denominator)?;
    let ratio = mul_div(den_sqrt.get(), &q96(), num_sqrt.get())?;

    let raw = rounded_log_tick(&ratio)?;
    let tick = match tick_spacing {
        Some(spacing) => snap_raw_tick(raw, spacing),
        None => Tick::from_i64(raw)?,
    };
    trace!(price = %price, invert_price, raw, tick = tick.get(), "tick from price");
    Ok(tick)
}

/// Tick whose sqrt price is closest to `sqrt_price`, in log space.
///
/// # Errors
///
/// Returns [`KitError::TickOutOfRange`] if the tick falls outside the domain.
pub fn tick_at_sqrt_price(sqrt_price: &SqrtPriceX96) -> crate::error::Result<Tick> {
    Tick::from_i64(rounded_log_tick(sqrt_price.get())?)
}

/// `round(log_{sqrt(1.0001)}(x / 2^96))`, ties toward positive infinity.
///
/// Starts from an `f64` estimate and moves it until
/// `c^(2t-1) <= x / 2^96 < c^(2t+1)` with `c = 1.0001^(1/4)`.
/// Estimates well outside the tick domain are returned without refinement.
fn rounded_log_tick(x: &BigUint) -> crate::error::Result<i64> {
    if x.is_zero() {
        return Err(KitError::InvalidPrice("price too small for a sqrt price"));
    }

    let log = (ln_biguint(x) - 96.0 * core::f64::consts::LN_2) / (0.5 * 1.0001f64.ln());
    #[allow(clippy::cast_possible_truncation)]
    let mut tick = log.round() as i64;
    if tick < i64::from(MIN_TICK) - 2 || tick > i64::from(MAX_TICK) + 2 {
        return Ok(tick);
    }

    let value = div_q96(x);
    let half = quarter_tick_base();
    for _ in 0..MAX_BRACKET_STEPS {
        let lower = pow_to_prec(half, 2 * tick - 1, WORKING_PRECISION)
            .ok_or(KitError::InvalidPrice("tick power is undefined"))?;
        if value < lower {
            tick -= 1;
            continue;
        }
        let upper = pow_to_prec(half, 2 * tick + 1, WORKING_PRECISION)
            .ok_or(KitError::InvalidPrice("tick power is undefined"))?;
        if value >= upper {
            tick += 1;
            continue;
        }
        break;
    }

    Ok(tick)
}

fn pow10(exp: u64) -> crate::error::Result<BigUint> {
    let exp = u32::try_from(exp).map_err(|_| KitError::InvalidPrice("ratio exponent too large"))?;
    Ok(BigUint::from(10u8).pow(exp))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::domain::BasisPoints;

    fn tick(v: i32) -> Tick {
        let Ok(t) = Tick::new(v) else {
            panic!("invalid tick in test: {v}");
        };
        t
    }

    fn decimals(v: u8) -> Decimals {
        Decimals::new(v)
    }

    fn price(s: &str) -> HumanPrice {
        let Ok(p) = s.parse::<HumanPrice>() else {
            panic!("invalid price in test: {s}");
        };
        p
    }

    fn dec(s: &str) -> BigDecimal {
        let Ok(d) = BigDecimal::from_str(s) else {
            panic!("invalid decimal in test: {s}");
        };
        d
    }

    fn sqrt_price(t: i32) -> SqrtPriceX96 {
        let Ok(p) = sqrt_price_at_tick(tick(t)) else {
            panic!("expected Ok for tick {t}");
        };
        p
    }

    fn sqrt_at(t: i32) -> String {
        sqrt_price(t).get().to_string()
    }

    // -- sqrt_price_from_ratio ---------------------------------------------

    #[test]
    fn ratio_one_is_q96() {
        let Ok(p) = sqrt_price_from_ratio(&BigDecimal::one()) else {
            panic!("expected Ok");
        };
        assert_eq!(p, SqrtPriceX96::one());
    }

    #[test]
    fn ratio_four_is_two_q96() {
        let Ok(p) = sqrt_price_from_ratio(&BigDecimal::from(4)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), &(q96() * BigUint::from(2u8)));
    }

    #[test]
    fn fractional_ratios_with_odd_and_even_scale() {
        let Ok(quarter) = sqrt_price_from_ratio(&dec("0.25"))
        else {
            panic!("expected Ok");
        };
        assert_eq!(quarter.get(), &(q96() / BigUint::from(2u8)));

        // sqrt(0.1) * 2^96, floored.
        let Ok(tenth) = sqrt_price_from_ratio(&dec("0.1"))
        else {
            panic!("expected Ok");
        };
        assert_eq!(tenth.get().to_string(), "25054144837504793118641380156");
    }

    #[test]
    fn large_exponent_ratio() {
        let Ok(p) = sqrt_price_from_ratio(&dec("1e12")) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), &(q96() * BigUint::from(1_000_000u32)));
    }

    #[test]
    fn non_positive_ratio_is_invalid() {
        assert_eq!(
            sqrt_price_from_ratio(&BigDecimal::zero()),
            Err(KitError::InvalidPrice("ratio must be positive"))
        );
        assert_eq!(
            sqrt_price_from_ratio(&BigDecimal::from(-5)),
            Err(KitError::InvalidPrice("ratio must be positive"))
        );
    }

    #[test]
    fn forty_digit_ratio_is_supported() {
        let text = "1234567890123456789012345678901234567890.5";
        let Ok(p) = sqrt_price_from_ratio(&dec(text)) else {
            panic!("expected Ok");
        };
        let Ok(square) = mul_div(p.get(), p.get(), &(q96() * q96())) else {
            panic!("expected Ok");
        };
        assert_eq!(square.to_string(), "1234567890123456789012345678901234567890");
    }

    // -- sqrt_price_at_tick -------------------------------------------------

    #[test]
    fn sqrt_price_at_known_ticks() {
        assert_eq!(sqrt_at(0), "79228162514264337593543950336");
        assert_eq!(sqrt_at(1), "79232123823359799118286999567");
        assert_eq!(sqrt_at(-1), "79224201403219477170569942573");
        assert_eq!(sqrt_at(200_000), "1744244129640337381386292603617837");
    }

    #[test]
    fn sqrt_price_at_domain_edges() {
        assert_eq!(sqrt_at(MIN_TICK), "4295128738");
        assert_eq!(
            sqrt_at(MAX_TICK),
            "1461446703485210103244672773810124308346321380902"
        );
    }

    #[test]
    fn sqrt_price_is_monotonic() {
        let mut prev = sqrt_price(-1000);
        for t in [-999, -10, 0, 10, 999, 1000] {
            let next = sqrt_price(t);
            assert!(prev < next, "not increasing at tick {t}");
            prev = next;
        }
    }

    // -- human_price_from_tick ----------------------------------------------

    #[test]
    fn tick_zero_same_decimals_is_one() {
        let Ok(prices) = human_price_from_tick(Tick::ZERO, decimals(18), decimals(18)) else {
            panic!("expected Ok");
        };
        assert_eq!(prices.direct, price("1"));
        assert_eq!(prices.inverse, price("1"));
    }

    #[test]
    fn usdc_weth_tick_gives_eth_price() {
        let Ok(prices) = human_price_from_tick(tick(199_980), decimals(6), decimals(18)) else {
            panic!("expected Ok");
        };
        assert!((prices.direct.to_f64() - 0.000_483_712).abs() < 1e-8);
        assert!((prices.inverse.to_f64() - 2067.346).abs() < 1e-2);
    }

    #[test]
    fn direct_times_inverse_is_one() {
        let Ok(prices) = human_price_from_tick(tick(-73_421), decimals(8), decimals(2)) else {
            panic!("expected Ok");
        };
        let product = prices.direct.get() * prices.inverse.get();
        let err = (product - BigDecimal::one()).abs();
        assert!(err < dec("1e-35"));
    }

    // -- tick_from_human_price ----------------------------------------------

    #[test]
    fn usdc_weth_price_to_tick() {
        let result = tick_from_human_price(&price("2000"), decimals(6), decimals(18), true, None);
        assert_eq!(result, Ok(tick(200_311)));
    }

    #[test]
    fn usdc_weth_price_to_snapped_tick() {
        let result = tick_from_human_price(
            &price("2000"),
            decimals(6),
            decimals(18),
            true,
            Some(TickSpacing::SIXTY),
        );
        assert_eq!(result, Ok(tick(200_340)));
    }

    #[test]
    fn direct_and_inverted_inputs_agree() {
        let direct = tick_from_human_price(&price("0.0005"), decimals(6), decimals(18), false, None);
        let inverted = tick_from_human_price(&price("2000"), decimals(6), decimals(18), true, None);
        assert_eq!(direct, inverted);
    }

    #[test]
    fn exact_tick_prices_round_trip() {
        for t in [0, 1, -1, 60, -60, 12_345, -200_000] {
            let Ok(prices) = human_price_from_tick(tick(t), decimals(6), decimals(18)) else {
                panic!("expected Ok for tick {t}");
            };
            let back = tick_from_human_price(&prices.direct, decimals(6), decimals(18), false, None);
            assert_eq!(back, Ok(tick(t)), "direct round trip failed at {t}");
            let back = tick_from_human_price(&prices.inverse, decimals(6), decimals(18), true, None);
            assert_eq!(back, Ok(tick(t)), "inverse round trip failed at {t}");
        }
    }

    #[test]
    fn rounds_at_half_tick() {
        // 1.0001^0.5 is the midpoint between ticks 0 and 1.
        let eps = dec("1e-20");
        let (Ok(above), Ok(below)) = (
            HumanPrice::new(sqrt_tick_base() + &eps),
            HumanPrice::new(sqrt_tick_base() - &eps),
        ) else {
            panic!("expected Ok");
        };
        let up = tick_from_human_price(&above, decimals(0), decimals(0), false, None);
        let down = tick_from_human_price(&below, decimals(0), decimals(0), false, None);
        assert_eq!(up, Ok(tick(1)));
        assert_eq!(down, Ok(Tick::ZERO));
    }

    #[test]
    fn extreme_price_is_out_of_range() {
        let result = tick_from_human_price(&price("1e60"), decimals(18), decimals(18), false, None);
        assert!(matches!(result, Err(KitError::TickOutOfRange { .. })));
        let result = tick_from_human_price(&price("1e-45"), decimals(18), decimals(18), false, None);
        assert!(matches!(result, Err(KitError::TickOutOfRange { .. })));
    }

    #[test]
    fn extreme_price_snaps_to_usable_bounds() {
        let sixty = Some(TickSpacing::SIXTY);
        let high = tick_from_human_price(&price("1e60"), decimals(18), decimals(18), false, sixty);
        assert_eq!(high, Ok(tick(887_220)));
        let low = tick_from_human_price(&price("1e-45"), decimals(18), decimals(18), false, sixty);
        assert_eq!(low, Ok(tick(-887_220)));
    }

    #[test]
    fn price_one_spacing_past_the_edge_snaps_back() {
        let sixty = Some(TickSpacing::SIXTY);
        let Ok(prices) = human_price_from_tick(tick(887_220), decimals(18), decimals(18)) else {
            panic!("expected Ok");
        };
        let Ok(past) = prices.direct.scale(BasisPoints::new(10_060)) else {
            panic!("expected Ok");
        };
        let raw = tick_from_human_price(&past, decimals(18), decimals(18), false, None);
        assert_eq!(raw, Err(KitError::TickOutOfRange { tick: 887_280 }));
        let snapped = tick_from_human_price(&past, decimals(18), decimals(18), false, sixty);
        assert_eq!(snapped, Ok(tick(887_220)));
    }

    #[test]
    fn decimals_beyond_eighteen_round_trip() {
        for (d0, d1) in [(24, 6), (6, 24), (30, 30)] {
            for t in [-300_000, 0, 300_000] {
                let Ok(prices) = human_price_from_tick(tick(t), decimals(d0), decimals(d1)) else {
                    panic!("expected Ok for tick {t}");
                };
                let back =
                    tick_from_human_price(&prices.direct, decimals(d0), decimals(d1), false, None);
                assert_eq!(back, Ok(tick(t)), "decimals ({d0}, {d1}) tick {t}");
            }
        }
    }

    // -- tick_at_sqrt_price --------------------------------------------------

    #[test]
    fn tick_at_sqrt_price_inverts_sqrt_price_at_tick() {
        for t in [MIN_TICK, -50_000, -1, 0, 1, 50_000, MAX_TICK] {
            let Ok(sp) = sqrt_price_at_tick(tick(t)) else {
                panic!("expected Ok for tick {t}");
            };
            assert_eq!(tick_at_sqrt_price(&sp), Ok(tick(t)));
        }
    }
}
