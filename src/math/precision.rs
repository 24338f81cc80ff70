//! Arbitrary-precision helpers shared by the price engine.
//!
//! Decimal division, powers and the `1.0001` root constants are computed
//! at a fixed number of significant digits so results do not depend on the
//! default precision `bigdecimal` was compiled with.

use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

/// Significant digits kept by every intermediate power and division.
pub const WORKING_PRECISION: u64 = 100;

/// Digits used to derive the root constants; a few above
/// [`WORKING_PRECISION`] so the constants never limit it.
const CONSTANT_DIGITS: u32 = 110;

/// `1.0001` as the integer `10001 / 10^4`.
const TICK_BASE_NUMERATOR: u32 = 10_001;
const TICK_BASE_SCALE: u32 = 4;

static SQRT_TICK_BASE: OnceLock<BigDecimal> = OnceLock::new();
static QUARTER_TICK_BASE: OnceLock<BigDecimal> = OnceLock::new();
static POW5_96: OnceLock<BigInt> = OnceLock::new();
static POW5_192: OnceLock<BigInt> = OnceLock::new();

/// `sqrt(1.0001)`: one tick in sqrt-price space.
pub fn sqrt_tick_base() -> &'static BigDecimal {
    SQRT_TICK_BASE.get_or_init(|| {
        let n = BigUint::from(TICK_BASE_NUMERATOR)
            * BigUint::from(10u8).pow(2 * CONSTANT_DIGITS - TICK_BASE_SCALE);
        BigDecimal::new(BigInt::from(n.sqrt()), i64::from(CONSTANT_DIGITS))
    })
}

/// `1.0001^(1/4)`: half a tick in sqrt-price space.
pub fn quarter_tick_base() -> &'static BigDecimal {
    QUARTER_TICK_BASE.get_or_init(|| {
        let n = BigUint::from(TICK_BASE_NUMERATOR)
            * BigUint::from(10u8).pow(4 * CONSTANT_DIGITS - TICK_BASE_SCALE);
        BigDecimal::new(BigInt::from(n.sqrt().sqrt()), i64::from(CONSTANT_DIGITS))
    })
}

/// Exact value of `x / 2^96`.
///
/// `1 / 2^96 = 5^96 / 10^96`, so no rounding happens.
#[must_use]
pub fn div_q96(x: &BigUint) -> BigDecimal {
    let pow5 = POW5_96.get_or_init(|| BigInt::from(5u8).pow(96));
    BigDecimal::new(BigInt::from(x.clone()) * pow5, 96)
}

/// Exact value of `x / 2^192`.
#[must_use]
pub fn div_q192(x: &BigUint) -> BigDecimal {
    let pow5 = POW5_192.get_or_init(|| BigInt::from(5u8).pow(192));
    BigDecimal::new(BigInt::from(x.clone()) * pow5, 192)
}

/// `num / den` to `prec` significant digits, truncating.
///
/// Returns `None` if `den` is zero.
#[must_use]
pub fn div_to_prec(num: &BigDecimal, den: &BigDecimal, prec: u64) -> Option<BigDecimal> {
    let (num_digits, num_scale) = num.as_bigint_and_exponent();
    let (den_digits, den_scale) = den.as_bigint_and_exponent();
    if den_digits.is_zero() {
        return None;
    }

    let extra = prec.checked_add(den.digits())?;
    let shifted = num_digits * BigInt::from(10u8).pow(u32::try_from(extra).ok()?);
    let quotient = shifted / den_digits;
    let scale = num_scale
        .checked_sub(den_scale)?
        .checked_add(i64::try_from(extra).ok()?)?;

    Some(BigDecimal::new(quotient, scale).with_prec(prec))
}

/// `base^exp` by square-and-multiply, rounding to `prec` digits after each
/// product. Negative exponents go through [`div_to_prec`].
///
/// Returns `None` only if `base` is zero and `exp` is negative.
#[must_use]
pub fn pow_to_prec(base: &BigDecimal, exp: i64, prec: u64) -> Option<BigDecimal> {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exp.unsigned_abs();

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = (&result * &square).with_prec(prec);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = (&square * &square).with_prec(prec);
        }
    }

    if exp < 0 {
        div_to_prec(&BigDecimal::one(), &result, prec)
    } else {
        Some(result)
    }
}

/// Natural logarithm of a positive big integer, as an `f64` estimate.
///
/// Only the top 64 bits take part, which is plenty for a starting guess.
#[must_use]
pub fn ln_biguint(x: &BigUint) -> f64 {
    let shift = x.bits().saturating_sub(64);
    let top = (x >> shift).to_u64().unwrap_or(u64::MAX);

    #[allow(clippy::cast_precision_loss)]
    let (top, shift) = (top as f64, shift as f64);
    top.ln() + shift * core::f64::consts::LN_2
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use core::str::FromStr;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        let Ok(d) = BigDecimal::from_str(s) else {
            panic!("invalid decimal in test: {s}");
        };
        d
    }

    // -- Constants ----------------------------------------------------------

    #[test]
    fn sqrt_tick_base_squares_back() {
        let b = sqrt_tick_base();
        let err = (b * b - dec("1.0001")).abs();
        assert!(err < dec("1e-100"));
        assert!(b.to_string().starts_with("1.0000499987500624960940234169937986972154"));
    }

    #[test]
    fn quarter_tick_base_squares_to_sqrt_base() {
        let q = quarter_tick_base();
        let err = (q * q - sqrt_tick_base()).abs();
        assert!(err < dec("1e-100"));
    }

    // -- Exact binary scaling -----------------------------------------------

    #[test]
    fn div_q96_of_two_pow_96_is_one() {
        let q96 = BigUint::one() << 96;
        assert_eq!(div_q96(&q96), BigDecimal::one());
        assert_eq!(div_q192(&(BigUint::one() << 193)), dec("2"));
    }

    #[test]
    fn div_q96_is_exact_for_odd_values() {
        let two_pow_96 = BigDecimal::from(BigInt::one() << 96);
        assert_eq!(div_q96(&BigUint::one()) * two_pow_96, BigDecimal::one());
    }

    // -- Division and powers ------------------------------------------------

    #[test]
    fn div_to_prec_handles_repeating_decimals() {
        let Some(third) = div_to_prec(&dec("1"), &dec("3"), 20) else {
            panic!("expected Some");
        };
        assert_eq!(third, dec("0.33333333333333333333"));
    }

    #[test]
    fn div_to_prec_rejects_zero() {
        assert!(div_to_prec(&dec("1"), &dec("0"), 20).is_none());
    }

    #[test]
    fn pow_positive_and_negative() {
        assert_eq!(pow_to_prec(&dec("2"), 10, 50), Some(dec("1024")));
        assert_eq!(pow_to_prec(&dec("2"), -2, 50), Some(dec("0.25")));
        assert_eq!(pow_to_prec(&dec("7"), 0, 50), Some(BigDecimal::one()));
        assert!(pow_to_prec(&BigDecimal::zero(), -1, 50).is_none());
    }

    #[test]
    fn ln_estimate_is_close() {
        let x = BigUint::one() << 200;
        let expected = 200.0 * core::f64::consts::LN_2;
        assert!((ln_biguint(&x) - expected).abs() < 1e-9);
        assert!((ln_biguint(&BigUint::from(1000u32)) - 1000f64.ln()).abs() < 1e-12);
    }
}
