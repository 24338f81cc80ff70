//! Full-precision multiply-divide over big integers.
//!
//! The price engine multiplies values of up to `2^160` by `2^96` before
//! dividing, so every step here runs on [`BigUint`].
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use v3kit::domain::Rounding;
//! use v3kit::math::div_round;
//!
//! let (ten, three) = (BigUint::from(10u8), BigUint::from(3u8));
//! assert_eq!(div_round(&ten, &three, Rounding::Down), Some(BigUint::from(3u8)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up), Some(BigUint::from(4u8)));
//! assert_eq!(div_round(&ten, &BigUint::from(0u8), Rounding::Down), None);
//! ```

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::domain::Rounding;
use crate::error::KitError;

/// Integer division with an explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> Option<BigUint> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    match rounding {
        Rounding::Up if !remainder.is_zero() => Some(quotient + BigUint::one()),
        Rounding::Up | Rounding::Down => Some(quotient),
    }
}

/// `floor(x * y / denominator)` with no intermediate truncation.
///
/// # Errors
///
/// Returns [`KitError::DivisionByZero`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use v3kit::math::mul_div;
///
/// let q96 = BigUint::from(1u8) << 96;
/// let r = mul_div(&q96, &q96, &(BigUint::from(1u8) << 100)).expect("non-zero");
/// assert_eq!(r, BigUint::from(1u8) << 92);
/// ```
pub fn mul_div(x: &BigUint, y: &BigUint, denominator: &BigUint) -> crate::error::Result<BigUint> {
    div_round(&(x * y), denominator, Rounding::Down).ok_or(KitError::DivisionByZero)
}

/// `ceil(x * y / denominator)` with no intermediate truncation.
///
/// # Errors
///
/// Returns [`KitError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div_rounding_up(
    x: &BigUint,
    y: &BigUint,
    denominator: &BigUint,
) -> crate::error::Result<BigUint> {
    div_round(&(x * y), denominator, Rounding::Up).ok_or(KitError::DivisionByZero)
}
