//! Property-based tests using `proptest`.
//!
//! 1. **Path round trip**: `decode_path(encode_path(t, f)) == (t, f)` for
//!    1–5 hops.
//! 2. **Tick/price round trip**: a tick's price converts back to the same
//!    tick (±1) for every decimal pair and both price orientations.
//! 3. **Snapping**: `nearest_usable_tick` is idempotent, aligned and in
//!    bounds.
//! 4. **Range ordering**: CALL and PUT ranges are non-empty and sit on the
//!    expected side of the current price.

use proptest::prelude::*;

use crate::config::RangeConfig;
use crate::domain::{
    Decimals, PoolFee, PositionShape, Tick, TickSpacing, TokenAddress, MAX_TICK, MIN_TICK,
};
use crate::math::{
    human_price_from_tick, max_usable_tick, min_usable_tick, nearest_usable_tick,
    tick_from_human_price,
};
use crate::path::{decode_path, encode_path};
use crate::range::derive_position_range;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn address_strategy() -> impl Strategy<Value = TokenAddress> {
    any::<[u8; 20]>().prop_map(TokenAddress::from_bytes)
}

fn fee_strategy() -> impl Strategy<Value = PoolFee> {
    prop_oneof![
        Just(PoolFee::LOWEST),
        Just(PoolFee::LOW),
        Just(PoolFee::MEDIUM),
        Just(PoolFee::HIGH),
        (0u32..=0xFF_FFFF).prop_filter_map("uint24", |v| PoolFee::new(v).ok()),
    ]
}

fn route_strategy() -> impl Strategy<Value = (Vec<TokenAddress>, Vec<PoolFee>)> {
    (1usize..=5).prop_flat_map(|hops| {
        (
            prop::collection::vec(address_strategy(), hops + 1),
            prop::collection::vec(fee_strategy(), hops),
        )
    })
}

fn tick_strategy() -> impl Strategy<Value = Tick> {
    (MIN_TICK..=MAX_TICK).prop_filter_map("tick in range", |v| Tick::new(v).ok())
}

fn spacing_strategy() -> impl Strategy<Value = TickSpacing> {
    (1i32..16_384).prop_filter_map("spacing in range", |v| TickSpacing::new(v).ok())
}

fn standard_spacing_strategy() -> impl Strategy<Value = TickSpacing> {
    prop_oneof![
        Just(TickSpacing::ONE),
        Just(TickSpacing::TEN),
        Just(TickSpacing::SIXTY),
        Just(TickSpacing::TWO_HUNDRED),
    ]
}

fn decimals_strategy() -> impl Strategy<Value = Decimals> {
    prop_oneof![
        4 => (0u8..=18).prop_map(Decimals::new),
        1 => (19u8..=36).prop_map(Decimals::new),
    ]
}

// ---------------------------------------------------------------------------
// 1. Path round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_path_round_trip((tokens, fees) in route_strategy()) {
        let Ok(path) = encode_path(&tokens, &fees) else {
            return Err(TestCaseError::fail("encode failed on a valid route"));
        };
        prop_assert_eq!(path.len(), 20 + 23 * fees.len());

        let Ok(route) = decode_path(path.as_bytes()) else {
            return Err(TestCaseError::fail("decode failed on an encoded route"));
        };
        prop_assert_eq!(route.tokens(), tokens.as_slice());
        prop_assert_eq!(route.fees(), fees.as_slice());
    }

    #[test]
    fn prop_truncated_path_is_rejected(
        (tokens, fees) in route_strategy(),
        cut in 1usize..23,
    ) {
        let Ok(path) = encode_path(&tokens, &fees) else {
            return Err(TestCaseError::fail("encode failed on a valid route"));
        };
        let bytes = path.as_bytes();
        let truncated = bytes.get(..bytes.len() - cut).unwrap_or_default();
        prop_assert!(decode_path(truncated).is_err());
    }
}

// ---------------------------------------------------------------------------
// 2. Tick / price round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_tick_price_round_trip(
        tick in tick_strategy(),
        d0 in decimals_strategy(),
        d1 in decimals_strategy(),
        invert in any::<bool>(),
    ) {
        let Ok(prices) = human_price_from_tick(tick, d0, d1) else {
            return Err(TestCaseError::fail("price at a valid tick failed"));
        };
        let back = match tick_from_human_price(prices.select(invert), d0, d1, invert, None) {
            Ok(back) => back,
            Err(e) => return Err(TestCaseError::fail(format!("round trip failed at {tick}: {e}"))),
        };
        prop_assert!(
            (back.get() - tick.get()).abs() <= 1,
            "tick {} came back as {}", tick.get(), back.get()
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Snapping
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_snapping_is_idempotent(tick in tick_strategy(), spacing in spacing_strategy()) {
        let once = nearest_usable_tick(tick, spacing);
        let twice = nearest_usable_tick(once, spacing);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_snapping_stays_aligned_and_in_bounds(
        tick in tick_strategy(),
        spacing in spacing_strategy(),
    ) {
        let snapped = nearest_usable_tick(tick, spacing);
        prop_assert!(snapped.is_aligned(spacing));
        prop_assert!(snapped >= min_usable_tick(spacing));
        prop_assert!(snapped <= max_usable_tick(spacing));
        prop_assert!((snapped.get() - tick.get()).abs() <= spacing.get());
    }
}

// ---------------------------------------------------------------------------
// 4. Range ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_call_and_put_ranges_are_ordered(
        raw in -800_000i32..=800_000,
        spacing in standard_spacing_strategy(),
        d0 in decimals_strategy(),
        d1 in decimals_strategy(),
        invert in any::<bool>(),
    ) {
        let Ok(raw) = Tick::new(raw) else {
            return Err(TestCaseError::reject("tick out of range"));
        };
        let current = nearest_usable_tick(raw, spacing);
        let config = RangeConfig::default();

        for shape in [PositionShape::Call, PositionShape::Put] {
            let range = match derive_position_range(shape, d0, d1, spacing, current, invert, &config) {
                Ok(range) => range,
                Err(e) => return Err(TestCaseError::fail(format!("{shape} failed: {e}"))),
            };
            prop_assert!(range.tick_lower < range.tick_upper);
            prop_assert!(range.tick_lower.is_aligned(spacing));
            prop_assert!(range.tick_upper.is_aligned(spacing));

            let [low, high] = &range.band;
            prop_assert!(low < high);
            match shape {
                PositionShape::Call => prop_assert!(low > &range.price_current),
                _ => prop_assert!(low < &range.price_current),
            }
        }
    }
}
