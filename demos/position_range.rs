//! Position range derivation example.
//!
//! Builds the state of the USDC/WETH 0.3% pool at a given tick, prints the
//! prices in both orientations and derives the tick range a new CALL, PUT
//! or PLAIN position would use. Set `RUST_LOG=v3kit=debug` to see the
//! intermediate values.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=v3kit=debug cargo run --example position_range --all-features
//! ```

use tracing_subscriber::EnvFilter;
use v3kit::chain::ChainId;
use v3kit::config::{BandRule, RangeConfig};
use v3kit::domain::{BasisPoints, HumanPrice, PoolFee, PositionShape, Tick};
use v3kit::math::{sqrt_price_at_tick, tick_from_human_price};
use v3kit::pool::PoolState;
use v3kit::tokens::mainnet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Position range derivation ===\n");

    // ── 1. Describe the pool ────────────────────────────────────────────
    //    USDC sorts below WETH, so token0 = USDC and prices are quoted
    //    inverted (USDC per WETH).
    let state = PoolState::new(
        mainnet::usdc(),
        mainnet::weth(),
        PoolFee::MEDIUM,
        Tick::new(199_983)?,
        ChainId::Mainnet,
    )?;

    println!("Pool:          {}", state.address());
    println!(
        "Pair:          {} / {}",
        state.pair().token0(),
        state.pair().token1()
    );
    println!("Fee:           {}", state.fee());
    println!("Tick spacing:  {}", state.tick_spacing());
    println!(
        "Tick:          {} (snapped to {})",
        state.tick_current(),
        state.tick()
    );
    println!("Invert price:  {}", state.invert_price());

    // ── 2. Prices at the current tick ───────────────────────────────────
    let prices = state.prices()?;
    println!("\nsqrtPriceX96:  {}", sqrt_price_at_tick(state.tick_current())?);
    println!("token1/token0: {}", prices.direct);
    println!("token0/token1: {}", prices.inverse);

    // ── 3. Ranges with the default bands ───────────────────────────────
    let config = RangeConfig::default();
    println!("\n--- Default bands ---");
    for shape in PositionShape::ALL {
        let range = state.position_range(shape, &config)?;
        println!(
            "{shape:<5} band [{}, {}] ticks [{}, {}] width {}",
            range.band[0],
            range.band[1],
            range.tick_lower,
            range.tick_upper,
            range.width()
        );
    }

    // ── 4. A tighter PLAIN band and a disabled PUT ─────────────────────
    let custom = config
        .with_rule(
            PositionShape::Plain,
            BandRule::Symmetric {
                half_width: BasisPoints::new(250),
            },
        )?
        .with_rule(PositionShape::Put, BandRule::Unsupported)?;

    println!("\n--- Custom bands ---");
    for shape in PositionShape::ALL {
        match state.position_range(shape, &custom) {
            Ok(range) => println!(
                "{shape:<5} ticks [{}, {}] width {}",
                range.tick_lower,
                range.tick_upper,
                range.width()
            ),
            Err(e) => println!("{shape:<5} {e}"),
        }
    }

    // ── 5. Back from a human price to a usable tick ────────────────────
    let target = HumanPrice::from_f64(2_500.0)?;
    let tick = tick_from_human_price(
        &target,
        state.pair().token0().decimals(),
        state.pair().token1().decimals(),
        state.invert_price(),
        Some(state.tick_spacing()),
    )?;
    println!("\nPrice {target} USDC/WETH sits at usable tick {tick}");

    Ok(())
}
