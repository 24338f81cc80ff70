//! Multi-hop swap path example.
//!
//! Encodes a USDC → WETH → WBTC route into the packed byte layout the
//! router expects, decodes it back, and computes the address of every
//! pool the route crosses.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=v3kit=debug cargo run --example swap_path --all-features
//! ```

use tracing_subscriber::EnvFilter;
use v3kit::chain::ChainId;
use v3kit::domain::PoolFee;
use v3kit::path::{decode_first_pool, EncodedPath, SwapRoute};
use v3kit::pool::compute_pool_address;
use v3kit::tokens::mainnet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Swap path encoding ===\n");

    // ── 1. Build the route ──────────────────────────────────────────────
    let route = SwapRoute::new(
        vec![
            mainnet::usdc().address(),
            mainnet::weth().address(),
            mainnet::wbtc().address(),
        ],
        vec![PoolFee::LOW, PoolFee::MEDIUM],
    )?;
    println!("Hops: {}", route.hop_count());

    // ── 2. Encode ───────────────────────────────────────────────────────
    let path = route.encode();
    println!("Encoded ({} bytes): {path}", path.len());

    // ── 3. Peek at the first pool, then decode everything ──────────────
    let first = decode_first_pool(path.as_bytes())?;
    println!(
        "First pool: {} -[{}]-> {}",
        first.token_a, first.fee, first.token_b
    );

    let decoded: EncodedPath = path.to_string().parse()?;
    let round_trip = decoded.decode()?;
    println!("Round trip matches: {}", round_trip == route);

    // ── 4. Pool addresses along the route ──────────────────────────────
    let factory = ChainId::Mainnet.factory();
    for hop in route.hops() {
        let pool = compute_pool_address(factory, hop.token_a, hop.token_b, hop.fee)?;
        println!("  {} / {} @ {}: {pool}", hop.token_a, hop.token_b, hop.fee);
    }

    // ── 5. Exact-output quotes walk the route backwards ────────────────
    let reversed = route.reversed().encode();
    println!("\nReversed: {reversed}");

    Ok(())
}
