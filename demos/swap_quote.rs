//! Swap Quote Example
//!
//! This example quotes ETH -> USDC swaps of increasing size:
//! - Rate, output and minimum received under 0.5% slippage
//! - Price impact against a balance-derived depth proxy
//! - Impact tier classification
//!
//! Run with: `cargo run --example swap_quote`

use amm_engine_rs::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    println!("=== Swap Quote Example ===\n");

    let engine = QuoteEngine::default();
    let reserves = engine
        .reserves_from_balances(2.5, 6_000.0)
        .expect("Valid balances");

    println!("Depth proxy (balance x {}):", engine.config().depth_multiplier);
    println!("  ETH side: {}", reserves.reserve_in);
    println!("  USDC side: {}\n", reserves.reserve_out);

    for amount in [0.0, 1.0, 10.0, 50.0, 200.0] {
        let quote = engine.quote_with_reserves(amount, 2450.0, 1.0, &reserves, 0.5);
        println!("Swap {amount} ETH:");
        println!("  Rate: 1 ETH = {:.2} USDC", quote.rate);
        println!("  Output: {:.2} USDC", quote.amount_out);
        println!("  Min received: {:.2} USDC", quote.min_received);
        println!(
            "  Price impact: {:.2}% ({:?})\n",
            quote.price_impact_pct,
            quote.impact_tier()
        );
    }

    // Rejected input falls back to a zero quote.
    let rejected = engine.compute_quote(-1.0, 2450.0, 1.0, 2500.0, 6_000_000.0, 0.5);
    println!("Negative amount -> zero quote: {}", rejected.is_zero());

    match engine.try_quote(1.0, 2450.0, 0.0, 2500.0, 6_000_000.0, 0.5) {
        Ok(quote) => println!("Unexpected quote: {:?}", quote),
        Err(err) => println!("Zero output price -> {err}"),
    }
}
