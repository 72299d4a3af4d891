//! Depth Book Example
//!
//! This example polls a synthetic market-data provider and renders the
//! resulting depth book:
//! - Best bid/ask and spread
//! - Cumulative liquidity per level
//! - Truncation to the configured number of displayed levels
//!
//! Run with: `cargo run --example depth_book`

use amm_engine_rs::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> EngineResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    println!("=== Depth Book Example ===\n");

    let provider = SyntheticMarketData::new(SyntheticConfig::default().with_levels(12))?;
    let aggregator = DepthAggregator::new(DepthConfig::new(5)?)?;

    for tick in 0..2 {
        if tick == 1 {
            provider.set_base_price(2475.0)?;
        }
        let snapshot = provider.snapshot().await?;
        let book = aggregator.build_limited(&snapshot.liquidity, snapshot.current_price);

        println!(
            "Snapshot #{} (mid {:.2}):",
            snapshot.sequence,
            snapshot.current_price.value()
        );
        for level in book.asks.iter().rev() {
            println!(
                "  ASK {:>10.2} {:>6.2} {:>8.2}",
                level.price.value(),
                level.liquidity,
                level.cumulative_liquidity
            );
        }
        println!("  ---");
        for level in &book.bids {
            println!(
                "  BID {:>10.2} {:>6.2} {:>8.2}",
                level.price.value(),
                level.liquidity,
                level.cumulative_liquidity
            );
        }

        match book.spread_pct {
            Some(spread) => println!("  Spread: {spread:.3}%"),
            None => println!("  Spread: n/a"),
        }
        println!("  Imbalance: {:+.3}\n", book.imbalance());
    }

    let empty = build_book(&[], PricePoint::new(2450.0)?);
    println!(
        "Empty market -> no bids: {}, no asks: {}",
        empty.is_side_empty(Side::Bid),
        empty.is_side_empty(Side::Ask)
    );

    Ok(())
}
