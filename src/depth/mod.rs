//! Depth aggregation for order-book-style visualization.
//!
//! This module provides:
//! - Raw liquidity samples with optional side tags
//! - Bid/ask ladders with cumulative liquidity per side
//! - Best bid/ask, spread and imbalance statistics
//!
//! # Key Formulas
//!
//! ```text
//! cumulative[i] = liquidity[0] + ... + liquidity[i]     (best level first)
//! spread_pct    = (best_ask - best_bid) / mid_price * 100
//! ```

/// Sample aggregation and depth truncation.
pub mod aggregator;

/// Depth book and level types.
pub mod book;

/// Raw liquidity samples.
pub mod sample;

pub use aggregator::{DepthAggregator, build_book, limit_depth};
pub use book::{DepthBook, DepthLevel};
pub use sample::LiquiditySample;
