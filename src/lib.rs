//! AMM Quote, Range & Depth Engine
//!
//! A Rust library implementing the numeric core behind an automated market
//! maker trading interface. It turns prices, pool depth and raw liquidity
//! observations into the values a swap or liquidity screen renders, and keeps
//! the user-editable price range valid while it is dragged.
//!
//! # Overview
//!
//! The engine solves three independent problems:
//!
//! - **Range editing**: map prices to a normalized `[0, 100]` chart axis and
//!   back, and maintain a concentrated-liquidity style `[lower, upper]` range
//!   whose bounds can never cross
//! - **Swap quoting**: exchange rate, price impact and minimum received for an
//!   input amount and slippage tolerance
//! - **Depth aggregation**: bid/ask ladders with cumulative liquidity, best
//!   prices and spread
//!
//! All engine operations are pure and synchronous. The caller owns every value
//! between calls (notably the current [`range::PriceRange`]) and decides how
//! often to recompute. Invalid numeric input is rejected or clamped; NaN and
//! infinity never leak into returned values.
//!
//! # Modules
//!
//! - [`range`]: Axis mapping and price range updates
//! - [`quote`]: Swap quote computation
//! - [`depth`]: Depth book aggregation
//! - [`feed`]: Market-data collaborator trait and a synthetic provider
//! - [`config`]: Tunable engine parameters
//! - [`types`]: Common types and error definitions
//!
//! # Examples
//!
//! ```rust
//! use amm_engine_rs::prelude::*;
//!
//! let current = PricePoint::new(2450.0).unwrap();
//! let model = RangeModel::default();
//! let range = model.seed_range(current).unwrap();
//! let window = model.compute_axis_window(&[], &range);
//!
//! // Dragging the lower bound above the upper bound is ignored.
//! let dragged = model.update_lower_bound(2700.0, &range, &window);
//! assert_eq!(dragged, range);
//!
//! let quote = QuoteEngine::default().compute_quote(1.0, 2450.0, 1.0, 2500.0, 2_450_000.0, 0.5);
//! assert!(quote.min_received <= quote.amount_out);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Tunable engine parameters.
pub mod config;

/// Depth book aggregation from raw liquidity samples.
///
/// This module handles:
/// - Side assignment and best-first ordering
/// - Cumulative liquidity per side
/// - Spread and imbalance statistics
pub mod depth;

/// Market-data collaborator boundary.
pub mod feed;

/// Commonly used re-exports.
pub mod prelude;

/// Swap quote computation.
///
/// This module handles:
/// - Exchange rate from token prices
/// - Price impact from pool depth
/// - Minimum received under slippage tolerance
pub mod quote;

/// Price range editing and axis mapping.
///
/// This module handles:
/// - Price to axis coordinate conversion
/// - Visible axis window computation
/// - Drag and step updates that keep `lower < upper`
pub mod range;

/// Common types and error definitions.
pub mod types;
