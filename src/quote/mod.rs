//! Swap quote engine.
//!
//! # Key Formulas
//!
//! ```text
//! rate          = price_in / price_out
//! amount_out    = amount_in * rate
//! impact_pct    = clamp(amount_in / pool_depth_in * K, 0, 100)
//! min_received  = amount_out * (1 - slippage_pct / 100)
//! ```
//!
//! Callers conventionally read an impact below 1% as safe, 1–5% as
//! cautionary and above 5% as high risk; see [`ImpactTier`].

/// Quote computation.
pub mod engine;

/// Quote, impact tier and reserve values.
pub mod model;

pub use engine::{MAX_IMPACT_PCT, QuoteEngine};
pub use model::{ImpactTier, Quote, ReservePair};
