//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions of the
//! engine. Users can import everything they need with:
//!
//! ```rust
//! use amm_engine_rs::prelude::*;
//! ```

pub use crate::{Decimal, dec};

// Re-export types module
pub use crate::types::error::{EngineError, EngineResult};
pub use crate::types::primitives::{Amount, Liquidity, Percent, PricePoint, Side};

// Re-export configuration
pub use crate::config::{DepthConfig, EngineConfig, QuoteConfig, RangeConfig};

// Re-export range types
pub use crate::range::{
    AxisWindow, PriceRange, RangeModel, StepDirection, compute_axis_window, map_axis_to_price,
    map_price_to_axis, percent_from_current,
};

// Re-export quote types
pub use crate::quote::{ImpactTier, Quote, QuoteEngine, ReservePair};

// Re-export depth types
pub use crate::depth::{
    DepthAggregator, DepthBook, DepthLevel, LiquiditySample, build_book, limit_depth,
};

// Re-export market data types
pub use crate::feed::{MarketDataProvider, MarketSnapshot, SyntheticConfig, SyntheticMarketData};
