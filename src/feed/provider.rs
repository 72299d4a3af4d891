//! Market-data collaborator interface.
//!
//! The engine itself never fetches data. Callers pull a [`MarketSnapshot`]
//! from a [`MarketDataProvider`] on their own cadence and feed its parts into
//! the range, quote and depth modules.

use async_trait::async_trait;

use crate::depth::LiquiditySample;
use crate::quote::ReservePair;
use crate::types::error::EngineResult;
use crate::types::primitives::PricePoint;

/// Everything the engine consumes for one refresh tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Current pool price in quote-per-base units.
    pub current_price: PricePoint,

    /// Recent chart prices (candle highs and lows) used for the axis window.
    pub price_samples: Vec<f64>,

    /// Pool depth backing swap quotes.
    pub reserves: ReservePair,

    /// Raw liquidity observations for the depth book.
    pub liquidity: Vec<LiquiditySample>,

    /// Monotonic sequence number of the snapshot.
    pub sequence: u64,
}

/// Source of market snapshots.
///
/// # Implementation Notes
///
/// - Implementations should be `Send + Sync` for use with async runtimes
/// - Errors are reported as `EngineError::DataUnavailable`
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the latest snapshot.
    async fn snapshot(&self) -> EngineResult<MarketSnapshot>;

    /// Fetches only the current price.
    async fn current_price(&self) -> EngineResult<PricePoint> {
        Ok(self.snapshot().await?.current_price)
    }
}
