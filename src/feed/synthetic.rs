//! Deterministic synthetic market data.
//!
//! Stands in for a real chain or exchange feed in demos and tests. Every
//! snapshot is a pure function of the configuration, the current base price
//! and the sequence number, so tests can assert on exact values.
//!
//! # Example
//!
//! ```rust
//! use amm_engine_rs::feed::{SyntheticConfig, SyntheticMarketData};
//!
//! let config = SyntheticConfig::default().with_base_price(2450.0).with_levels(5);
//! let provider = SyntheticMarketData::new(config).unwrap();
//! assert_eq!(provider.config().levels, 5);
//! // In an async context: provider.snapshot().await
//! ```

use async_trait::async_trait;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::depth::LiquiditySample;
use crate::feed::provider::{MarketDataProvider, MarketSnapshot};
use crate::config::QuoteConfig;
use crate::quote::QuoteEngine;
use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::{Amount, PricePoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`SyntheticMarketData`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntheticConfig {
    /// Starting mid price.
    pub base_price: f64,

    /// Bid/ask spread around the mid, as a ratio (0.002 = 0.2%).
    pub spread: f64,

    /// Distance between adjacent levels, as a ratio of the mid price.
    pub tick: f64,

    /// Levels generated per side.
    pub levels: usize,

    /// Number of chart price samples generated.
    pub candles: usize,

    /// Peak relative swing of the chart samples around the mid.
    pub swing: f64,

    /// Input-token balance used for the depth proxy.
    pub balance_in: Amount,

    /// Output-token balance used for the depth proxy.
    pub balance_out: Amount,

    /// Quote settings whose `depth_multiplier` turns the balances into reserves.
    pub quote: QuoteConfig,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            base_price: 2450.0,
            spread: 0.002,
            tick: 0.001,
            levels: 10,
            candles: 48,
            swing: 0.05,
            balance_in: 2.5,
            balance_out: 6000.0,
            quote: QuoteConfig::default(),
        }
    }
}

impl SyntheticConfig {
    /// Sets the starting mid price.
    #[must_use]
    pub fn with_base_price(mut self, price: f64) -> Self {
        self.base_price = price;
        self
    }

    /// Sets the spread ratio.
    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the number of levels per side.
    #[must_use]
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the token balances used for the depth proxy.
    #[must_use]
    pub fn with_balances(mut self, balance_in: Amount, balance_out: Amount) -> Self {
        self.balance_in = balance_in;
        self.balance_out = balance_out;
        self
    }

    /// Sets the quote settings used to derive reserves from the balances.
    #[must_use]
    pub fn with_quote_config(mut self, quote: QuoteConfig) -> Self {
        self.quote = quote;
        self
    }

    /// Checks every parameter against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if !PricePoint::is_valid(self.base_price) {
            return Err(EngineError::InvalidConfiguration(
                "base_price must be positive and finite".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.spread) {
            return Err(EngineError::InvalidConfiguration(
                "spread must be in [0, 1)".to_string(),
            ));
        }
        if !(self.tick > 0.0 && self.tick < 1.0) {
            return Err(EngineError::InvalidConfiguration(
                "tick must be in (0, 1)".to_string(),
            ));
        }
        // Keep the deepest bid above zero.
        if self.spread / 2.0 + self.tick * self.levels as f64 >= 1.0 {
            return Err(EngineError::InvalidConfiguration(
                "levels * tick + spread / 2 must stay below 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.swing) {
            return Err(EngineError::InvalidConfiguration(
                "swing must be in [0, 1)".to_string(),
            ));
        }
        QuoteEngine::new(self.quote.clone())?
            .reserves_from_balances(self.balance_in, self.balance_out)
            .map_err(|_| {
                EngineError::InvalidConfiguration(
                    "balances and quote.depth_multiplier must give finite non-negative depth"
                        .to_string(),
                )
            })?;
        Ok(())
    }
}

/// Deterministic [`MarketDataProvider`] for demos and tests.
#[derive(Debug)]
pub struct SyntheticMarketData {
    config: SyntheticConfig,
    engine: QuoteEngine,
    base_price: RwLock<PricePoint>,
    sequence: AtomicU64,
}

impl SyntheticMarketData {
    /// Creates a provider from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `config` is invalid.
    pub fn new(config: SyntheticConfig) -> EngineResult<Self> {
        config.validate()?;
        let base_price = PricePoint::new(config.base_price)?;
        let engine = QuoteEngine::new(config.quote.clone())?;
        Ok(Self {
            config,
            engine,
            base_price: RwLock::new(base_price),
            sequence: AtomicU64::new(0),
        })
    }

    /// Creates a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; kept fallible for symmetry with [`Self::new`].
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(SyntheticConfig::default())
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Moves the simulated mid price.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` for an invalid price and
    /// `EngineError::DataUnavailable` if the price lock is poisoned.
    pub fn set_base_price(&self, price: f64) -> EngineResult<()> {
        let price = PricePoint::new(price)?;
        let mut guard = self
            .base_price
            .write()
            .map_err(|_| EngineError::DataUnavailable("price lock poisoned".to_string()))?;
        *guard = price;
        Ok(())
    }

    fn base_price(&self) -> EngineResult<PricePoint> {
        self.base_price
            .read()
            .map(|guard| *guard)
            .map_err(|_| EngineError::DataUnavailable("price lock poisoned".to_string()))
    }

    /// Chart samples oscillating around the mid price.
    fn generate_price_samples(&self, mid: PricePoint, sequence: u64) -> Vec<f64> {
        (0..self.config.candles)
            .map(|i| {
                let phase = (i as f64 + sequence as f64) * 0.35;
                mid.value() * (1.0 + self.config.swing * phase.sin())
            })
            .collect()
    }

    /// Bid and ask samples stepping away from the mid by one tick per level.
    fn generate_liquidity(&self, mid: PricePoint) -> EngineResult<Vec<LiquiditySample>> {
        let half_spread = mid.value() * self.config.spread / 2.0;
        let tick_size = mid.value() * self.config.tick;

        let mut samples = Vec::with_capacity(self.config.levels * 2);
        for i in 0..self.config.levels {
            let offset = tick_size * i as f64;
            let liquidity = 1.0 + i as f64 * 0.5;

            let bid_price = PricePoint::new(mid.value() - half_spread - offset)?;
            samples.push(LiquiditySample::bid(bid_price, liquidity));

            let ask_price = PricePoint::new(mid.value() + half_spread + offset)?;
            samples.push(LiquiditySample::ask(ask_price, liquidity));
        }
        Ok(samples)
    }
}

#[async_trait]
impl MarketDataProvider for SyntheticMarketData {
    async fn snapshot(&self) -> EngineResult<MarketSnapshot> {
        let mid = self.base_price()?;
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let reserves = self
            .engine
            .reserves_from_balances(self.config.balance_in, self.config.balance_out)?;

        Ok(MarketSnapshot {
            current_price: mid,
            price_samples: self.generate_price_samples(mid, sequence),
            reserves,
            liquidity: self.generate_liquidity(mid)?,
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::build_book;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SyntheticConfig::default().validate().is_ok());
        assert!(SyntheticMarketData::with_defaults().is_ok());
    }

    #[test]
    fn test_config_rejects_ladder_below_zero() {
        let config = SyntheticConfig::default().with_levels(2000);
        assert!(matches!(
            SyntheticMarketData::new(config),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_rejects_bad_price() {
        let config = SyntheticConfig::default().with_base_price(-1.0);
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_snapshot_shape() {
        let provider = SyntheticMarketData::with_defaults().unwrap();
        let snapshot = provider.snapshot().await.unwrap();

        assert_eq!(snapshot.current_price.value(), 2450.0);
        assert_eq!(snapshot.price_samples.len(), 48);
        assert_eq!(snapshot.liquidity.len(), 20);
        assert_eq!(snapshot.reserves.reserve_in, 2500.0);
        assert_eq!(snapshot.sequence, 0);
    }

    #[tokio::test]
    async fn test_sequence_advances() {
        let provider = SyntheticMarketData::with_defaults().unwrap();
        let first = provider.snapshot().await.unwrap();
        let second = provider.snapshot().await.unwrap();
        assert_eq!(second.sequence, first.sequence + 1);
    }

    #[tokio::test]
    async fn test_liquidity_brackets_mid() {
        let provider = SyntheticMarketData::with_defaults().unwrap();
        let snapshot = provider.snapshot().await.unwrap();
        let book = build_book(&snapshot.liquidity, snapshot.current_price);

        assert_eq!(book.bids.len(), 10);
        assert_eq!(book.asks.len(), 10);
        assert!(book.best_bid.unwrap() < snapshot.current_price);
        assert!(book.best_ask.unwrap() > snapshot.current_price);
        // spread config 0.2% of mid
        assert!((book.spread_pct.unwrap() - 0.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_set_base_price() {
        let provider = SyntheticMarketData::with_defaults().unwrap();
        provider.set_base_price(100.0).unwrap();
        assert_eq!(provider.current_price().await.unwrap().value(), 100.0);
        assert!(matches!(
            provider.set_base_price(f64::NAN),
            Err(EngineError::InvalidPrice(_))
        ));
    }

    #[tokio::test]
    async fn test_price_samples_stay_within_swing() {
        let provider = SyntheticMarketData::with_defaults().unwrap();
        let snapshot = provider.snapshot().await.unwrap();
        for sample in snapshot.price_samples {
            assert!(sample >= 2450.0 * 0.95 - 1e-9);
            assert!(sample <= 2450.0 * 1.05 + 1e-9);
        }
    }

    #[tokio::test]
    async fn test_reserves_follow_quote_config() {
        let quote = QuoteConfig::default().with_depth_multiplier(10.0);
        let config = SyntheticConfig::default().with_quote_config(quote.clone());
        let provider = SyntheticMarketData::new(config).unwrap();
        let snapshot = provider.snapshot().await.unwrap();

        let engine = QuoteEngine::new(quote).unwrap();
        let expected = engine.reserves_from_balances(2.5, 6000.0).unwrap();
        assert_eq!(snapshot.reserves, expected);
        assert_eq!(snapshot.reserves.reserve_in, 25.0);
    }

    #[test]
    fn test_config_rejects_invalid_quote_settings() {
        let quote = QuoteConfig::default().with_depth_multiplier(-1.0);
        let config = SyntheticConfig::default().with_quote_config(quote);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }
}
