//! Builds depth books from raw liquidity samples.
//!
//! # Steps
//!
//! 1. Drop samples without usable liquidity
//! 2. Assign each sample a side (its tag, else by the mid price hint)
//! 3. Sort bids descending and asks ascending by price
//! 4. Merge samples at the same price and accumulate running totals
//!
//! The book is rebuilt from scratch on every call; there is no incremental
//! update path, so cumulative totals cannot go stale.

use tracing::trace;

use crate::config::DepthConfig;
use crate::depth::book::{DepthBook, DepthLevel};
use crate::depth::sample::LiquiditySample;
use crate::types::error::EngineResult;
use crate::types::primitives::{Liquidity, PricePoint, Side};

/// Aggregates liquidity samples into depth books.
#[derive(Debug, Clone, Default)]
pub struct DepthAggregator {
    config: DepthConfig,
}

impl DepthAggregator {
    /// Creates an aggregator with validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `config` is invalid.
    pub fn new(config: DepthConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Builds the full book. See [`build_book`].
    #[must_use]
    pub fn build_book(&self, samples: &[LiquiditySample], mid_price_hint: PricePoint) -> DepthBook {
        build_book(samples, mid_price_hint)
    }

    /// Builds the book and keeps the configured number of levels per side.
    #[must_use]
    pub fn build_limited(
        &self,
        samples: &[LiquiditySample],
        mid_price_hint: PricePoint,
    ) -> DepthBook {
        limit_depth(
            &build_book(samples, mid_price_hint),
            self.config.max_levels,
        )
    }
}

/// Aggregates `samples` into a depth book around `mid_price_hint`.
///
/// Samples with zero, negative or non-finite liquidity are dropped. Samples at
/// the same price on the same side merge into a single level. An empty input
/// gives an empty book with no spread.
#[must_use]
pub fn build_book(samples: &[LiquiditySample], mid_price_hint: PricePoint) -> DepthBook {
    let mut bids: Vec<(PricePoint, Liquidity)> = Vec::new();
    let mut asks: Vec<(PricePoint, Liquidity)> = Vec::new();

    for sample in samples {
        if !sample.is_usable() {
            trace!(
                price = sample.price.value(),
                liquidity = sample.liquidity,
                "dropping sample without usable liquidity"
            );
            continue;
        }
        match sample.resolve_side(mid_price_hint) {
            Side::Bid => bids.push((sample.price, sample.liquidity)),
            Side::Ask => asks.push((sample.price, sample.liquidity)),
        }
    }

    bids.sort_by(|a, b| b.0.value().total_cmp(&a.0.value()));
    asks.sort_by(|a, b| a.0.value().total_cmp(&b.0.value()));

    DepthBook::from_sides(accumulate(bids), accumulate(asks), mid_price_hint)
}

/// Keeps the first `max_levels` levels of each side.
///
/// Truncation happens after aggregation and keeps a best-first prefix, so
/// the cumulative totals shown are sums over displayed levels only.
#[must_use]
pub fn limit_depth(book: &DepthBook, max_levels: usize) -> DepthBook {
    let bids = book.bids.iter().take(max_levels).copied().collect();
    let asks = book.asks.iter().take(max_levels).copied().collect();
    DepthBook::from_sides(bids, asks, book.mid_price)
}

/// Turns a best-first list of entries into levels with running totals.
fn accumulate(entries: Vec<(PricePoint, Liquidity)>) -> Vec<DepthLevel> {
    let mut levels: Vec<DepthLevel> = Vec::with_capacity(entries.len());
    let mut running = 0.0;

    // Totals saturate at f64::MAX; a sum of finite samples can still overflow.
    for (price, liquidity) in entries {
        running = (running + liquidity).min(f64::MAX);
        match levels.last_mut() {
            Some(last) if last.price == price => {
                last.liquidity = (last.liquidity + liquidity).min(f64::MAX);
                last.cumulative_liquidity = running;
            }
            _ => levels.push(DepthLevel::new(price, liquidity, running)),
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> PricePoint {
        PricePoint::new(value).unwrap()
    }

    fn sample(p: f64, liquidity: f64) -> LiquiditySample {
        LiquiditySample::new(price(p), liquidity)
    }

    fn ladder() -> Vec<LiquiditySample> {
        let mut samples = Vec::new();
        for i in 1..=10 {
            let offset = f64::from(i);
            samples.push(sample(100.0 - offset, offset));
            samples.push(sample(100.0 + offset, 2.0 * offset));
        }
        samples
    }

    fn assert_monotone(levels: &[DepthLevel]) {
        for pair in levels.windows(2) {
            assert!(pair[0].cumulative_liquidity <= pair[1].cumulative_liquidity);
        }
    }

    #[test]
    fn test_empty_samples() {
        let book = build_book(&[], price(100.0));
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert_eq!(book.spread_pct, None);
        assert_eq!(book.best_bid, None);
        assert_eq!(book.best_ask, None);
    }

    #[test]
    fn test_ladder_around_mid() {
        let mut samples = ladder();
        samples.reverse();
        let book = build_book(&samples, price(100.0));

        assert_eq!(book.bids.len(), 10);
        assert_eq!(book.asks.len(), 10);
        assert_eq!(book.bids[0].price.value(), 99.0);
        assert_eq!(book.asks[0].price.value(), 101.0);
        assert_eq!(book.best_bid, Some(price(99.0)));
        assert_eq!(book.best_ask, Some(price(101.0)));

        let expected = (101.0 - 99.0) / 100.0 * 100.0;
        assert!((book.spread_pct.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sides_sorted_best_first() {
        let book = build_book(&ladder(), price(100.0));
        for pair in book.bids.windows(2) {
            assert!(pair[0].price > pair[1].price);
        }
        for pair in book.asks.windows(2) {
            assert!(pair[0].price < pair[1].price);
        }
    }

    #[test]
    fn test_cumulative_totals() {
        let book = build_book(&ladder(), price(100.0));
        assert_monotone(&book.bids);
        assert_monotone(&book.asks);
        assert_eq!(book.bids[0].cumulative_liquidity, 1.0);
        assert_eq!(book.bids[2].cumulative_liquidity, 6.0);
        assert_eq!(book.total_liquidity(Side::Bid), 55.0);
        assert_eq!(book.total_liquidity(Side::Ask), 110.0);
    }

    #[test]
    fn test_drops_unusable_liquidity() {
        let samples = [
            sample(99.0, 0.0),
            sample(98.0, -4.0),
            sample(97.0, f64::NAN),
            sample(96.0, 2.0),
            sample(101.0, f64::INFINITY),
        ];
        let book = build_book(&samples, price(100.0));
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.bids[0].price.value(), 96.0);
        assert!(book.asks.is_empty());
        assert_eq!(book.spread_pct, None);
    }

    #[test]
    fn test_price_equal_to_hint_is_bid() {
        let book = build_book(&[sample(100.0, 1.0)], price(100.0));
        assert_eq!(book.best_bid, Some(price(100.0)));
        assert!(book.asks.is_empty());
    }

    #[test]
    fn test_explicit_tags_override_hint() {
        let samples = [
            LiquiditySample::ask(price(99.5), 1.0),
            LiquiditySample::bid(price(99.0), 1.0),
        ];
        let book = build_book(&samples, price(100.0));
        assert_eq!(book.best_ask, Some(price(99.5)));
        assert_eq!(book.best_bid, Some(price(99.0)));
    }

    #[test]
    fn test_same_price_merges() {
        let samples = [sample(99.0, 1.0), sample(98.0, 2.0), sample(99.0, 3.0)];
        let book = build_book(&samples, price(100.0));
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.bids[0].liquidity, 4.0);
        assert_eq!(book.bids[0].cumulative_liquidity, 4.0);
        assert_eq!(book.bids[1].cumulative_liquidity, 6.0);
    }

    #[test]
    fn test_limit_depth_keeps_prefix() {
        let book = build_book(&ladder(), price(100.0));
        let limited = limit_depth(&book, 3);
        assert_eq!(limited.bids.len(), 3);
        assert_eq!(limited.asks.len(), 3);
        assert_eq!(limited.bids[..], book.bids[..3]);
        assert_eq!(limited.asks[..], book.asks[..3]);
        assert_eq!(limited.total_liquidity(Side::Bid), 6.0);
        assert_eq!(limited.best_bid, book.best_bid);
        assert_eq!(limited.spread_pct, book.spread_pct);
    }

    #[test]
    fn test_limit_depth_larger_than_book() {
        let book = build_book(&ladder(), price(100.0));
        assert_eq!(limit_depth(&book, 50), book);
    }

    #[test]
    fn test_limit_depth_zero_levels() {
        let book = build_book(&ladder(), price(100.0));
        let limited = limit_depth(&book, 0);
        assert!(limited.is_empty());
        assert_eq!(limited.spread_pct, None);
    }

    #[test]
    fn test_aggregator_build_limited() {
        let aggregator = DepthAggregator::new(DepthConfig::new(4).unwrap()).unwrap();
        let book = aggregator.build_limited(&ladder(), price(100.0));
        assert_eq!(book.bids.len(), 4);
        assert_eq!(book.asks.len(), 4);
        assert_eq!(aggregator.build_book(&ladder(), price(100.0)).bids.len(), 10);
    }

    #[test]
    fn test_aggregator_rejects_zero_levels() {
        assert!(DepthAggregator::new(DepthConfig { max_levels: 0 }).is_err());
    }

    #[test]
    fn test_huge_liquidity_saturates() {
        let samples = vec![
            LiquiditySample::bid(price(99.0), f64::MAX),
            LiquiditySample::bid(price(98.0), f64::MAX),
            LiquiditySample::ask(price(101.0), f64::MAX),
            LiquiditySample::ask(price(102.0), f64::MAX),
        ];
        let book = build_book(&samples, price(100.0));

        assert_eq!(book.bids[1].cumulative_liquidity, f64::MAX);
        assert_eq!(book.asks[1].cumulative_liquidity, f64::MAX);
        assert_monotone(&book.bids);
        assert_eq!(book.total_liquidity(Side::Bid), f64::MAX);
        assert_eq!(book.imbalance(), 0.0);
    }

    #[test]
    fn test_huge_liquidity_same_price_merge_saturates() {
        let samples = vec![
            LiquiditySample::bid(price(99.0), f64::MAX),
            LiquiditySample::bid(price(99.0), f64::MAX),
            LiquiditySample::ask(price(101.0), 1.0),
        ];
        let book = build_book(&samples, price(100.0));

        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.bids[0].liquidity, f64::MAX);
        assert_eq!(book.bids[0].cumulative_liquidity, f64::MAX);
        let imbalance = book.imbalance();
        assert!(imbalance.is_finite());
        assert!((imbalance - 1.0).abs() < 1e-12);
    }
}
