//! Aggregated depth book.

use crate::types::primitives::{Liquidity, Percent, PricePoint, Side};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One price level of a depth ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthLevel {
    /// Level price.
    pub price: PricePoint,
    /// Liquidity resting at this price.
    pub liquidity: Liquidity,
    /// Liquidity summed from the best level of the side through this one.
    pub cumulative_liquidity: Liquidity,
}

impl DepthLevel {
    /// Creates a depth level.
    #[must_use]
    pub fn new(price: PricePoint, liquidity: Liquidity, cumulative_liquidity: Liquidity) -> Self {
        Self {
            price,
            liquidity,
            cumulative_liquidity,
        }
    }

    /// Returns the notional value at this level (price * liquidity), saturating at `f64::MAX`.
    #[must_use]
    pub fn notional(&self) -> f64 {
        (self.price.value() * self.liquidity).min(f64::MAX)
    }
}

/// Bid and ask ladders with summary statistics.
///
/// Bids are sorted by price descending and asks ascending, so index `0` is
/// the best level of each side. An empty side is a normal state (a new or
/// thin market), reported through `None` for the best price and spread.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::depth::{LiquiditySample, build_book};
/// use amm_engine_rs::types::primitives::PricePoint;
///
/// let p = |v| PricePoint::new(v).unwrap();
/// let book = build_book(
///     &[
///         LiquiditySample::new(p(99.0), 2.0),
///         LiquiditySample::new(p(98.0), 3.0),
///         LiquiditySample::new(p(101.0), 1.0),
///     ],
///     p(100.0),
/// );
/// assert_eq!(book.best_bid, Some(p(99.0)));
/// assert_eq!(book.best_ask, Some(p(101.0)));
/// assert_eq!(book.bids[1].cumulative_liquidity, 5.0);
/// assert!((book.spread_pct.unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthBook {
    /// Bid levels, best (highest) first.
    pub bids: Vec<DepthLevel>,
    /// Ask levels, best (lowest) first.
    pub asks: Vec<DepthLevel>,
    /// Highest bid price.
    pub best_bid: Option<PricePoint>,
    /// Lowest ask price.
    pub best_ask: Option<PricePoint>,
    /// `(best_ask - best_bid) / mid_price * 100` when both sides exist.
    pub spread_pct: Option<Percent>,
    /// Mid price the book was built around.
    pub mid_price: PricePoint,
}

impl DepthBook {
    /// Creates a book with no levels.
    #[must_use]
    pub fn empty(mid_price: PricePoint) -> Self {
        Self::from_sides(Vec::new(), Vec::new(), mid_price)
    }

    /// Builds a book from already ordered ladders, deriving the summary fields.
    pub(crate) fn from_sides(
        bids: Vec<DepthLevel>,
        asks: Vec<DepthLevel>,
        mid_price: PricePoint,
    ) -> Self {
        let best_bid = bids.first().map(|l| l.price);
        let best_ask = asks.first().map(|l| l.price);
        let spread_pct = match (best_bid, best_ask) {
            (Some(bid), Some(ask)) => {
                Some((ask.value() - bid.value()) / mid_price.value() * 100.0)
                    .filter(|pct| pct.is_finite())
            }
            _ => None,
        };

        Self {
            bids,
            asks,
            best_bid,
            best_ask,
            spread_pct,
            mid_price,
        }
    }

    /// Levels of one side, best first.
    #[must_use]
    pub fn levels(&self, side: Side) -> &[DepthLevel] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Best price of one side.
    #[must_use]
    pub fn best(&self, side: Side) -> Option<PricePoint> {
        match side {
            Side::Bid => self.best_bid,
            Side::Ask => self.best_ask,
        }
    }

    /// Returns true if `side` has no levels.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.levels(side).is_empty()
    }

    /// Returns true if both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total liquidity of one side.
    #[must_use]
    pub fn total_liquidity(&self, side: Side) -> Liquidity {
        self.levels(side)
            .last()
            .map_or(0.0, |l| l.cumulative_liquidity)
    }

    /// Absolute spread (best ask - best bid).
    #[must_use]
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some(ask.value() - bid.value()),
            _ => None,
        }
    }

    /// Midpoint between best bid and best ask, independent of the hint.
    #[must_use]
    pub fn market_mid(&self) -> Option<f64> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some(bid.value() / 2.0 + ask.value() / 2.0),
            _ => None,
        }
    }

    /// Imbalance ratio: `(bid_depth - ask_depth) / (bid_depth + ask_depth)`.
    ///
    /// Ranges from `-1` (all asks) to `+1` (all bids); `0` for an empty book.
    #[must_use]
    pub fn imbalance(&self) -> f64 {
        // Halved so the sum of two saturated sides stays finite.
        let bid_depth = self.total_liquidity(Side::Bid) / 2.0;
        let ask_depth = self.total_liquidity(Side::Ask) / 2.0;
        let total = bid_depth + ask_depth;
        if total.is_finite() && total > 0.0 {
            (bid_depth - ask_depth) / total
        } else {
            0.0
        }
    }
}
