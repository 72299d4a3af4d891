//! Raw liquidity observations fed into the depth aggregator.

use crate::types::error::EngineResult;
use crate::types::primitives::{Liquidity, PricePoint, Side};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single (price, liquidity) observation from the market-data collaborator.
///
/// `side` is optional; untagged samples are assigned by comparing their price
/// with the mid price hint passed to the aggregator.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::depth::LiquiditySample;
/// use amm_engine_rs::types::primitives::{PricePoint, Side};
///
/// let mid = PricePoint::new(100.0).unwrap();
/// let sample = LiquiditySample::from_values(99.5, 12.0, None).unwrap();
/// assert_eq!(sample.resolve_side(mid), Side::Bid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiquiditySample {
    /// Price of the observation.
    pub price: PricePoint,
    /// Liquidity available at `price`.
    pub liquidity: Liquidity,
    /// Explicit side, when the source knows it.
    pub side: Option<Side>,
}

impl LiquiditySample {
    /// Creates an untagged sample.
    #[must_use]
    pub fn new(price: PricePoint, liquidity: Liquidity) -> Self {
        Self {
            price,
            liquidity,
            side: None,
        }
    }

    /// Creates a sample tagged as bid liquidity.
    #[must_use]
    pub fn bid(price: PricePoint, liquidity: Liquidity) -> Self {
        Self {
            price,
            liquidity,
            side: Some(Side::Bid),
        }
    }

    /// Creates a sample tagged as ask liquidity.
    #[must_use]
    pub fn ask(price: PricePoint, liquidity: Liquidity) -> Self {
        Self {
            price,
            liquidity,
            side: Some(Side::Ask),
        }
    }

    /// Creates a sample from a raw price.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` if `price` is not positive and finite.
    pub fn from_values(price: f64, liquidity: Liquidity, side: Option<Side>) -> EngineResult<Self> {
        Ok(Self {
            price: PricePoint::new(price)?,
            liquidity,
            side,
        })
    }

    /// Returns true if the sample can contribute depth.
    ///
    /// Zero, negative and non-finite liquidity is not usable.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.liquidity.is_finite() && self.liquidity > 0.0
    }

    /// Side the sample belongs to: its tag, else bid at or below `mid_price_hint`.
    #[must_use]
    pub fn resolve_side(&self, mid_price_hint: PricePoint) -> Side {
        match self.side {
            Some(side) => side,
            None if self.price <= mid_price_hint => Side::Bid,
            None => Side::Ask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> PricePoint {
        PricePoint::new(value).unwrap()
    }

    #[test]
    fn test_resolve_side_by_hint() {
        let mid = price(100.0);
        assert_eq!(LiquiditySample::new(price(100.0), 1.0).resolve_side(mid), Side::Bid);
        assert_eq!(LiquiditySample::new(price(99.0), 1.0).resolve_side(mid), Side::Bid);
        assert_eq!(LiquiditySample::new(price(100.01), 1.0).resolve_side(mid), Side::Ask);
    }

    #[test]
    fn test_explicit_tag_wins() {
        let mid = price(100.0);
        assert_eq!(LiquiditySample::ask(price(95.0), 1.0).resolve_side(mid), Side::Ask);
        assert_eq!(LiquiditySample::bid(price(105.0), 1.0).resolve_side(mid), Side::Bid);
    }

    #[test]
    fn test_is_usable() {
        assert!(LiquiditySample::new(price(1.0), 0.5).is_usable());
        assert!(!LiquiditySample::new(price(1.0), 0.0).is_usable());
        assert!(!LiquiditySample::new(price(1.0), -2.0).is_usable());
        assert!(!LiquiditySample::new(price(1.0), f64::NAN).is_usable());
        assert!(!LiquiditySample::new(price(1.0), f64::INFINITY).is_usable());
    }

    #[test]
    fn test_from_values_rejects_bad_price() {
        assert!(LiquiditySample::from_values(0.0, 1.0, None).is_err());
        assert!(LiquiditySample::from_values(f64::NAN, 1.0, Some(Side::Bid)).is_err());
        let sample = LiquiditySample::from_values(3.0, 1.0, Some(Side::Ask)).unwrap();
        assert_eq!(sample.side, Some(Side::Ask));
    }
}
