//! Primitive domain types: validated prices, book sides and numeric aliases.

use std::fmt;

use crate::types::error::{EngineError, EngineResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Liquidity amount at a price level, in base units.
pub type Liquidity = f64;

/// Token amount, in the token's display units.
pub type Amount = f64;

/// Percentage value where `1.0` means one percent.
pub type Percent = f64;

/// A strictly positive, finite price in quote-per-base units.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::types::primitives::PricePoint;
///
/// let price = PricePoint::new(2450.0).unwrap();
/// assert_eq!(price.value(), 2450.0);
/// assert!(PricePoint::new(0.0).is_err());
/// assert!(PricePoint::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct PricePoint(f64);

impl PricePoint {
    /// Creates a price, rejecting zero, negative and non-finite values.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` when `value` is not a positive finite number.
    pub fn new(value: f64) -> EngineResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidPrice(value))
        }
    }

    /// Returns the raw price.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `value` would be accepted by [`PricePoint::new`].
    #[must_use]
    pub fn is_valid(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    /// Returns the smaller of two prices.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }

    /// Returns the larger of two prices.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }

    /// Scales the price by `factor`, keeping the result valid.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` when the scaled value is not positive and finite.
    pub fn scaled(self, factor: f64) -> EngineResult<Self> {
        Self::new(self.0 * factor)
    }
}

impl TryFrom<f64> for PricePoint {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PricePoint> for f64 {
    fn from(price: PricePoint) -> Self {
        price.0
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Side of a depth book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Resting buy liquidity, at or below the mid price.
    Bid,
    /// Resting sell liquidity, above the mid price.
    Ask,
}

impl Side {
    /// Returns true for [`Side::Bid`].
    #[must_use]
    pub fn is_bid(self) -> bool {
        matches!(self, Self::Bid)
    }

    /// Returns true for [`Side::Ask`].
    #[must_use]
    pub fn is_ask(self) -> bool {
        matches!(self, Self::Ask)
    }

    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Bid => Self::Ask,
            Self::Ask => Self::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bid => write!(f, "bid"),
            Self::Ask => write!(f, "ask"),
        }
    }
}
