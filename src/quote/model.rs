//! Quote values and the pool depth inputs they are computed from.

use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::{Amount, Percent};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Upper edge of the [`ImpactTier::Safe`] band, in percent.
pub const SAFE_IMPACT_PCT: Percent = 1.0;

/// Upper edge of the [`ImpactTier::Caution`] band, in percent.
pub const CAUTION_IMPACT_PCT: Percent = 5.0;

/// Result of quoting a swap.
///
/// Immutable once computed; recompute on every amount or slippage change.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct Quote {
    /// Output tokens received per input token.
    pub rate: f64,

    /// Expected output for the requested input.
    pub amount_out: Amount,

    /// Estimated price impact in percent, within `[0, 100]`.
    pub price_impact_pct: Percent,

    /// Worst-case output after applying slippage tolerance.
    ///
    /// Never greater than `amount_out`.
    pub min_received: Amount,
}

impl Quote {
    /// Quote returned for rejected input: every field zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            rate: 0.0,
            amount_out: 0.0,
            price_impact_pct: 0.0,
            min_received: 0.0,
        }
    }

    /// Returns true if the quote produces no output.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount_out == 0.0
    }

    /// Input tokens per output token, or `None` when the rate is zero.
    #[must_use]
    pub fn inverse_rate(&self) -> Option<f64> {
        if self.rate > 0.0 {
            Some(1.0 / self.rate)
        } else {
            None
        }
    }

    /// Classifies the price impact for caller-side warnings.
    #[must_use]
    pub fn impact_tier(&self) -> ImpactTier {
        ImpactTier::from_pct(self.price_impact_pct)
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::zero()
    }
}

/// Severity band of a price impact.
///
/// The engine only supplies the number; wording and colours are the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactTier {
    /// Below 1%.
    Safe,
    /// From 1% up to and including 5%.
    Caution,
    /// Above 5%.
    High,
}

impl ImpactTier {
    /// Classifies `impact_pct`. NaN falls into [`ImpactTier::High`].
    #[must_use]
    pub fn from_pct(impact_pct: Percent) -> Self {
        if impact_pct < SAFE_IMPACT_PCT {
            Self::Safe
        } else if impact_pct <= CAUTION_IMPACT_PCT {
            Self::Caution
        } else {
            Self::High
        }
    }
}

/// Liquidity backing a quote on each side of the pool.
///
/// When real reserves are unknown, [`ReservePair::from_balances`] builds a
/// proxy by scaling a balance by a fixed multiplier.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct ReservePair {
    /// Depth of the input token side.
    pub reserve_in: Amount,
    /// Depth of the output token side.
    pub reserve_out: Amount,
}

impl ReservePair {
    /// Creates a reserve pair.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidAmount` if either reserve is negative or not finite.
    pub fn new(reserve_in: Amount, reserve_out: Amount) -> EngineResult<Self> {
        for reserve in [reserve_in, reserve_out] {
            if !(reserve.is_finite() && reserve >= 0.0) {
                return Err(EngineError::InvalidAmount(reserve));
            }
        }
        Ok(Self {
            reserve_in,
            reserve_out,
        })
    }

    /// Builds the depth proxy `balance * multiplier` for both sides.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidAmount` if a scaled balance is negative or not finite.
    pub fn from_balances(
        balance_in: Amount,
        balance_out: Amount,
        multiplier: f64,
    ) -> EngineResult<Self> {
        Self::new(balance_in * multiplier, balance_out * multiplier)
    }
}
