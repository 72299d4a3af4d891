//! Swap quote computation.
//!
//! # Depth proxy
//!
//! Price impact is modelled as the share of input-side pool depth a trade
//! consumes, scaled by a calibration constant `K`:
//!
//! ```text
//! impact_pct = amount_in / pool_depth_in * K        clamped to [0, 100]
//! ```
//!
//! Real reserves are often unavailable to the caller. In that case depth is
//! approximated as `balance * depth_multiplier` (default `1000`) through
//! [`ReservePair::from_balances`]. Neither constant carries a real-world
//! calibration; both are tunable through [`QuoteConfig`].
//!
//! # Example
//!
//! ```rust
//! use amm_engine_rs::quote::QuoteEngine;
//!
//! let engine = QuoteEngine::default();
//! let quote = engine.compute_quote(1.0, 2450.0, 1.0, 2500.0, 2_450_000.0, 0.5);
//! assert_eq!(quote.rate, 2450.0);
//! assert_eq!(quote.amount_out, 2450.0);
//! assert!((quote.min_received - 2437.75).abs() < 1e-9);
//! ```

use tracing::debug;

use crate::config::QuoteConfig;
use crate::quote::model::{Quote, ReservePair};
use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::{Amount, Percent, PricePoint};

/// Highest price impact the engine reports.
pub const MAX_IMPACT_PCT: Percent = 100.0;

/// Computes quotes from token prices, pool depth and slippage tolerance.
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    /// Creates a quote engine with validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `config` is invalid.
    pub fn new(config: QuoteConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Exchange rate `price_in / price_out`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` if either price is zero, negative
    /// or not finite. A zero `price_out` is rejected before dividing.
    pub fn compute_rate(price_in: f64, price_out: f64) -> EngineResult<f64> {
        let price_in = PricePoint::new(price_in)?;
        let price_out = PricePoint::new(price_out)?;
        let rate = price_in.value() / price_out.value();
        if rate.is_finite() {
            Ok(rate)
        } else {
            Err(EngineError::InvalidPrice(rate))
        }
    }

    /// Estimated price impact in percent for swapping `amount_in`.
    ///
    /// Zero, negative or non-finite amounts have no impact. An empty or
    /// invalid input-side pool cannot absorb any trade and reports the
    /// maximum. Only `pool_depth_in` enters the formula; `pool_depth_out` may
    /// be unknown (zero) when quoting from prices alone.
    #[must_use]
    pub fn compute_price_impact_pct(
        &self,
        amount_in: Amount,
        pool_depth_in: Amount,
        _pool_depth_out: Amount,
    ) -> Percent {
        if !(amount_in.is_finite() && amount_in > 0.0) {
            return 0.0;
        }
        if pool_depth_in.is_nan() || pool_depth_in <= 0.0 {
            return MAX_IMPACT_PCT;
        }

        let impact = amount_in / pool_depth_in * self.config.impact_coefficient;
        if impact.is_nan() {
            MAX_IMPACT_PCT
        } else {
            impact.clamp(0.0, MAX_IMPACT_PCT)
        }
    }

    /// Quotes a swap of `amount_in`, returning a zero quote for rejected input.
    ///
    /// Negative or non-finite amounts and invalid prices yield
    /// [`Quote::zero`]. `slippage_pct` is clamped to `[0, 100]`.
    #[must_use]
    pub fn compute_quote(
        &self,
        amount_in: Amount,
        price_in: f64,
        price_out: f64,
        pool_depth_in: Amount,
        pool_depth_out: Amount,
        slippage_pct: Percent,
    ) -> Quote {
        self.try_quote(
            amount_in,
            price_in,
            price_out,
            pool_depth_in,
            pool_depth_out,
            slippage_pct,
        )
        .unwrap_or_else(|err| {
            debug!(%err, amount_in, price_in, price_out, "quote rejected, returning zero quote");
            Quote::zero()
        })
    }

    /// Quotes a swap, reporting why the input was rejected.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidAmount` for a negative or non-finite
    /// amount (or one whose output overflows) and `EngineError::InvalidPrice`
    /// when the rate cannot be computed.
    pub fn try_quote(
        &self,
        amount_in: Amount,
        price_in: f64,
        price_out: f64,
        pool_depth_in: Amount,
        pool_depth_out: Amount,
        slippage_pct: Percent,
    ) -> EngineResult<Quote> {
        if !(amount_in.is_finite() && amount_in >= 0.0) {
            return Err(EngineError::InvalidAmount(amount_in));
        }

        let rate = Self::compute_rate(price_in, price_out)?;
        let amount_out = amount_in * rate;
        if !amount_out.is_finite() {
            return Err(EngineError::InvalidAmount(amount_in));
        }

        let slippage = self.sanitize_slippage(slippage_pct);
        let min_received = amount_out * (1.0 - slippage / 100.0);

        Ok(Quote {
            rate,
            amount_out,
            price_impact_pct: self.compute_price_impact_pct(
                amount_in,
                pool_depth_in,
                pool_depth_out,
            ),
            min_received,
        })
    }

    /// Quotes a swap against a [`ReservePair`].
    #[must_use]
    pub fn quote_with_reserves(
        &self,
        amount_in: Amount,
        price_in: f64,
        price_out: f64,
        reserves: &ReservePair,
        slippage_pct: Percent,
    ) -> Quote {
        self.compute_quote(
            amount_in,
            price_in,
            price_out,
            reserves.reserve_in,
            reserves.reserve_out,
            slippage_pct,
        )
    }

    /// Builds a depth proxy from balances using the configured multiplier.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidAmount` if a scaled balance is negative or not finite.
    pub fn reserves_from_balances(
        &self,
        balance_in: Amount,
        balance_out: Amount,
    ) -> EngineResult<ReservePair> {
        ReservePair::from_balances(balance_in, balance_out, self.config.depth_multiplier)
    }

    fn sanitize_slippage(&self, slippage_pct: Percent) -> Percent {
        if slippage_pct.is_nan() {
            self.config.default_slippage_pct
        } else {
            slippage_pct.clamp(0.0, 100.0)
        }
    }
}
