//! Engine configuration parameters.
//!
//! Every tunable constant of the range, quote and depth modules lives here so
//! callers can calibrate the engine without touching the math. Each section
//! has a `Default` matching the interface the engine was built for and a
//! validating constructor.
//!
//! # Example
//!
//! ```rust
//! use amm_engine_rs::config::{EngineConfig, QuoteConfig};
//!
//! let config = EngineConfig::default()
//!     .with_quote(QuoteConfig::default().with_impact_coefficient(50.0));
//! assert!(config.validate().is_ok());
//! assert_eq!(config.quote.impact_coefficient, 50.0);
//! ```

use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::Percent;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Parameters for the price range editor and axis mapping.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeConfig {
    /// Half-width of a freshly seeded range, in percent of the current price.
    ///
    /// Must be in `(0, 100)`.
    pub default_width_pct: Percent,

    /// Headroom added below and above the visible axis window, as a ratio.
    ///
    /// `0.02` widens the window by 2% on each side. Must be in `[0, 1)`.
    pub axis_margin: f64,

    /// Minimum relative gap a dragged bound must keep from the opposite bound.
    ///
    /// `0.01` rejects a lower bound at or above 99% of the upper bound.
    /// Must be in `[0, 1)`.
    pub bound_gap: f64,

    /// Size of one step-button increment, in percent of the bound.
    ///
    /// Must be in `(0, 100)`.
    pub step_pct: Percent,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            default_width_pct: 10.0,
            axis_margin: 0.02,
            bound_gap: 0.01,
            step_pct: 1.0,
        }
    }
}

impl RangeConfig {
    /// Creates a range configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if any parameter is out of range.
    pub fn new(
        default_width_pct: Percent,
        axis_margin: f64,
        bound_gap: f64,
        step_pct: Percent,
    ) -> EngineResult<Self> {
        let config = Self {
            default_width_pct,
            axis_margin,
            bound_gap,
            step_pct,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the default range half-width.
    #[must_use]
    pub fn with_default_width_pct(mut self, pct: Percent) -> Self {
        self.default_width_pct = pct;
        self
    }

    /// Sets the axis margin.
    #[must_use]
    pub fn with_axis_margin(mut self, margin: f64) -> Self {
        self.axis_margin = margin;
        self
    }

    /// Sets the bound gap.
    #[must_use]
    pub fn with_bound_gap(mut self, gap: f64) -> Self {
        self.bound_gap = gap;
        self
    }

    /// Sets the step-button increment.
    #[must_use]
    pub fn with_step_pct(mut self, pct: Percent) -> Self {
        self.step_pct = pct;
        self
    }

    /// Checks every parameter against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.default_width_pct > 0.0 && self.default_width_pct < 100.0) {
            return Err(EngineError::InvalidConfiguration(
                "default_width_pct must be in (0, 100)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.axis_margin) {
            return Err(EngineError::InvalidConfiguration(
                "axis_margin must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.bound_gap) {
            return Err(EngineError::InvalidConfiguration(
                "bound_gap must be in [0, 1)".to_string(),
            ));
        }
        if !(self.step_pct > 0.0 && self.step_pct < 100.0) {
            return Err(EngineError::InvalidConfiguration(
                "step_pct must be in (0, 100)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for the swap quote engine.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuoteConfig {
    /// Calibration constant `K` in `impact = amount_in / depth_in * K`.
    ///
    /// The default of `100` reports impact as the percentage of input-side
    /// depth the trade consumes. Must be finite and non-negative.
    pub impact_coefficient: f64,

    /// Multiplier turning a wallet-style balance into a pool depth proxy.
    ///
    /// Used by [`crate::quote::ReservePair::from_balances`] when real reserves
    /// are unknown. Must be finite and positive.
    pub depth_multiplier: f64,

    /// Slippage tolerance used when the caller supplies a non-finite value.
    ///
    /// Must be in `[0, 100]`.
    pub default_slippage_pct: Percent,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            impact_coefficient: 100.0,
            depth_multiplier: 1000.0,
            default_slippage_pct: 0.5,
        }
    }
}

impl QuoteConfig {
    /// Creates a quote configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if any parameter is out of range.
    pub fn new(
        impact_coefficient: f64,
        depth_multiplier: f64,
        default_slippage_pct: Percent,
    ) -> EngineResult<Self> {
        let config = Self {
            impact_coefficient,
            depth_multiplier,
            default_slippage_pct,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the impact calibration constant.
    #[must_use]
    pub fn with_impact_coefficient(mut self, k: f64) -> Self {
        self.impact_coefficient = k;
        self
    }

    /// Sets the balance-to-depth multiplier.
    #[must_use]
    pub fn with_depth_multiplier(mut self, multiplier: f64) -> Self {
        self.depth_multiplier = multiplier;
        self
    }

    /// Sets the fallback slippage tolerance.
    #[must_use]
    pub fn with_default_slippage_pct(mut self, pct: Percent) -> Self {
        self.default_slippage_pct = pct;
        self
    }

    /// Checks every parameter against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.impact_coefficient.is_finite() && self.impact_coefficient >= 0.0) {
            return Err(EngineError::InvalidConfiguration(
                "impact_coefficient must be finite and non-negative".to_string(),
            ));
        }
        if !(self.depth_multiplier.is_finite() && self.depth_multiplier > 0.0) {
            return Err(EngineError::InvalidConfiguration(
                "depth_multiplier must be finite and positive".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.default_slippage_pct) {
            return Err(EngineError::InvalidConfiguration(
                "default_slippage_pct must be in [0, 100]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for the depth aggregator.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DepthConfig {
    /// Number of levels per side kept by [`crate::depth::DepthAggregator::build_limited`].
    ///
    /// Must be at least 1.
    pub max_levels: usize,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self { max_levels: 20 }
    }
}

impl DepthConfig {
    /// Creates a depth configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `max_levels` is zero.
    pub fn new(max_levels: usize) -> EngineResult<Self> {
        let config = Self { max_levels };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `max_levels` is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_levels == 0 {
            return Err(EngineError::InvalidConfiguration(
                "max_levels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Range editor settings.
    pub range: RangeConfig,
    /// Quote engine settings.
    pub quote: QuoteConfig,
    /// Depth aggregator settings.
    pub depth: DepthConfig,
}

impl EngineConfig {
    /// Creates a configuration from its three sections, validating each.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if any section is invalid.
    pub fn new(range: RangeConfig, quote: QuoteConfig, depth: DepthConfig) -> EngineResult<Self> {
        let config = Self {
            range,
            quote,
            depth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the range section.
    #[must_use]
    pub fn with_range(mut self, range: RangeConfig) -> Self {
        self.range = range;
        self
    }

    /// Replaces the quote section.
    #[must_use]
    pub fn with_quote(mut self, quote: QuoteConfig) -> Self {
        self.quote = quote;
        self
    }

    /// Replaces the depth section.
    #[must_use]
    pub fn with_depth(mut self, depth: DepthConfig) -> Self {
        self.depth = depth;
        self
    }

    /// Validates all three sections.
    ///
    /// # Errors
    ///
    /// Returns the first `EngineError::InvalidConfiguration` found.
    pub fn validate(&self) -> EngineResult<()> {
        self.range.validate()?;
        self.quote.validate()?;
        self.depth.validate()
    }
}
