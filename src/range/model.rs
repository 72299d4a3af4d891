//! Editable liquidity price range.
//!
//! A [`PriceRange`] is the `[lower, upper]` selection of a concentrated
//! liquidity position. The caller owns the value; [`RangeModel`] takes the
//! previous range plus a proposed bound and returns the next range. Proposals
//! that would cross the opposite bound, or that are not valid prices, are
//! dropped and the previous range comes back unchanged.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::RangeConfig;
use crate::range::axis::AxisWindow;
use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::{Percent, PricePoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price interval with `lower < upper` held at all times.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::range::model::PriceRange;
/// use amm_engine_rs::types::primitives::PricePoint;
///
/// let current = PricePoint::new(2450.0).unwrap();
/// let range = PriceRange::around(current, 10.0).unwrap();
/// assert!((range.lower().value() - 2205.0).abs() < 1e-9);
/// assert!((range.upper().value() - 2695.0).abs() < 1e-9);
/// assert!(range.contains(current));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPriceRange"))]
pub struct PriceRange {
    lower: PricePoint,
    upper: PricePoint,
}

/// Unchecked wire form of [`PriceRange`]; converted through [`PriceRange::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPriceRange {
    lower: PricePoint,
    upper: PricePoint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPriceRange> for PriceRange {
    type Error = EngineError;

    fn try_from(raw: RawPriceRange) -> EngineResult<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl PriceRange {
    /// Creates a range from two prices.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DegenerateRange` if `lower >= upper`.
    pub fn new(lower: PricePoint, upper: PricePoint) -> EngineResult<Self> {
        if lower.value() < upper.value() {
            Ok(Self { lower, upper })
        } else {
            Err(EngineError::DegenerateRange {
                lower: lower.value(),
                upper: upper.value(),
            })
        }
    }

    /// Creates a range from raw values.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` for an invalid bound and
    /// `EngineError::DegenerateRange` if `lower >= upper`.
    pub fn from_values(lower: f64, upper: f64) -> EngineResult<Self> {
        Self::new(PricePoint::new(lower)?, PricePoint::new(upper)?)
    }

    /// Seeds a range at `current ± width_pct` percent.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` unless `width_pct` is in `(0, 100)`.
    pub fn around(current: PricePoint, width_pct: Percent) -> EngineResult<Self> {
        if !(width_pct > 0.0 && width_pct < 100.0) {
            return Err(EngineError::InvalidConfiguration(
                "range width must be in (0, 100) percent".to_string(),
            ));
        }
        let lower = current.scaled(1.0 - width_pct / 100.0)?;
        let upper = current.scaled(1.0 + width_pct / 100.0)?;
        Self::new(lower, upper)
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> PricePoint {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> PricePoint {
        self.upper
    }

    /// Arithmetic midpoint of the bounds.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lower.value() + self.upper.value()) / 2.0
    }

    /// Width of the range as a percentage of its midpoint.
    #[must_use]
    pub fn width_pct(&self) -> Percent {
        (self.upper.value() - self.lower.value()) / self.midpoint() * 100.0
    }

    /// Returns true if `price` lies within the bounds (edges included).
    #[must_use]
    pub fn contains(&self, price: PricePoint) -> bool {
        price >= self.lower && price <= self.upper
    }
}

/// Direction of a step-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepDirection {
    /// Increase the bound.
    Up,
    /// Decrease the bound.
    Down,
}

/// Applies drag and step updates to a [`PriceRange`].
///
/// Holds only configuration; every call takes the previous range and returns
/// the next one.
#[derive(Debug, Clone, Default)]
pub struct RangeModel {
    config: RangeConfig,
}

impl RangeModel {
    /// Creates a range model with validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `config` is invalid.
    pub fn new(config: RangeConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Seeds a range around `current` using the configured default width.
    ///
    /// # Errors
    ///
    /// Returns an error only if the seeded bounds are not representable prices.
    pub fn seed_range(&self, current: PricePoint) -> EngineResult<PriceRange> {
        PriceRange::around(current, self.config.default_width_pct)
    }

    /// Computes the visible axis window for `samples` and `range` with the configured margin.
    #[must_use]
    pub fn compute_axis_window(&self, samples: &[f64], range: &PriceRange) -> AxisWindow {
        AxisWindow::covering(samples, range, self.config.axis_margin)
    }

    /// Proposes a new lower bound.
    ///
    /// The proposal is accepted only if it is a valid price below
    /// `upper * (1 - bound_gap)`. An accepted value is clamped into `window`.
    /// Anything else returns `range` unchanged.
    #[must_use]
    pub fn update_lower_bound(
        &self,
        proposed: f64,
        range: &PriceRange,
        window: &AxisWindow,
    ) -> PriceRange {
        let Ok(proposed) = PricePoint::new(proposed) else {
            debug!(proposed, "lower bound update rejected: invalid price");
            return *range;
        };

        let ceiling = range.upper.value() * (1.0 - self.config.bound_gap);
        if proposed.value() >= ceiling {
            debug!(
                proposed = proposed.value(),
                ceiling, "lower bound update rejected: too close to upper bound"
            );
            return *range;
        }

        match PriceRange::new(window.clamp(proposed), range.upper) {
            Ok(next) => next,
            Err(err) => {
                debug!(%err, "lower bound update rejected after clamping");
                *range
            }
        }
    }

    /// Proposes a new upper bound.
    ///
    /// The proposal is accepted only if it is a valid price above
    /// `lower * (1 + bound_gap)`. An accepted value is clamped into `window`.
    /// Anything else returns `range` unchanged.
    #[must_use]
    pub fn update_upper_bound(
        &self,
        proposed: f64,
        range: &PriceRange,
        window: &AxisWindow,
    ) -> PriceRange {
        let Ok(proposed) = PricePoint::new(proposed) else {
            debug!(proposed, "upper bound update rejected: invalid price");
            return *range;
        };

        let floor = range.lower.value() * (1.0 + self.config.bound_gap);
        if proposed.value() <= floor {
            debug!(
                proposed = proposed.value(),
                floor, "upper bound update rejected: too close to lower bound"
            );
            return *range;
        }

        match PriceRange::new(range.lower, window.clamp(proposed)) {
            Ok(next) => next,
            Err(err) => {
                debug!(%err, "upper bound update rejected after clamping");
                *range
            }
        }
    }

    /// Moves the lower bound one step in `direction`.
    #[must_use]
    pub fn step_lower_bound(
        &self,
        range: &PriceRange,
        direction: StepDirection,
        window: &AxisWindow,
    ) -> PriceRange {
        let proposed = range.lower.value() * self.step_factor(direction);
        self.update_lower_bound(proposed, range, window)
    }

    /// Moves the upper bound one step in `direction`.
    #[must_use]
    pub fn step_upper_bound(
        &self,
        range: &PriceRange,
        direction: StepDirection,
        window: &AxisWindow,
    ) -> PriceRange {
        let proposed = range.upper.value() * self.step_factor(direction);
        self.update_upper_bound(proposed, range, window)
    }

    fn step_factor(&self, direction: StepDirection) -> f64 {
        match direction {
            StepDirection::Up => 1.0 + self.config.step_pct / 100.0,
            StepDirection::Down => 1.0 - self.config.step_pct / 100.0,
        }
    }
}

/// Proposes a new lower bound using the default configuration.
///
/// See [`RangeModel::update_lower_bound`].
#[must_use]
pub fn update_lower_bound(proposed: f64, range: &PriceRange, window: &AxisWindow) -> PriceRange {
    RangeModel::default().update_lower_bound(proposed, range, window)
}

/// Proposes a new upper bound using the default configuration.
///
/// See [`RangeModel::update_upper_bound`].
#[must_use]
pub fn update_upper_bound(proposed: f64, range: &PriceRange, window: &AxisWindow) -> PriceRange {
    RangeModel::default().update_upper_bound(proposed, range, window)
}

/// Signed distance of `bound` from `current`, in percent.
#[must_use]
pub fn percent_change(bound: PricePoint, current: PricePoint) -> Percent {
    (bound.value() - current.value()) / current.value() * 100.0
}

/// Distance of `bound` from `current` in percent, rounded half away from zero
/// to two decimals.
///
/// Returns `None` only when the ratio is beyond `Decimal`'s range.
#[must_use]
pub fn percent_from_current_decimal(bound: PricePoint, current: PricePoint) -> Option<Decimal> {
    Decimal::from_f64(percent_change(bound, current))
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats the distance of `bound` from `current` as a signed percentage.
///
/// Non-negative values carry an explicit `+`. Values are rounded half away
/// from zero to two decimals, so a tiny negative distance reads `+0.00%`.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::range::model::percent_from_current;
/// use amm_engine_rs::types::primitives::PricePoint;
///
/// let current = PricePoint::new(2450.0).unwrap();
/// let upper = PricePoint::new(2695.0).unwrap();
/// let lower = PricePoint::new(2205.0).unwrap();
/// assert_eq!(percent_from_current(upper, current), "+10.00%");
/// assert_eq!(percent_from_current(lower, current), "-10.00%");
/// ```
#[must_use]
pub fn percent_from_current(bound: PricePoint, current: PricePoint) -> String {
    match percent_from_current_decimal(bound, current) {
        Some(rounded) => {
            let sign = if rounded < Decimal::ZERO { "-" } else { "+" };
            format!("{sign}{:.2}%", rounded.abs())
        }
        None => format!("{:+.2}%", percent_change(bound, current)),
    }
}
