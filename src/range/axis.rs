//! Price to chart-axis coordinate mapping.
//!
//! The axis is a normalized vertical coordinate in `[0, 100]` where `0` is the
//! top of the chart (highest visible price) and `100` the bottom (lowest
//! visible price):
//!
//! ```text
//! coordinate = (axis_max - price) / (axis_max - axis_min) * 100
//! price      = axis_max - coordinate / 100 * (axis_max - axis_min)
//! ```
//!
//! Prices outside the window clamp to the nearest edge instead of failing;
//! while a bound is dragged past the chart edge this is the expected state.

use crate::range::model::PriceRange;
use crate::types::error::{EngineError, EngineResult};
use crate::types::primitives::PricePoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest axis coordinate (top edge of the chart).
pub const AXIS_TOP: f64 = 0.0;

/// Highest axis coordinate (bottom edge of the chart).
pub const AXIS_BOTTOM: f64 = 100.0;

/// Headroom applied by [`compute_axis_window`], as a ratio of the extreme prices.
pub const DEFAULT_AXIS_MARGIN: f64 = 0.02;

/// Visible price window of a chart axis.
///
/// Always satisfies `min < max`, so the mapping never divides by zero.
///
/// # Example
///
/// ```rust
/// use amm_engine_rs::range::axis::AxisWindow;
///
/// let window = AxisWindow::from_values(90.0, 110.0).unwrap();
/// assert_eq!(window.price_to_axis(110.0), 0.0);
/// assert_eq!(window.price_to_axis(100.0), 50.0);
/// assert_eq!(window.axis_to_price(100.0).value(), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAxisWindow"))]
pub struct AxisWindow {
    min: PricePoint,
    max: PricePoint,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawAxisWindow {
    min: PricePoint,
    max: PricePoint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAxisWindow> for AxisWindow {
    type Error = EngineError;

    fn try_from(raw: RawAxisWindow) -> EngineResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl AxisWindow {
    /// Creates a window from two validated prices.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DegenerateRange` if `min >= max`.
    pub fn new(min: PricePoint, max: PricePoint) -> EngineResult<Self> {
        if min.value() < max.value() {
            Ok(Self { min, max })
        } else {
            Err(EngineError::DegenerateRange {
                lower: min.value(),
                upper: max.value(),
            })
        }
    }

    /// Creates a window from raw values.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrice` for a non-positive or non-finite
    /// edge and `EngineError::DegenerateRange` if `min >= max`.
    pub fn from_values(min: f64, max: f64) -> EngineResult<Self> {
        Self::new(PricePoint::new(min)?, PricePoint::new(max)?)
    }

    /// Computes the window covering `samples` and `range` with `margin` headroom.
    ///
    /// Invalid samples (non-positive or non-finite) are ignored; the range
    /// bounds are always included so the current selection stays visible.
    /// A margin outside `[0, 1)` is treated as zero.
    #[must_use]
    pub fn covering(samples: &[f64], range: &PriceRange, margin: f64) -> Self {
        let margin = if (0.0..1.0).contains(&margin) {
            margin
        } else {
            0.0
        };

        let (lowest, highest) = samples
            .iter()
            .copied()
            .filter(|p| PricePoint::is_valid(*p))
            .fold(
                (range.lower().value(), range.upper().value()),
                |(lo, hi), p| (lo.min(p), hi.max(p)),
            );

        // Scaling can underflow or overflow at the extremes of f64; fall back
        // to the unscaled edge, which still brackets the range.
        let min = PricePoint::new(lowest * (1.0 - margin))
            .or_else(|_| PricePoint::new(lowest))
            .unwrap_or(range.lower());
        let max = PricePoint::new(highest * (1.0 + margin))
            .or_else(|_| PricePoint::new(highest))
            .unwrap_or(range.upper());

        Self { min, max }
    }

    /// Lowest visible price.
    #[must_use]
    pub fn min(&self) -> PricePoint {
        self.min
    }

    /// Highest visible price.
    #[must_use]
    pub fn max(&self) -> PricePoint {
        self.max
    }

    /// Width of the window in price units.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max.value() - self.min.value()
    }

    /// Returns true if `price` lies inside the window (edges included).
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min.value() && price <= self.max.value()
    }

    /// Clamps a price into the window.
    #[must_use]
    pub fn clamp(&self, price: PricePoint) -> PricePoint {
        price.max(self.min).min(self.max)
    }

    /// Maps a price to an axis coordinate in `[0, 100]`.
    ///
    /// Prices above the window map to `0`, below it to `100`. NaN is treated
    /// as below the window.
    #[must_use]
    pub fn price_to_axis(&self, price: f64) -> f64 {
        if price.is_nan() {
            return AXIS_BOTTOM;
        }
        let coordinate = (self.max.value() - price) / self.span() * 100.0;
        coordinate.clamp(AXIS_TOP, AXIS_BOTTOM)
    }

    /// Maps an axis coordinate back to a price inside the window.
    ///
    /// Coordinates outside `[0, 100]` clamp to the window edges; NaN maps to
    /// the bottom edge like in [`AxisWindow::price_to_axis`].
    #[must_use]
    pub fn axis_to_price(&self, coordinate: f64) -> PricePoint {
        let coordinate = if coordinate.is_nan() {
            AXIS_BOTTOM
        } else {
            coordinate.clamp(AXIS_TOP, AXIS_BOTTOM)
        };
        let price = self.max.value() - coordinate / 100.0 * self.span();
        let price = price.clamp(self.min.value(), self.max.value());
        PricePoint::new(price).unwrap_or(self.min)
    }
}

/// Maps `price` to a coordinate in `[0, 100]` within `window`.
#[must_use]
pub fn map_price_to_axis(price: f64, window: &AxisWindow) -> f64 {
    window.price_to_axis(price)
}

/// Maps an axis `coordinate` back to a price within `window`.
#[must_use]
pub fn map_axis_to_price(coordinate: f64, window: &AxisWindow) -> PricePoint {
    window.axis_to_price(coordinate)
}

/// Computes the visible window for `samples` and `range` with the default ±2% margin.
#[must_use]
pub fn compute_axis_window(samples: &[f64], range: &PriceRange) -> AxisWindow {
    AxisWindow::covering(samples, range, DEFAULT_AXIS_MARGIN)
}
