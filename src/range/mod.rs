//! Liquidity price range editing and chart axis mapping.
//!
//! This module provides:
//! - Price to `[0, 100]` axis coordinate conversion and its inverse
//! - Visible axis window computation with headroom
//! - A two-sided price range with drag and step-button updates that never cross
//!
//! # Key Formulas
//!
//! ```text
//! coordinate = (axis_max - price) / (axis_max - axis_min) * 100
//! axis_min   = min(samples ∪ {lower, upper}) * 0.98
//! axis_max   = max(samples ∪ {lower, upper}) * 1.02
//! ```
//!
//! A lower-bound proposal is accepted only when `proposed < upper * 0.99`, an
//! upper-bound proposal only when `proposed > lower * 1.01`.

/// Price and axis coordinate conversion.
pub mod axis;

/// Price range value and update rules.
pub mod model;

pub use axis::{AxisWindow, compute_axis_window, map_axis_to_price, map_price_to_axis};
pub use model::{
    PriceRange, RangeModel, StepDirection, percent_change, percent_from_current,
    percent_from_current_decimal, update_lower_bound, update_upper_bound,
};
