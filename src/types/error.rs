//! Error types for the engine.

use thiserror::Error;

/// Errors raised when constructing engine values from caller input.
///
/// Most engine operations recover from bad input locally (clamping, or
/// returning the last valid value), so these surface mainly from
/// constructors and from the `try_*` variants of the quote engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Price was zero, negative, NaN or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// Swap amount was negative, NaN or infinite.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// A range was requested whose lower bound is not strictly below the upper bound.
    #[error("degenerate range: lower {lower} must be below upper {upper}")]
    DegenerateRange {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// A configuration parameter is out of its allowed domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The market-data collaborator could not produce a snapshot.
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::InvalidPrice(-1.0).to_string(),
            "invalid price: -1"
        );
        assert_eq!(
            EngineError::InvalidAmount(f64::NAN).to_string(),
            "invalid amount: NaN"
        );
        let err = EngineError::DegenerateRange {
            lower: 10.0,
            upper: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate range: lower 10 must be below upper 5"
        );
    }

    #[test]
    fn test_configuration_error_message() {
        let err = EngineError::InvalidConfiguration("axis_margin must be in [0, 1)".to_string());
        assert!(err.to_string().contains("axis_margin"));
    }
}
