//! Common types and error definitions for the engine.
//!
//! This module contains:
//! - Error types using `thiserror`
//! - The validated [`primitives::PricePoint`] price type
//! - Book side and numeric aliases shared by every module

/// Error types for the engine.
pub mod error;

/// Validated prices, sides and numeric aliases.
pub mod primitives;
