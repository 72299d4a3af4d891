//! Market-data collaborator boundary.
//!
//! This module provides:
//! - The [`MarketDataProvider`] trait callers implement over a chain or exchange feed
//! - The [`MarketSnapshot`] value handed to the engine each refresh tick
//! - A deterministic [`SyntheticMarketData`] provider for demos and tests

/// Provider trait and snapshot type.
pub mod provider;

/// Deterministic synthetic provider.
pub mod synthetic;

pub use provider::{MarketDataProvider, MarketSnapshot};
pub use synthetic::{SyntheticConfig, SyntheticMarketData};
