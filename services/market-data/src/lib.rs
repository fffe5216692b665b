//! Market Data Service
//!
//! Deterministic mock market engine for the learning dashboard. Produces:
//! - Reproducible pseudo-random price walks per asset and timeframe
//! - Per-asset snapshots (price, percent change, market cap, sparkline)
//! - Aggregate market metrics (dominance, volume, volatility)
//! - Strategy-ordered, text-filtered snapshot responses
//!
//! Every query is a pure function of configuration and parameters; the
//! async service only adds a simulated network delay.
//!
//! # Architecture
//!
//! ```text
//!  (timeframe, strategy, query)
//!        │
//!   ┌────▼─────┐
//!   │  rng     │  ← mulberry32, seed + timeframe offset
//!   └────┬─────┘
//!   ┌────▼─────┐
//!   │ series   │  ← bounded multiplicative walk
//!   └────┬─────┘
//!   ┌────▼─────┐
//!   │ snapshot │  ← price / change / cap per asset
//!   └────┬─────┘
//!   ┌────▼─────┐
//!   │  query   │  ← order by strategy, filter by text
//!   └────┬─────┘
//!   ┌────▼─────┐
//!   │ metrics  │  ← dominance, volume, volatility
//!   └──────────┘
//! ```

pub mod config;
pub mod fingerprint;
pub mod format;
pub mod metrics;
pub mod query;
pub mod rng;
pub mod series;
pub mod service;
pub mod snapshot;

pub use config::MarketConfig;
pub use query::{market_snapshot, MarketQuery};
pub use service::MarketDataService;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
