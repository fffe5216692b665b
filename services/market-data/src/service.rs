//! Async entry point for the presentation layer
//!
//! Each call waits out the configured latency and then runs the pure query.
//! Calls share nothing mutable, so any number may be in flight at once;
//! callers that only want the newest result pair each call with a
//! `types::request::RequestTracker` ticket.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use types::errors::ConfigError;
use types::ids::RequestId;
use types::market::MarketSnapshot;

use crate::config::MarketConfig;
use crate::query::{market_snapshot, MarketQuery};

/// Market data service over a validated, read-only configuration.
#[derive(Debug, Clone)]
pub struct MarketDataService {
    config: Arc<MarketConfig>,
}

impl MarketDataService {
    /// Validate `config` and build the service.
    pub fn new(config: MarketConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "Rejected market data configuration");
            return Err(err);
        }

        info!(
            assets = config.assets.len(),
            latency_ms = config.latency.as_millis() as u64,
            "MarketDataService initialized"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Service over the reference configuration.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(MarketConfig::default())
    }

    /// Reference configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(MarketConfig::from_env())
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Resolve a snapshot after the simulated network delay.
    pub async fn get_market_snapshot(&self, query: MarketQuery) -> MarketSnapshot {
        let request_id = RequestId::new();
        debug!(
            %request_id,
            timeframe = %query.timeframe,
            strategy = %query.strategy,
            query = %query.query,
            "Market snapshot requested"
        );

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let started = Instant::now();
        let snapshot = self.snapshot_now(&query);
        info!(
            %request_id,
            timeframe = %query.timeframe,
            assets = snapshot.assets.len(),
            build_us = started.elapsed().as_micros() as u64,
            "Market snapshot resolved"
        );
        snapshot
    }

    /// Run the query immediately, without simulated delay.
    pub fn snapshot_now(&self, query: &MarketQuery) -> MarketSnapshot {
        market_snapshot(&self.config, query)
    }
}
