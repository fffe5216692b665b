//! Async entry point for the resources view

use std::sync::Arc;

use tracing::{debug, info, warn};
use types::errors::ConfigError;
use types::ids::RequestId;
use types::resource::{FilterOptions, Resource};
use types::strategy::Strategy;

use crate::catalog::resources_for;
use crate::config::ContentConfig;
use crate::facets::filter_options;

/// Content service over a validated, read-only catalog.
#[derive(Debug, Clone)]
pub struct ContentService {
    config: Arc<ContentConfig>,
}

impl ContentService {
    /// Validate `config` and build the service.
    pub fn new(config: ContentConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "Rejected content configuration");
            return Err(err);
        }

        info!(
            resources = config.catalog.len(),
            latency_ms = config.latency.as_millis() as u64,
            "ContentService initialized"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Service over the reference catalog.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(ContentConfig::default())
    }

    /// Reference configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ContentConfig::from_env())
    }

    pub fn catalog(&self) -> &[Resource] {
        &self.config.catalog
    }

    /// Catalog entries for `strategy`, after the simulated network delay.
    pub async fn get_educational_resources(&self, strategy: Strategy) -> Vec<Resource> {
        let request_id = RequestId::new();
        debug!(%request_id, %strategy, "Educational resources requested");

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let resources = resources_for(&self.config.catalog, strategy);
        info!(
            %request_id,
            %strategy,
            count = resources.len(),
            "Educational resources resolved"
        );
        resources
    }

    /// Facets over any resource set.
    pub fn get_filter_options(&self, resources: &[Resource]) -> FilterOptions {
        filter_options(resources)
    }
}
