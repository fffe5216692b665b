//! Content service configuration

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::warn;
use types::errors::ConfigError;
use types::resource::Resource;

use crate::catalog::reference_catalog;

/// Environment variable overriding the simulated latency.
pub const LATENCY_ENV: &str = "CONTENT_LATENCY_MS";

/// Simulated network delay of the reference service.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Configuration for the content service.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    /// Catalog in declaration order.
    pub catalog: Vec<Resource>,
    /// Delay before an async query resolves.
    pub latency: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            catalog: reference_catalog(),
            latency: DEFAULT_LATENCY,
        }
    }
}

impl ContentConfig {
    /// Reference configuration with the latency taken from
    /// `CONTENT_LATENCY_MS` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(LATENCY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.latency = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "Ignoring unparsable {}", LATENCY_ENV),
            }
        }
        config
    }

    /// Configuration with no simulated delay.
    pub fn without_latency(mut self) -> Self {
        self.latency = Duration::ZERO;
        self
    }

    /// Reject duplicate ids and out-of-range ratings or progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for resource in &self.catalog {
            let id = resource.id.as_str();
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateResource { id: id.to_string() });
            }
            if !(0.0..=5.0).contains(&resource.rating) {
                return Err(ConfigError::RatingOutOfRange {
                    id: id.to_string(),
                    rating: resource.rating,
                });
            }
            if resource.progress > 100 {
                return Err(ConfigError::ProgressOutOfRange {
                    id: id.to_string(),
                    progress: resource.progress,
                });
            }
        }
        Ok(())
    }
}
