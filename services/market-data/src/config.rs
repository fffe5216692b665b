//! Engine configuration
//!
//! The default configuration is the reference dataset: six large-cap assets
//! and three timeframe profiles. A service validates its configuration once
//! at construction and shares it read-only afterwards.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::warn;
use types::asset::AssetBaseline;
use types::errors::ConfigError;
use types::timeframe::{Timeframe, TimeframeProfile};

/// Environment variable overriding the simulated latency.
pub const LATENCY_ENV: &str = "MARKET_DATA_LATENCY_MS";

/// Simulated network delay of the reference service.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(200);

/// Per-asset volatility increment used to decorrelate the walks.
pub const DEFAULT_ASSET_VOLATILITY_STEP: f64 = 0.002;

/// Random-walk profiles for the known timeframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeframeProfiles {
    pub h24: TimeframeProfile,
    pub d7: TimeframeProfile,
    pub d30: TimeframeProfile,
}

impl TimeframeProfiles {
    /// Profile for `timeframe`; unrecognized timeframes use the 24h profile.
    pub fn get(&self, timeframe: Timeframe) -> TimeframeProfile {
        match timeframe {
            Timeframe::H24 | Timeframe::Unrecognized => self.h24,
            Timeframe::D7 => self.d7,
            Timeframe::D30 => self.d30,
        }
    }
}

impl Default for TimeframeProfiles {
    fn default() -> Self {
        Self {
            h24: TimeframeProfile { volatility: 0.02, points: 30 },
            d7: TimeframeProfile { volatility: 0.045, points: 30 },
            d30: TimeframeProfile { volatility: 0.08, points: 30 },
        }
    }
}

/// Reference asset baselines.
pub fn reference_assets() -> Vec<AssetBaseline> {
    vec![
        AssetBaseline::new("BTC", "Bitcoin", 68_000.0, 1.35e12, 101),
        AssetBaseline::new("ETH", "Ethereum", 3_500.0, 4.2e11, 102),
        AssetBaseline::new("BNB", "BNB", 580.0, 9.0e10, 103),
        AssetBaseline::new("XRP", "XRP", 0.62, 3.4e10, 104),
        AssetBaseline::new("ADA", "Cardano", 0.45, 1.6e10, 105),
        AssetBaseline::new("SOL", "Solana", 155.0, 7.0e10, 106),
    ]
}

/// Configuration for the market data engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Assets in declaration order; the index drives the volatility step.
    pub assets: Vec<AssetBaseline>,
    pub profiles: TimeframeProfiles,
    /// Added per asset index to the timeframe volatility.
    pub asset_volatility_step: f64,
    /// Delay before an async query resolves.
    pub latency: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            assets: reference_assets(),
            profiles: TimeframeProfiles::default(),
            asset_volatility_step: DEFAULT_ASSET_VOLATILITY_STEP,
            latency: DEFAULT_LATENCY,
        }
    }
}

impl MarketConfig {
    /// Reference configuration with the latency taken from
    /// `MARKET_DATA_LATENCY_MS` when set.
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

    /// Volatility actually used for the asset at `index`.
    pub fn asset_volatility(&self, timeframe: Timeframe, index: usize) -> f64 {
        self.profiles.get(timeframe).volatility + index as f64 * self.asset_volatility_step
    }

    /// Check the invariants the engine relies on.
    ///
    /// Effective volatility must stay below 1 for every asset and timeframe,
    /// otherwise a shock could drive a series to zero or below.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for asset in &self.assets {
            if !seen.insert(asset.symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: asset.symbol.to_string(),
                });
            }
            for (field, value) in [("base price", asset.base_price), ("base cap", asset.base_cap)] {
                if !(value > 0.0 && value.is_finite()) {
                    return Err(ConfigError::NonPositiveBaseline {
                        symbol: asset.symbol.to_string(),
                        field,
                        value,
                    });
                }
            }
        }

        for &timeframe in Timeframe::all() {
            let profile = self.profiles.get(timeframe);
            if profile.points == 0 {
                return Err(ConfigError::EmptySeries {
                    timeframe: timeframe.to_string(),
                });
            }
            if profile.volatility < 0.0 || self.asset_volatility_step < 0.0 {
                return Err(ConfigError::NegativeVolatility {
                    timeframe: timeframe.to_string(),
                    volatility: profile.volatility.min(self.asset_volatility_step),
                });
            }
            let last_index = self.assets.len().saturating_sub(1);
            let peak = self.asset_volatility(timeframe, last_index);
            if peak >= 1.0 || peak.is_nan() {
                return Err(ConfigError::VolatilityTooHigh {
                    timeframe: timeframe.to_string(),
                    volatility: peak,
                });
            }
        }

        Ok(())
    }
}
