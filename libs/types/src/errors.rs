//! Error types for the dashboard engine
//!
//! Queries themselves never fail; errors only surface at the edges, when
//! parsing user intent or when a service is built from bad configuration.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while parsing user-supplied selectors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Configuration rejected at service construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Duplicate asset symbol: {symbol}")]
    DuplicateSymbol { symbol: String },

    #[error("Asset {symbol} has non-positive {field}: {value}")]
    NonPositiveBaseline {
        symbol: String,
        field: &'static str,
        value: f64,
    },

    #[error("Timeframe {timeframe} has zero series points")]
    EmptySeries { timeframe: String },

    #[error("Timeframe {timeframe} has negative volatility: {volatility}")]
    NegativeVolatility { timeframe: String, volatility: f64 },

    #[error("Effective volatility {volatility} for timeframe {timeframe} must stay below 1")]
    VolatilityTooHigh { timeframe: String, volatility: f64 },

    #[error("Duplicate resource id: {id}")]
    DuplicateResource { id: String },

    #[error("Resource {id} rating out of range: {rating}")]
    RatingOutOfRange { id: String, rating: f64 },

    #[error("Resource {id} progress out of range: {progress}")]
    ProgressOutOfRange { id: String, progress: u8 },
}
