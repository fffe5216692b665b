//! Asset baselines, synthesized price series and per-asset snapshots

use crate::ids::Symbol;
use serde::{Deserialize, Serialize};

/// Static per-asset configuration.
///
/// Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBaseline {
    pub symbol: Symbol,
    pub name: String,
    /// Reference price in USD (> 0)
    pub base_price: f64,
    /// Reference market cap in USD (> 0)
    pub base_cap: f64,
    /// Generator seed before the timeframe offset is applied
    pub seed: u32,
}

impl AssetBaseline {
    pub fn new(symbol: &str, name: &str, base_price: f64, base_cap: f64, seed: u32) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            name: name.to_string(),
            base_price,
            base_cap,
            seed,
        }
    }
}

/// Ordered random-walk values, positive under any valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(points: Vec<f64>) -> Self {
        Self(points)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// `last / first`, or 1.0 for an empty series.
    ///
    /// Callers must not pass a series whose first point is zero; the
    /// synthesizer never produces one.
    pub fn change_ratio(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last / first,
            _ => 1.0,
        }
    }

    /// Percent change over the window, 0.0 for an empty series.
    pub fn change_pct(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (last - first) / first * 100.0,
            _ => 0.0,
        }
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(points: Vec<f64>) -> Self {
        Self(points)
    }
}

/// Derived view of one asset for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub symbol: Symbol,
    pub name: String,
    /// Current price in USD
    pub price: f64,
    /// Signed percent change over the series window
    pub change_pct: f64,
    /// Current market cap in USD
    pub market_cap: f64,
    /// Raw series, consumed by sparkline rendering
    pub sparkline: PriceSeries,
}
