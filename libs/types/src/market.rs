//! Aggregate market view returned by the snapshot query

use crate::asset::AssetSnapshot;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a set of asset snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetrics {
    /// BTC percent change, 0 when BTC is absent
    pub btc_change: f64,
    /// ETH percent change, 0 when ETH is absent
    pub eth_change: f64,
    /// BTC share of total market cap in percent
    pub dominance: f64,
    /// Estimated traded volume in USD
    pub volume: f64,
    /// Volatility index in percent
    pub volatility: f64,
}

/// Response of the market snapshot query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub metrics: MarketMetrics,
    pub assets: Vec<AssetSnapshot>,
}

impl MarketSnapshot {
    pub fn symbols(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.symbol.as_str()).collect()
    }
}
