//! Market snapshot query
//!
//! Synthesis, strategy ordering, free-text filtering and aggregation, in that
//! order. Metrics are computed over the filtered set, so a narrow query
//! changes dominance and volume as well as the asset list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use types::asset::AssetSnapshot;
use types::errors::EngineError;
use types::market::MarketSnapshot;
use types::strategy::Strategy;
use types::timeframe::Timeframe;

use crate::config::MarketConfig;
use crate::metrics;
use crate::snapshot;

/// Parameters of one snapshot request.
///
/// Missing fields default to 24h, long and an empty query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketQuery {
    pub timeframe: Timeframe,
    pub strategy: Strategy,
    /// Free-text symbol/name filter; blank means no filter.
    pub query: String,
}

impl MarketQuery {
    pub fn new(timeframe: Timeframe, strategy: Strategy, query: impl Into<String>) -> Self {
        Self {
            timeframe,
            strategy,
            query: query.into(),
        }
    }

    /// Build a query from raw request parameters.
    ///
    /// The timeframe label never fails to parse; an unknown strategy does.
    pub fn from_params(timeframe: &str, strategy: &str, query: &str) -> Result<Self, EngineError> {
        Ok(Self::new(Timeframe::parse(timeframe), strategy.parse()?, query))
    }
}

/// Run the full query against `config`.
pub fn market_snapshot(config: &MarketConfig, query: &MarketQuery) -> MarketSnapshot {
    let mut assets = snapshot::build_all(config, query.timeframe);
    order_assets(&mut assets, query.strategy);
    let assets = filter_assets(assets, &query.query);
    let metrics = metrics::aggregate(query.timeframe, &assets);

    MarketSnapshot { metrics, assets }
}

/// Stable sort: `Long` by descending market cap, `Short` by descending
/// absolute percent change. Exact ties keep their declaration order.
pub fn order_assets(assets: &mut [AssetSnapshot], strategy: Strategy) {
    match strategy {
        Strategy::Long => assets.sort_by(|a, b| descending(a.market_cap, b.market_cap)),
        Strategy::Short => assets.sort_by(|a, b| descending(a.change_pct.abs(), b.change_pct.abs())),
    }
}

/// Keep assets whose symbol or name contains `query`
/// (trimmed, case-insensitive). A blank query keeps everything.
pub fn filter_assets(assets: Vec<AssetSnapshot>, query: &str) -> Vec<AssetSnapshot> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return assets;
    }

    assets
        .into_iter()
        .filter(|a| {
            a.symbol.as_str().to_lowercase().contains(&needle)
                || a.name.to_lowercase().contains(&needle)
        })
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
