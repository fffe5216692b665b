//! Asset snapshot builder
//!
//! Projects a synthesized walk onto an asset's baseline: the walk's overall
//! ratio scales the base price, and market cap moves proportionally with
//! price.

use types::asset::{AssetBaseline, AssetSnapshot, PriceSeries};
use types::timeframe::Timeframe;

use crate::config::MarketConfig;
use crate::series;

/// Derive the snapshot for `baseline` from its series.
///
/// Precondition: the first point of `series` is non-zero, which the
/// synthesizer guarantees for any validated configuration.
pub fn build_asset_snapshot(baseline: &AssetBaseline, series: PriceSeries) -> AssetSnapshot {
    let ratio = series.change_ratio();
    let price = baseline.base_price * ratio;
    let market_cap = baseline.base_cap * (price / baseline.base_price);

    AssetSnapshot {
        symbol: baseline.symbol.clone(),
        name: baseline.name.clone(),
        price,
        change_pct: series.change_pct(),
        market_cap,
        sparkline: series,
    }
}

/// Synthesize and snapshot every configured asset for `timeframe`,
/// in declaration order.
pub fn build_all(config: &MarketConfig, timeframe: Timeframe) -> Vec<AssetSnapshot> {
    let points = config.profiles.get(timeframe).points;

    config
        .assets
        .iter()
        .enumerate()
        .map(|(idx, baseline)| {
            let seed = baseline.seed.wrapping_add(timeframe.seed_offset());
            let volatility = config.asset_volatility(timeframe, idx);
            let series = series::synthesize(seed, points, volatility);
            build_asset_snapshot(baseline, series)
        })
        .collect()
}
