//! Market metrics aggregator
//!
//! Reduces a set of asset snapshots to headline figures. Degenerate input is
//! absorbed by substitution rather than reported: an empty set or a zero
//! total cap divides by 1, and a missing BTC or ETH reads as no change.
//!
//! The volatility index is a fixed per-timeframe figure, not a dispersion
//! measure over the series.

use types::asset::AssetSnapshot;
use types::market::MarketMetrics;
use types::timeframe::Timeframe;

/// Volatility index reported for timeframes outside the known set.
pub const DEFAULT_VOLATILITY_INDEX: f64 = 5.0;

/// Share of total market cap reported as traded volume.
pub fn volume_fraction(timeframe: Timeframe) -> f64 {
    match timeframe {
        Timeframe::H24 | Timeframe::Unrecognized => 0.055,
        Timeframe::D7 => 0.04,
        Timeframe::D30 => 0.028,
    }
}

/// Headline volatility index in percent.
pub fn volatility_index(timeframe: Timeframe) -> f64 {
    match timeframe {
        Timeframe::H24 => 3.1,
        Timeframe::D7 => 6.9,
        Timeframe::D30 => 14.2,
        Timeframe::Unrecognized => DEFAULT_VOLATILITY_INDEX,
    }
}

/// Aggregate `assets` for `timeframe`.
pub fn aggregate(timeframe: Timeframe, assets: &[AssetSnapshot]) -> MarketMetrics {
    let summed: f64 = assets.iter().map(|a| a.market_cap).sum();
    let total_cap = if summed == 0.0 { 1.0 } else { summed };

    let btc = find(assets, "BTC");
    let eth = find(assets, "ETH");

    MarketMetrics {
        btc_change: btc.map_or(0.0, |a| a.change_pct),
        eth_change: eth.map_or(0.0, |a| a.change_pct),
        dominance: btc.map_or(0.0, |a| a.market_cap / total_cap * 100.0),
        volume: summed * volume_fraction(timeframe),
        volatility: volatility_index(timeframe),
    }
}

fn find<'a>(assets: &'a [AssetSnapshot], symbol: &str) -> Option<&'a AssetSnapshot> {
    assets.iter().find(|a| a.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::asset::PriceSeries;
    use types::ids::Symbol;

    fn asset(symbol: &str, change_pct: f64, market_cap: f64) -> AssetSnapshot {
        AssetSnapshot {
            symbol: Symbol::new(symbol),
            name: symbol.to_string(),
            price: 1.0,
            change_pct,
            market_cap,
            sparkline: PriceSeries::default(),
        }
    }

    #[test]
    fn test_empty_set_yields_zeros() {
        for &tf in Timeframe::all() {
            let metrics = aggregate(tf, &[]);
            assert_eq!(metrics.btc_change, 0.0);
            assert_eq!(metrics.eth_change, 0.0);
            assert_eq!(metrics.dominance, 0.0);
            assert_eq!(metrics.volume, 0.0);
            assert_eq!(metrics.volatility, volatility_index(tf));
        }
    }

    #[test]
    fn test_dominance_and_volume() {
        let assets = vec![asset("BTC", 2.0, 600.0), asset("ETH", -1.0, 300.0), asset("SOL", 5.0, 100.0)];
        let metrics = aggregate(Timeframe::D7, &assets);

        assert_eq!(metrics.btc_change, 2.0);
        assert_eq!(metrics.eth_change, -1.0);
        assert!((metrics.dominance - 60.0).abs() < 1e-12);
        assert!((metrics.volume - 40.0).abs() < 1e-12);
        assert_eq!(metrics.volatility, 6.9);
    }

    #[test]
    fn test_missing_btc_and_eth() {
        let metrics = aggregate(Timeframe::H24, &[asset("SOL", 7.0, 100.0)]);
        assert_eq!(metrics.btc_change, 0.0);
        assert_eq!(metrics.eth_change, 0.0);
        assert_eq!(metrics.dominance, 0.0);
        assert!((metrics.volume - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_cap_does_not_divide_by_zero() {
        let metrics = aggregate(Timeframe::D30, &[asset("BTC", 1.0, 0.0)]);
        assert_eq!(metrics.dominance, 0.0);
        assert!(metrics.dominance.is_finite());
    }

    #[test]
    fn test_unrecognized_timeframe_defaults() {
        let metrics = aggregate(Timeframe::Unrecognized, &[asset("BTC", 1.0, 1000.0)]);
        assert_eq!(metrics.volatility, DEFAULT_VOLATILITY_INDEX);
        assert!((metrics.volume - 55.0).abs() < 1e-9);
        assert_eq!(metrics.dominance, 100.0);
    }
}
