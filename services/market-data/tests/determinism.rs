//! Determinism and invariant tests for the Market Data Service
//!
//! Validates that identical inputs reproduce identical outputs and that the
//! documented invariants hold for arbitrary seeds and inputs.
//!
//! Tests include:
//! - Dual build comparison via fingerprints
//! - Positivity of synthesized walks
//! - Dominance bounds
//! - Strategy ordering and filter idempotence
//! - Reference scenarios
//! - Last-request-wins at the caller boundary

use std::sync::Arc;

use market_data::fingerprint::fingerprint;
use market_data::metrics::{aggregate, volatility_index};
use market_data::query::{filter_assets, market_snapshot, MarketQuery};
use market_data::series::synthesize;
use market_data::{MarketConfig, MarketDataService};
use proptest::prelude::*;
use types::asset::{AssetSnapshot, PriceSeries};
use types::ids::Symbol;
use types::request::RequestTracker;
use types::strategy::Strategy;
use types::timeframe::Timeframe;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

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

fn all_queries() -> Vec<MarketQuery> {
    let mut queries = Vec::new();
    for &tf in Timeframe::all() {
        for strategy in [Strategy::Long, Strategy::Short] {
            queries.push(MarketQuery::new(tf, strategy, ""));
        }
    }
    queries
}

/// Test 1: Two independent configurations produce identical snapshots.
#[test]
fn test_repeated_builds_are_bit_identical() {
    for query in all_queries() {
        let a = market_snapshot(&MarketConfig::default(), &query);
        let b = market_snapshot(&MarketConfig::default(), &query);
        assert_eq!(fingerprint(&a), fingerprint(&b), "query {query:?}");
        assert_eq!(a, b);
    }
}

/// Test 2: Long ordering is non-increasing market cap.
#[test]
fn test_long_ordering_by_market_cap() {
    let config = MarketConfig::default();
    for &tf in Timeframe::all() {
        let snap = market_snapshot(&config, &MarketQuery::new(tf, Strategy::Long, ""));
        for pair in snap.assets.windows(2) {
            assert!(pair[0].market_cap >= pair[1].market_cap, "{tf}: {pair:?}");
        }
    }
}

/// Test 3: Short ordering is non-increasing absolute change.
#[test]
fn test_short_ordering_by_absolute_change() {
    let config = MarketConfig::default();
    for &tf in Timeframe::all() {
        let snap = market_snapshot(&config, &MarketQuery::new(tf, Strategy::Short, ""));
        for pair in snap.assets.windows(2) {
            assert!(pair[0].change_pct.abs() >= pair[1].change_pct.abs(), "{tf}: {pair:?}");
        }
    }
}

/// Scenario B: a symbol query isolates one asset.
#[test]
fn test_btc_query_returns_single_asset() {
    let snap = market_snapshot(
        &MarketConfig::default(),
        &MarketQuery::new(Timeframe::H24, Strategy::Long, "btc"),
    );
    assert_eq!(snap.assets.len(), 1);
    assert_eq!(snap.assets[0].symbol, "BTC");
}

/// Scenario C: aggregation over nothing substitutes zeros.
#[test]
fn test_empty_aggregation() {
    for tf in [Timeframe::H24, Timeframe::D7, Timeframe::D30, Timeframe::Unrecognized] {
        let metrics = aggregate(tf, &[]);
        assert_eq!(metrics.btc_change, 0.0);
        assert_eq!(metrics.eth_change, 0.0);
        assert_eq!(metrics.dominance, 0.0);
        assert_eq!(metrics.volume, 0.0);
        assert_eq!(metrics.volatility, volatility_index(tf));
    }
    assert_eq!(aggregate(Timeframe::Unrecognized, &[]).volatility, 5.0);
}

/// Every sparkline carries the profile's point count and stays positive.
#[test]
fn test_reference_series_shape() {
    let config = MarketConfig::default();
    for query in all_queries() {
        let snap = market_snapshot(&config, &query);
        for asset in &snap.assets {
            assert_eq!(asset.sparkline.len(), 30);
            assert!(asset.price > 0.0);
            assert!(asset.market_cap > 0.0);
        }
    }
}

/// Superseded requests complete but are dropped by the caller.
#[tokio::test(start_paused = true)]
async fn test_superseded_request_is_discarded() {
    init_tracing();
    let service = MarketDataService::with_defaults().unwrap();
    let tracker = Arc::new(RequestTracker::new());

    let first = tracker.begin();
    let slow_service = service.clone();
    let slow = tokio::spawn(async move {
        slow_service
            .get_market_snapshot(MarketQuery::new(Timeframe::D30, Strategy::Short, ""))
            .await
    });

    let second = tracker.begin();
    let fresh = service.get_market_snapshot(MarketQuery::default()).await;
    let stale = slow.await.unwrap();

    assert_eq!(stale.assets.len(), 6, "stale request still completes");
    assert!(tracker.accept(&first, stale).is_none());
    assert_eq!(tracker.accept(&second, fresh.clone()), Some(fresh));
}

/// Concurrent identical requests resolve to identical snapshots.
#[tokio::test(start_paused = true)]
async fn test_concurrent_requests_do_not_interact() {
    let service = MarketDataService::with_defaults().unwrap();
    let query = MarketQuery::new(Timeframe::D7, Strategy::Long, "");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let query = query.clone();
            tokio::spawn(async move { service.get_market_snapshot(query).await })
        })
        .collect();

    let expected = fingerprint(&service.snapshot_now(&query));
    for handle in handles {
        let snap = handle.await.unwrap();
        assert_eq!(fingerprint(&snap), expected);
    }
}

proptest! {
    #[test]
    fn prop_series_deterministic(seed in any::<u32>(), len in 1usize..120, vol in 0.0f64..0.08) {
        prop_assert_eq!(synthesize(seed, len, vol), synthesize(seed, len, vol));
    }

    #[test]
    fn prop_series_positive(seed in any::<u32>(), len in 1usize..300, vol in 0.0f64..=0.08) {
        let series = synthesize(seed, len, vol);
        prop_assert_eq!(series.len(), len);
        prop_assert!(series.as_slice().iter().all(|&v| v > 0.0));
    }

    #[test]
    fn prop_dominance_bounded(
        btc_cap in 0.0f64..1e13,
        others in proptest::collection::vec(0.0f64..1e12, 0..8),
    ) {
        let mut assets = vec![asset("BTC", 0.0, btc_cap)];
        assets.extend(others.iter().enumerate().map(|(i, &cap)| asset(&format!("A{i}"), 0.0, cap)));

        let metrics = aggregate(Timeframe::H24, &assets);
        prop_assert!(metrics.dominance >= 0.0);
        prop_assert!(metrics.dominance <= 100.0 + 1e-9);
    }

    #[test]
    fn prop_filter_idempotent(query in "[a-zA-Z ]{0,4}") {
        let snap = market_snapshot(&MarketConfig::default(), &MarketQuery::default());
        let once = filter_assets(snap.assets, &query);
        let twice = filter_assets(once.clone(), &query);
        prop_assert_eq!(once, twice);
    }
}
