//! Snapshot fingerprinting
//!
//! SHA-256 over the exact bit patterns of a snapshot's numbers, so two
//! snapshots fingerprint equal only if they are bit-identical. Used to check
//! reproducibility across calls and across process restarts.

use sha2::{Digest, Sha256};
use types::market::MarketSnapshot;

/// Hex-encoded SHA-256 of `snapshot`, in response order.
pub fn fingerprint(snapshot: &MarketSnapshot) -> String {
    let mut hasher = Sha256::new();

    // Hash metrics
    let m = &snapshot.metrics;
    for value in [m.btc_change, m.eth_change, m.dominance, m.volume, m.volatility] {
        hasher.update(value.to_bits().to_le_bytes());
    }
    hasher.update(b"---");

    // Hash assets
    for asset in &snapshot.assets {
        hasher.update(asset.symbol.as_str().as_bytes());
        hasher.update(b":");
        for value in [asset.price, asset.change_pct, asset.market_cap] {
            hasher.update(value.to_bits().to_le_bytes());
        }
        for point in asset.sparkline.as_slice() {
            hasher.update(point.to_bits().to_le_bytes());
        }
        hasher.update(b"|");
    }

    format!("{:x}", hasher.finalize())
}

/// Check that `snapshot` still matches a previously recorded fingerprint.
pub fn verify_fingerprint(snapshot: &MarketSnapshot, expected: &str) -> bool {
    fingerprint(snapshot) == expected
}
