//! Timeframe selector and per-timeframe synthesis profile

use serde::{Deserialize, Serialize};
use std::fmt;

/// Window over which market change is measured.
///
/// Parsing never fails: labels outside the known set map to
/// [`Timeframe::Unrecognized`], which every consumer handles as an explicit
/// default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    /// 24 hours
    #[default]
    H24,
    /// 7 days
    D7,
    /// 30 days
    D30,
    /// Any label not in the known set
    Unrecognized,
}

impl Timeframe {
    /// Known timeframes in ascending window length.
    pub fn all() -> &'static [Timeframe] {
        &[Timeframe::H24, Timeframe::D7, Timeframe::D30]
    }

    /// Parse a label such as `"7d"` (trimmed, case-insensitive).
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "24h" => Timeframe::H24,
            "7d" => Timeframe::D7,
            "30d" => Timeframe::D30,
            _ => Timeframe::Unrecognized,
        }
    }

    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::H24 => "24h",
            Timeframe::D7 => "7d",
            Timeframe::D30 => "30d",
            Timeframe::Unrecognized => "unknown",
        }
    }

    /// Offset added to each asset's seed so timeframes produce distinct walks.
    pub fn seed_offset(&self) -> u32 {
        match self {
            Timeframe::H24 | Timeframe::Unrecognized => 1,
            Timeframe::D7 => 7,
            Timeframe::D30 => 30,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Timeframe {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Timeframe {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.label().to_string()
    }
}

/// Random-walk parameters for one timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeProfile {
    /// Max fractional step magnitude per point
    pub volatility: f64,
    /// Number of points in the synthesized series
    pub points: usize,
}
