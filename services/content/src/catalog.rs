//! Reference resource catalog and the strategy query over it
//!
//! Entries are listed in declaration order, which is also the order every
//! query returns them in. The last two entries interleave long and short.

use types::ids::ResourceId;
use types::resource::{Level, Resource};
use types::strategy::Strategy;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    strategy: Strategy,
    title: &str,
    description: &str,
    topic: &str,
    level: Level,
    duration_minutes: u32,
    tags: &[&str],
    format: &str,
    rating: f64,
    progress: u8,
) -> Resource {
    Resource {
        id: ResourceId::new(id),
        strategy,
        title: title.to_string(),
        description: description.to_string(),
        topic: topic.to_string(),
        level,
        duration_minutes,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        format: format.to_string(),
        rating,
        progress,
    }
}

/// The twelve reference entries, six per strategy.
pub fn reference_catalog() -> Vec<Resource> {
    use Level::{Advanced, Beginner, Intermediate};
    use Strategy::{Long, Short};

    vec![
        entry(
            "lt-101",
            Long,
            "Crypto Investing Fundamentals",
            "Understand blockchain basics, market cycles, and long-term allocation strategies.",
            "Fundamentals",
            Beginner,
            35,
            &["basics", "blockchain", "portfolio"],
            "Article",
            4.7,
            15,
        ),
        entry(
            "lt-102",
            Long,
            "Building a Diversified Portfolio",
            "Learn diversification techniques, position sizing, and rebalancing for the long run.",
            "Portfolio Strategy",
            Intermediate,
            52,
            &["allocation", "diversification", "risk"],
            "Video",
            4.6,
            40,
        ),
        entry(
            "lt-103",
            Long,
            "On-Chain Metrics for Long-Term Investors",
            "Assess network activity, holder behavior, and supply dynamics to inform long-term theses.",
            "On-Chain Analysis",
            Advanced,
            70,
            &["on-chain", "metrics", "analytics"],
            "Article",
            4.8,
            0,
        ),
        entry(
            "lt-104",
            Long,
            "Risk Management Essentials",
            "Define risk budgets, set drawdown limits, and manage volatility exposure.",
            "Risk Management",
            Intermediate,
            45,
            &["risk", "drawdown", "volatility"],
            "Article",
            4.5,
            60,
        ),
        entry(
            "lt-105",
            Long,
            "Staking and Passive Yield",
            "Explore staking, validator selection, and sustainable passive yield strategies.",
            "DeFi",
            Beginner,
            28,
            &["staking", "yield", "security"],
            "Video",
            4.4,
            10,
        ),
        entry(
            "st-201",
            Short,
            "Intro to Technical Analysis",
            "A concise primer on chart patterns, support/resistance, and momentum.",
            "Technical Analysis",
            Beginner,
            32,
            &["charts", "momentum", "patterns"],
            "Article",
            4.3,
            25,
        ),
        entry(
            "st-202",
            Short,
            "Scalping and Day Trading Setups",
            "High-probability intraday setups, risk control, and trade journaling.",
            "Trading Strategy",
            Advanced,
            65,
            &["scalping", "intraday", "risk"],
            "Video",
            4.6,
            0,
        ),
        entry(
            "st-203",
            Short,
            "Indicators Deep Dive: RSI & MACD",
            "Learn to combine RSI and MACD for timing entries and exits effectively.",
            "Technical Analysis",
            Intermediate,
            48,
            &["indicators", "RSI", "MACD"],
            "Article",
            4.5,
            80,
        ),
        entry(
            "st-204",
            Short,
            "Order Flow & Liquidity",
            "Navigate liquidity pools, identify stop clusters, and read order book signals.",
            "Market Microstructure",
            Advanced,
            72,
            &["order flow", "liquidity", "microstructure"],
            "Article",
            4.7,
            5,
        ),
        entry(
            "st-205",
            Short,
            "Securing Your Trading Setup",
            "Protect accounts, manage API keys, and avoid common security pitfalls.",
            "Security",
            Beginner,
            26,
            &["security", "accounts", "best practices"],
            "Video",
            4.2,
            30,
        ),
        entry(
            "lt-106",
            Long,
            "Sector Rotation in Crypto",
            "Identify emerging sectors, rotate positions, and capture multi-quarter trends.",
            "Portfolio Strategy",
            Advanced,
            62,
            &["sectors", "rotation", "macro"],
            "Article",
            4.6,
            0,
        ),
        entry(
            "st-206",
            Short,
            "News Catalysts and Volatility",
            "Trade around news events, manage gaps, and set alerts for key catalysts.",
            "Trading Strategy",
            Intermediate,
            41,
            &["news", "volatility", "alerts"],
            "Article",
            4.4,
            50,
        ),
    ]
}

/// Entries tagged `strategy`, in catalog order.
pub fn resources_for(catalog: &[Resource], strategy: Strategy) -> Vec<Resource> {
    catalog
        .iter()
        .filter(|r| r.strategy == strategy)
        .cloned()
        .collect()
}
