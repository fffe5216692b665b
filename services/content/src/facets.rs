//! Filter facet derivation
//!
//! Topics and tags are deduplicated and sorted case-insensitively, with exact
//! byte order breaking ties between labels that differ only in case. Levels follow
//! the canonical Beginner → Intermediate → Advanced order; unrecognized
//! labels follow all known levels, in the order they first appear.

use std::collections::BTreeSet;

use types::resource::{DurationRange, FilterOptions, Level, Resource};

/// Derive facets over an arbitrary resource set.
pub fn filter_options(resources: &[Resource]) -> FilterOptions {
    let topics: BTreeSet<&str> = resources.iter().map(|r| r.topic.as_str()).collect();
    let tags: BTreeSet<&str> = resources
        .iter()
        .flat_map(|r| r.tags.iter().map(String::as_str))
        .collect();

    FilterOptions {
        topics: collated(topics),
        levels: distinct_levels(resources),
        tags: collated(tags),
        duration: duration_bounds(resources),
    }
}

/// Case-insensitive order over distinct labels.
fn collated(labels: BTreeSet<&str>) -> Vec<String> {
    let mut labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
    labels.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    labels
}

/// Distinct levels in canonical order, stable for equal ranks.
fn distinct_levels(resources: &[Resource]) -> Vec<Level> {
    let mut levels: Vec<Level> = Vec::new();
    for resource in resources {
        if !levels.contains(&resource.level) {
            levels.push(resource.level.clone());
        }
    }
    levels.sort_by_key(Level::rank);
    levels
}

/// Min/max duration, `{0, 0}` for an empty set.
fn duration_bounds(resources: &[Resource]) -> DurationRange {
    let min = resources.iter().map(|r| r.duration_minutes).min();
    let max = resources.iter().map(|r| r.duration_minutes).max();
    match (min, max) {
        (Some(min), Some(max)) => DurationRange::new(min, max),
        _ => DurationRange::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{reference_catalog, resources_for};
    use types::strategy::Strategy;

    #[test]
    fn test_long_facets() {
        let long = resources_for(&reference_catalog(), Strategy::Long);
        let options = filter_options(&long);

        assert_eq!(
            options.topics,
            vec![
                "DeFi",
                "Fundamentals",
                "On-Chain Analysis",
                "Portfolio Strategy",
                "Risk Management",
            ]
        );
        assert_eq!(
            options.levels,
            vec![Level::Beginner, Level::Intermediate, Level::Advanced]
        );
        assert_eq!(options.duration, DurationRange::new(28, 70));
        assert!(options.tags.contains(&"risk".to_string()));
        assert_eq!(options.tags.iter().filter(|t| *t == "risk").count(), 1);
    }

    #[test]
    fn test_short_tags_sorted_case_insensitively() {
        let short = resources_for(&reference_catalog(), Strategy::Short);
        let options = filter_options(&short);

        assert_eq!(
            options.tags,
            vec![
                "accounts",
                "alerts",
                "best practices",
                "charts",
                "indicators",
                "intraday",
                "liquidity",
                "MACD",
                "microstructure",
                "momentum",
                "news",
                "order flow",
                "patterns",
                "risk",
                "RSI",
                "scalping",
                "security",
                "volatility",
            ]
        );
        assert_eq!(options.duration, DurationRange::new(26, 72));
    }

    #[test]
    fn test_case_variants_kept_in_stable_order() {
        let mut resources = resources_for(&reference_catalog(), Strategy::Long);
        resources[0].tags = vec!["risk".to_string(), "Risk".to_string()];
        resources[1].tags = vec!["RISK".to_string()];

        let options = filter_options(&resources[..2]);
        assert_eq!(options.tags, vec!["RISK", "Risk", "risk"]);
    }

    #[test]
    fn test_empty_set() {
        let options = filter_options(&[]);
        assert!(options.topics.is_empty());
        assert!(options.levels.is_empty());
        assert!(options.tags.is_empty());
        assert_eq!(options.duration, DurationRange::new(0, 0));
    }

    #[test]
    fn test_unknown_levels_sort_last_in_appearance_order() {
        let mut resources = resources_for(&reference_catalog(), Strategy::Long);
        resources[0].level = Level::parse("Expert");
        resources[1].level = Level::parse("Guru");
        resources[2].level = Level::parse("Expert");

        let options = filter_options(&resources);
        assert_eq!(
            options.levels,
            vec![
                Level::Beginner,
                Level::Intermediate,
                Level::Advanced,
                Level::parse("Expert"),
                Level::parse("Guru"),
            ]
        );
    }
}
