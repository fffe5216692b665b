//! Client-side resource filter
//!
//! Applied by the presentation layer on top of a strategy query. All active
//! criteria must hold at once.

use serde::{Deserialize, Serialize};
use types::resource::{DurationRange, FilterOptions, Level, Resource};

/// Filter selections for the resource grid.
///
/// Missing fields deserialize to the unfiltered state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFilter {
    /// Free-text search over title, description, topic and tags.
    pub search: String,
    pub topic: Option<String>,
    pub level: Option<Level>,
    /// Inclusive bounds on `duration_minutes`.
    pub duration: DurationRange,
    /// Every selected tag must be present on a match.
    pub tags: Vec<String>,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            topic: None,
            level: None,
            duration: DurationRange::new(0, 999),
            tags: Vec::new(),
        }
    }
}

impl ResourceFilter {
    /// Reset state after a strategy switch: nothing selected, duration
    /// spanning the facet bounds.
    pub fn for_options(options: &FilterOptions) -> Self {
        Self {
            duration: options.duration,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_duration(mut self, duration: DurationRange) -> Self {
        self.duration = duration;
        self
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_search(resource)
            && self.topic.as_ref().map_or(true, |t| &resource.topic == t)
            && self.level.as_ref().map_or(true, |l| &resource.level == l)
            && self.duration.contains(resource.duration_minutes)
            && self.tags.iter().all(|t| resource.has_tag(t))
    }

    /// Matching resources, in input order.
    pub fn apply(&self, resources: &[Resource]) -> Vec<Resource> {
        resources.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    fn matches_search(&self, resource: &Resource) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        resource.title.to_lowercase().contains(&needle)
            || resource.description.to_lowercase().contains(&needle)
            || resource.topic.to_lowercase().contains(&needle)
            || resource.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}
