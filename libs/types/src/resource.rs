//! Educational resource catalog types and derived filter facets

use crate::ids::ResourceId;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a resource.
///
/// Known levels have a canonical order Beginner < Intermediate < Advanced.
/// Labels outside that set are kept verbatim and rank after every known level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Level {
    pub fn parse(label: &str) -> Self {
        match label {
            "Beginner" => Level::Beginner,
            "Intermediate" => Level::Intermediate,
            "Advanced" => Level::Advanced,
            other => Level::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Other(label) => label,
        }
    }

    /// Position in the canonical order; unknown labels share the last rank.
    pub fn rank(&self) -> u8 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
            Level::Other(_) => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub strategy: Strategy,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub level: Level,
    pub duration_minutes: u32,
    pub tags: Vec<String>,
    /// Presentation label such as "Article" or "Video"
    pub format: String,
    /// Average rating in [0, 5]
    pub rating: f64,
    /// Completion percent in [0, 100]
    pub progress: u8,
}

impl Resource {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Inclusive duration bounds in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl DurationRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }
}

/// Facets derived from a resource set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct topics, lexicographically sorted
    pub topics: Vec<String>,
    /// Distinct levels in canonical order
    pub levels: Vec<Level>,
    /// Distinct tags, lexicographically sorted
    pub tags: Vec<String>,
    pub duration: DurationRange,
}
