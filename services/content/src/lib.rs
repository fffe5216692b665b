//! Content Service
//!
//! Static catalog of educational resources for the learning dashboard:
//! - Strategy query over the catalog, in declaration order
//! - Facet derivation (topics, levels, tags, duration bounds)
//! - Client-side filtering against selected facets and free-text search
//!
//! The catalog is immutable once the service is built; the async query only
//! adds a simulated network delay.

pub mod catalog;
pub mod config;
pub mod facets;
pub mod filter;
pub mod format;
pub mod service;

pub use catalog::{reference_catalog, resources_for};
pub use config::ContentConfig;
pub use facets::filter_options;
pub use filter::ResourceFilter;
pub use service::ContentService;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
