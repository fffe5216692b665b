//! Types library for the crypto learning dashboard engine
//!
//! This library provides the value types shared by the market-data and
//! content services: identifiers, closed selector enums, asset and resource
//! records, derived views, and the error taxonomy.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Identifiers (RequestId, Symbol, ResourceId)
//! - `timeframe`: Timeframe selector and synthesis profile
//! - `strategy`: Long/short orientation
//! - `asset`: Asset baselines, price series, asset snapshots
//! - `market`: Market metrics and snapshot response
//! - `resource`: Catalog entries, levels, filter facets
//! - `request`: Last-request-wins tracker for callers
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod timeframe;
pub mod strategy;
pub mod asset;
pub mod market;
pub mod resource;
pub mod request;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::timeframe::*;
    pub use crate::strategy::*;
    pub use crate::asset::*;
    pub use crate::market::*;
    pub use crate::resource::*;
    pub use crate::request::*;
    pub use crate::errors::*;
}
