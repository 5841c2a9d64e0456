//! GIS Types
//!
//! Shared models and traits for the GIS aggregator: the search request and
//! response envelopes, the module-agnostic spatial entity, the structured
//! geometry model with its WKT parser, and the data provider contract.

pub mod entities;
pub mod geometry;
pub mod providers;
pub mod search;
pub mod test_utils;

// Re-export geojson and serde_json for convenience
pub use geojson;
pub use serde_json;

pub use entities::{keys, RecordTransformError, SpatialEntity, SpatialEntityBuilder};

pub use geometry::{parse_wkt, Geometry, GeometryType, Position};

pub use providers::{
	CriteriaPolicy, DataProvider, ModuleInfo, ProviderError, ProviderRegistryError, ProviderResult,
};

pub use search::{
	RequestInfo, ResponseFormat, ResponseInfo, ResponseStatus, SearchCriteria, SearchOutput,
	SearchRequest, SearchResponse, SearchValidationError, SearchValidationResult,
};

/// Module names known to this workspace
pub mod modules {
	pub const PROPERTY: &str = "property";
}
