//! GIS Service
//!
//! Search dispatch, GeoJSON feature assembly and layer URL rendering.

pub mod feature_builder;
pub mod layer_urls;
pub mod response;
pub mod search;

pub use feature_builder::{build_feature_collection, entity_to_feature, resolve_geometry};
pub use layer_urls::{LayerUrlBuilder, DEFAULT_GEOSERVER_BASE_URL};
pub use response::ResponseAssembler;
pub use search::{SearchService, SearchServiceError, SearchServiceTrait};

#[cfg(any(test, feature = "test-utils"))]
pub use search::MockSearchServiceTrait;
