//! GeoJSON feature assembly
//!
//! Resolves each spatial entity's geometry and wraps it as a GeoJSON feature
//! carrying the entity's full property bag.

use geojson::{feature::Id, Feature, FeatureCollection};
use gis_types::{parse_wkt, Geometry, RecordTransformError, SpatialEntity};
use serde_json::Value;
use tracing::{debug, warn};

/// Resolve an entity's geometry
///
/// A present `geometry` key wins and must hold WKT text; an unparsable WKT
/// yields no geometry rather than falling back to the coordinate pair.
pub fn resolve_geometry(entity: &SpatialEntity) -> Result<Option<Geometry>, RecordTransformError> {
	match entity.geometry() {
		Some(Value::String(wkt)) => Ok(parse_wkt(wkt)),
		Some(other) => Err(RecordTransformError::new(
			entity_label(entity),
			format!("geometry must be a WKT string, got {}", other),
		)),
		None => Ok(entity
			.coordinates()
			.map(|(latitude, longitude)| Geometry::from_lat_lon(latitude, longitude))),
	}
}

/// Convert one entity into a feature, or `None` when it has no usable geometry
pub fn entity_to_feature(entity: &SpatialEntity) -> Option<Feature> {
	let geometry = match resolve_geometry(entity) {
		Ok(Some(geometry)) => geometry,
		Ok(None) => {
			warn!("No geometry available for entity: {}", entity_label(entity));
			return None;
		},
		Err(e) => {
			warn!("{}", e);
			return None;
		},
	};

	Some(Feature {
		bbox: None,
		geometry: Some(geojson::Geometry::from(geometry)),
		id: entity.id().map(|id| Id::String(id.to_string())),
		properties: Some(entity.properties().clone()),
		foreign_members: None,
	})
}

/// Build a feature collection, keeping input order and dropping entities without geometry
pub fn build_feature_collection(entities: &[SpatialEntity]) -> FeatureCollection {
	let features: Vec<Feature> = entities.iter().filter_map(entity_to_feature).collect();

	debug!(
		"Built feature collection with {} features from {} entities",
		features.len(),
		entities.len()
	);

	FeatureCollection {
		bbox: None,
		features,
		foreign_members: None,
	}
}

fn entity_label(entity: &SpatialEntity) -> String {
	entity.id().unwrap_or("<unknown>").to_string()
}
