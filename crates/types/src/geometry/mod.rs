//! Structured geometry model
//!
//! Geometries are produced by parsing WKT text ([`parse_wkt`]) or from a
//! latitude/longitude pair carried by a spatial entity, and are encoded to
//! GeoJSON when a feature collection is assembled.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod wkt;

pub use wkt::parse_wkt;

/// A coordinate pair in WKT/GeoJSON order: `[x, y]`, i.e. `[longitude, latitude]`
pub type Position = [f64; 2];

/// Geometry type tag
///
/// New variants may be added when the codec learns more WKT keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[non_exhaustive]
pub enum GeometryType {
	Point,
	Polygon,
}

impl GeometryType {
	/// Resolve a geometry type from the leading keyword of an upper-cased WKT string
	pub fn from_wkt_keyword(wkt: &str) -> Option<Self> {
		if wkt.starts_with("POLYGON") {
			Some(Self::Polygon)
		} else if wkt.starts_with("POINT") {
			Some(Self::Point)
		} else {
			None
		}
	}

	/// GeoJSON type name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Point => "Point",
			Self::Polygon => "Polygon",
		}
	}
}

impl std::fmt::Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Structured geometry value
///
/// Serializes as `{"type": ..., "coordinates": ...}`, matching the GeoJSON
/// geometry object layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
#[non_exhaustive]
pub enum Geometry {
	/// A single position
	Point(Position),
	/// A single outer ring wrapped in a ring list; holes are not supported
	Polygon(Vec<Vec<Position>>),
}

impl Geometry {
	/// Build a point from a latitude/longitude pair
	pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
		Self::Point([longitude, latitude])
	}

	/// Build a single-ring polygon
	pub fn polygon(ring: Vec<Position>) -> Self {
		Self::Polygon(vec![ring])
	}

	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Self::Point(_) => GeometryType::Point,
			Self::Polygon(_) => GeometryType::Polygon,
		}
	}
}

impl From<&Geometry> for geojson::Value {
	fn from(geometry: &Geometry) -> Self {
		match geometry {
			Geometry::Point([x, y]) => geojson::Value::Point(vec![*x, *y]),
			Geometry::Polygon(rings) => geojson::Value::Polygon(
				rings
					.iter()
					.map(|ring| ring.iter().map(|[x, y]| vec![*x, *y]).collect())
					.collect(),
			),
		}
	}
}

impl From<Geometry> for geojson::Geometry {
	fn from(geometry: Geometry) -> Self {
		geojson::Geometry::from(&geometry)
	}
}
