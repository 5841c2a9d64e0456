//! Spatial entity: one normalized record produced by a module data provider

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod errors;

pub use errors::RecordTransformError;

/// Conventional keys carried by a [`SpatialEntity`]
pub mod keys {
	/// Unique entity identifier (string)
	pub const ID: &str = "id";
	/// Optional WKT geometry string
	pub const GEOMETRY: &str = "geometry";
	/// Optional `{ latitude, longitude }` object
	pub const COORDINATES: &str = "coordinates";
	pub const LATITUDE: &str = "latitude";
	pub const LONGITUDE: &str = "longitude";
}

/// A normalized, module-agnostic record
///
/// A flat property bag that always carries an identifier under [`keys::ID`]
/// and optionally a WKT string under [`keys::GEOMETRY`] or a coordinate pair
/// under [`keys::COORDINATES`]. Entities are assembled through
/// [`SpatialEntityBuilder`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpatialEntity {
	properties: Map<String, Value>,
}

impl SpatialEntity {
	/// Start building an entity with the given identifier
	pub fn builder(id: impl Into<String>) -> SpatialEntityBuilder {
		SpatialEntityBuilder::new(id)
	}

	/// Entity identifier, if it is a string
	pub fn id(&self) -> Option<&str> {
		self.properties.get(keys::ID).and_then(Value::as_str)
	}

	/// Raw geometry value; `None` when the key is absent or null
	pub fn geometry(&self) -> Option<&Value> {
		self.properties.get(keys::GEOMETRY).filter(|v| !v.is_null())
	}

	/// Latitude/longitude pair, when both are present and numeric
	pub fn coordinates(&self) -> Option<(f64, f64)> {
		let coordinates = self.properties.get(keys::COORDINATES)?.as_object()?;
		let latitude = coordinates.get(keys::LATITUDE)?.as_f64()?;
		let longitude = coordinates.get(keys::LONGITUDE)?.as_f64()?;
		Some((latitude, longitude))
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}

	/// Full property bag
	pub fn properties(&self) -> &Map<String, Value> {
		&self.properties
	}

	/// Consume the entity, returning its property bag
	pub fn into_properties(self) -> Map<String, Value> {
		self.properties
	}
}

/// Builder for [`SpatialEntity`]
#[derive(Debug, Clone)]
pub struct SpatialEntityBuilder {
	properties: Map<String, Value>,
}

impl SpatialEntityBuilder {
	pub fn new(id: impl Into<String>) -> Self {
		let mut properties = Map::new();
		properties.insert(keys::ID.to_string(), Value::String(id.into()));
		Self { properties }
	}

	/// Set an arbitrary property
	pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.insert(key.into(), value.into());
		self
	}

	/// Set a WKT geometry string
	pub fn wkt(self, wkt: impl Into<String>) -> Self {
		self.property(keys::GEOMETRY, Value::String(wkt.into()))
	}

	/// Set a raw geometry value (passed through as received)
	pub fn geometry_value(self, value: Value) -> Self {
		self.property(keys::GEOMETRY, value)
	}

	/// Set the latitude/longitude pair used when no WKT geometry is present
	pub fn coordinates(self, latitude: f64, longitude: f64) -> Self {
		let mut coordinates = Map::new();
		coordinates.insert(keys::LATITUDE.to_string(), Value::from(latitude));
		coordinates.insert(keys::LONGITUDE.to_string(), Value::from(longitude));
		self.property(keys::COORDINATES, Value::Object(coordinates))
	}

	pub fn build(self) -> SpatialEntity {
		SpatialEntity {
			properties: self.properties,
		}
	}
}
