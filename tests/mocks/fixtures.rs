//! Property registry payloads and settings used across tests

use gis_config::{ConfigurableValue, Settings};
use serde_json::{json, Value};

pub struct PropertyFixtures;

#[allow(dead_code)]
impl PropertyFixtures {
	/// Record with a registry polygon geometry
	pub fn with_polygon() -> Value {
		json!({
			"propertyId": "PG-PT-2024-0001",
			"tenantId": "pg.citya",
			"propertyType": "BUILTUP.INDEPENDENTPROPERTY",
			"usageCategory": "RESIDENTIAL",
			"landArea": 240.0,
			"address": {
				"city": "CityA",
				"locality": {"code": "SUN04"},
				"pincode": "143001"
			},
			"owners": [{"name": "Asha Rani", "mobileNumber": "9999999999"}],
			"geometry": {
				"id": "geo-1",
				"propertyId": "PG-PT-2024-0001",
				"tenantId": "pg.citya",
				"geometry": "POLYGON((74.87 31.63, 74.88 31.63, 74.88 31.64, 74.87 31.64, 74.87 31.63))"
			}
		})
	}

	/// Record located only by its address geo-location
	pub fn with_geo_location() -> Value {
		json!({
			"propertyId": "PG-PT-2024-0002",
			"tenantId": "pg.citya",
			"address": {
				"city": "CityA",
				"geoLocation": {"latitude": 31.634, "longitude": 74.8723}
			}
		})
	}

	/// Record the provider must drop
	pub fn without_property_id() -> Value {
		json!({
			"tenantId": "pg.citya",
			"address": {"city": "CityA"}
		})
	}

	/// Record with no geometry source at all
	pub fn without_location() -> Value {
		json!({
			"propertyId": "PG-PT-2024-0003",
			"tenantId": "pg.citya",
			"address": {"city": "CityA"}
		})
	}

	pub fn search_response(records: Vec<Value>) -> Value {
		json!({
			"ResponseInfo": {"apiId": "Rainmaker", "status": "successful"},
			"Properties": records
		})
	}

	/// Two usable records around a broken one
	pub fn mixed_response() -> Value {
		Self::search_response(vec![
			Self::with_polygon(),
			Self::without_property_id(),
			Self::with_geo_location(),
		])
	}

	/// Settings pointing the property module at `host`
	pub fn settings_for(host: &str) -> Settings {
		let mut settings = Settings::default();
		settings.server.host = "127.0.0.1".to_string();
		settings.geoserver.base_url = "http://geoserver.test/geoserver/".to_string();
		settings.modules.property.host = ConfigurableValue::from_plain(host);
		settings.modules.property.timeout_ms = 5_000;
		settings
	}
}
