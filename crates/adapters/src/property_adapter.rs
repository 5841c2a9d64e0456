//! Property module data provider
//!
//! Searches the property registry service and normalizes its property
//! records into spatial entities. Geometry comes either from a WKT string the
//! registry attaches to the record, or from the address geo-location.

use async_trait::async_trait;
use gis_types::{
	modules, CriteriaPolicy, DataProvider, ProviderError, ProviderResult, RecordTransformError,
	RequestInfo, SearchCriteria, SearchRequest, SpatialEntity,
};
use reqwest::Client;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::client::{build_client, ClientConfig};

/// Search parameters forwarded to the property registry, in forwarding order
pub const PROPERTY_SEARCH_PARAMETERS: &[&str] = &[
	// Property IDs and references
	"propertyIds",
	"propertyDetailids",
	"oldpropertyids",
	"acknowledgementIds",
	"uuids",
	"ownerIds",
	// Owner information
	"mobileNumber",
	"name",
	// Property details
	"propertyType",
	"ownershipCategory",
	"usageCategory",
	"oldPropertyId",
	// Location details
	"locality",
	"city",
	"district",
	"state",
	"pincode",
	// Status and workflow
	"status",
	"approvalStatus",
	"creationReason",
	// Date ranges
	"fromDate",
	"toDate",
	// Pagination
	"offset",
	"limit",
	"accountId",
	"includeGeometry",
];

const QUERY_PARAM_TENANT_ID: &str = "tenantId";
const QUERY_PARAM_INCLUDE_GEOMETRY: &str = "includeGeometry";
const QUERY_PARAM_INCLUDE_GEOMETRY_VALUE: &str = "true";

/// Key of the records list in the registry's search response
const RECORDS_KEY: &str = "Properties";
const PROPERTY_ID: &str = "propertyId";

/// Record fields copied as-is (null when missing)
const COPIED_FIELDS: &[&str] = &[
	"tenantId",
	"propertyType",
	"ownershipCategory",
	"usageCategory",
	"landArea",
	"superBuiltUpArea",
];

/// Address fields lifted to the top level of the entity
const ADDRESS_FIELDS: &[&str] = &["locality", "city", "district", "state", "pincode"];

/// Connection settings for the property registry
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyProviderConfig {
	/// Scheme and authority of the property service, e.g. `http://property-services:8080`
	pub host: String,
	/// Path of the search endpoint, appended to `host`
	pub search_path: String,
	pub timeout_ms: u64,
	pub criteria_policy: CriteriaPolicy,
}

impl Default for PropertyProviderConfig {
	fn default() -> Self {
		Self {
			host: "http://localhost:8280".to_string(),
			search_path: "/property-services/property/_search".to_string(),
			timeout_ms: 30_000,
			criteria_policy: CriteriaPolicy::Warn,
		}
	}
}

impl PropertyProviderConfig {
	pub fn new(host: impl Into<String>, search_path: impl Into<String>) -> Self {
		Self {
			host: host.into(),
			search_path: search_path.into(),
			..Self::default()
		}
	}
}

/// Data provider for the `property` module
#[derive(Debug, Clone)]
pub struct PropertyProvider {
	config: PropertyProviderConfig,
	client: Client,
}

impl PropertyProvider {
	/// Create a provider with its own HTTP client
	pub fn new(config: PropertyProviderConfig) -> ProviderResult<Self> {
		let client = build_client(&ClientConfig::with_timeout_ms(config.timeout_ms))?;
		Ok(Self::with_client(config, client))
	}

	/// Create a provider using a caller-supplied HTTP client
	pub fn with_client(config: PropertyProviderConfig, client: Client) -> Self {
		Self { config, client }
	}

	pub fn config(&self) -> &PropertyProviderConfig {
		&self.config
	}

	/// Build the upstream search URL with tenant, geometry flag and whitelisted criteria
	pub fn search_url(&self, request: &SearchRequest) -> ProviderResult<Url> {
		let base = format!(
			"{}/{}",
			self.config.host.trim_end_matches('/'),
			self.config.search_path.trim_start_matches('/')
		);
		let mut url = Url::parse(&base).map_err(|e| ProviderError::Configuration {
			reason: format!("Invalid property service URL '{}': {}", base, e),
		})?;

		{
			let mut query = url.query_pairs_mut();
			query.append_pair(QUERY_PARAM_TENANT_ID, &request.tenant_id);
			query.append_pair(
				QUERY_PARAM_INCLUDE_GEOMETRY,
				QUERY_PARAM_INCLUDE_GEOMETRY_VALUE,
			);
			for (key, value) in whitelisted_criteria(&request.search_criteria) {
				query.append_pair(key, &value);
			}
		}

		Ok(url)
	}

	/// Request body carrying the platform request metadata
	fn build_request_body(request_info: Option<&RequestInfo>) -> Value {
		let request_info = request_info
			.and_then(|info| serde_json::to_value(info).ok())
			.unwrap_or_else(|| Value::Object(Map::new()));
		json!({ "RequestInfo": request_info })
	}

	async fn call_property_service(&self, url: Url, body: &Value) -> ProviderResult<Value> {
		let response = self
			.client
			.post(url)
			.json(body)
			.send()
			.await
			.map_err(ProviderError::HttpError)?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::from_http_failure(status.as_u16()));
		}

		let text = response.text().await.map_err(ProviderError::HttpError)?;
		serde_json::from_str(&text).map_err(|e| {
			ProviderError::invalid_response(format!(
				"Failed to parse property service response: {}",
				e
			))
		})
	}

	/// Normalize the registry's search response into spatial entities
	///
	/// A missing records list yields no entities. Records that fail to
	/// normalize are logged and skipped.
	pub fn transform_response(response: &Value) -> ProviderResult<Vec<SpatialEntity>> {
		let body = response.as_object().ok_or_else(|| {
			ProviderError::invalid_response("Property service response is not a JSON object")
		})?;

		let records = match body.get(RECORDS_KEY) {
			None | Some(Value::Null) => {
				warn!("No properties found in property service response");
				return Ok(Vec::new());
			},
			Some(Value::Array(records)) => records,
			Some(_) => {
				return Err(ProviderError::invalid_response(format!(
					"'{}' in property service response is not a list",
					RECORDS_KEY
				)))
			},
		};

		debug!(
			"Processing {} properties for spatial data transformation",
			records.len()
		);

		let entities: Vec<SpatialEntity> = records
			.iter()
			.filter_map(|record| match Self::transform_property(record) {
				Ok(entity) => Some(entity),
				Err(e) => {
					warn!(
						"Failed to transform property. PropertyId: {}, Error: {}",
						e.entity_id, e.reason
					);
					None
				},
			})
			.collect();

		debug!(
			"Successfully transformed {} of {} properties to spatial data",
			entities.len(),
			records.len()
		);
		Ok(entities)
	}

	/// Normalize a single property record
	pub fn transform_property(record: &Value) -> Result<SpatialEntity, RecordTransformError> {
		let property = record
			.as_object()
			.ok_or_else(|| RecordTransformError::unidentified("record is not a JSON object"))?;

		let property_id = match property.get(PROPERTY_ID) {
			Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
			Some(Value::Null) | None => {
				return Err(RecordTransformError::unidentified("missing propertyId"))
			},
			Some(other) => {
				return Err(RecordTransformError::new(
					other.to_string(),
					"propertyId is not a string",
				))
			},
		};

		let mut builder =
			SpatialEntity::builder(property_id.as_str()).property(PROPERTY_ID, property_id.as_str());

		for field in COPIED_FIELDS {
			builder = builder.property(*field, field_or_null(property, field));
		}

		match property.get("address") {
			None | Some(Value::Null) => {},
			Some(Value::Object(address)) => {
				builder = builder.property("address", Value::Object(address.clone()));
				for field in ADDRESS_FIELDS {
					builder = builder.property(*field, field_or_null(address, field));
				}
				if let Some((latitude, longitude)) = geo_location(address) {
					builder = builder.coordinates(latitude, longitude);
				}
			},
			Some(_) => {
				return Err(RecordTransformError::new(
					property_id,
					"address is not an object",
				))
			},
		}

		if let Some(owner) = property
			.get("owners")
			.and_then(Value::as_array)
			.and_then(|owners| owners.first())
			.and_then(Value::as_object)
		{
			builder = builder
				.property("ownerName", field_or_null(owner, "name"))
				.property("ownerMobileNumber", field_or_null(owner, "mobileNumber"));
		}

		builder = match property.get("geometry") {
			None | Some(Value::Null) => builder,
			Some(Value::String(wkt)) => builder.wkt(wkt.as_str()),
			// The registry's own geometry record: { id, propertyId, tenantId, geometry }
			Some(Value::Object(geometry)) => match geometry.get("geometry").and_then(Value::as_str) {
				Some(wkt) => builder.wkt(wkt),
				None => builder.geometry_value(Value::Object(geometry.clone())),
			},
			Some(other) => builder.geometry_value(other.clone()),
		};

		Ok(builder.build())
	}
}

#[async_trait]
impl DataProvider for PropertyProvider {
	fn module_name(&self) -> &str {
		modules::PROPERTY
	}

	fn supported_search_parameters(&self) -> &[&str] {
		PROPERTY_SEARCH_PARAMETERS
	}

	fn criteria_policy(&self) -> CriteriaPolicy {
		self.config.criteria_policy
	}

	fn name(&self) -> &str {
		"Property Registry"
	}

	fn description(&self) -> Option<&str> {
		Some("Property records with address geo-locations and registry geometries")
	}

	async fn fetch_spatial_data(
		&self,
		request: &SearchRequest,
	) -> ProviderResult<Vec<SpatialEntity>> {
		info!(
			"Property spatial data fetch started. RequestId: {}, Criteria: {:?}",
			request.msg_id(),
			request.search_criteria
		);

		let url = self.search_url(request)?;
		let body = Self::build_request_body(request.request_info.as_ref());
		debug!(
			"Calling property service. RequestId: {}, URL: {}",
			request.msg_id(),
			url
		);

		let response = match self.call_property_service(url, &body).await {
			Ok(response) => response,
			Err(e) => {
				error!(
					"Failed to fetch spatial data from property service. RequestId: {}, Error: {}",
					request.msg_id(),
					e
				);
				return Err(e);
			},
		};

		Self::transform_response(&response)
	}
}

/// Criteria present in the supported list, in declared order, rendered as query values
fn whitelisted_criteria(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
	PROPERTY_SEARCH_PARAMETERS
		.iter()
		.filter_map(|key| {
			criteria
				.get(key)
				.and_then(render_query_value)
				.map(|value| (*key, value))
		})
		.collect()
}

fn render_query_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Array(items) => Some(
			items
				.iter()
				.filter_map(render_query_value)
				.collect::<Vec<_>>()
				.join(","),
		),
		other => Some(other.to_string()),
	}
}

fn field_or_null(object: &Map<String, Value>, field: &str) -> Value {
	object.get(field).cloned().unwrap_or(Value::Null)
}

fn geo_location(address: &Map<String, Value>) -> Option<(f64, f64)> {
	let geo_location = address.get("geoLocation")?.as_object()?;
	let latitude = geo_location.get("latitude")?.as_f64()?;
	let longitude = geo_location.get("longitude")?.as_f64()?;
	Some((latitude, longitude))
}
