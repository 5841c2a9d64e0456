//! Search request model and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
#[cfg(feature = "openapi")]
#[allow(unused_imports)]
use serde_json::json;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{RequestInfo, SearchValidationError, SearchValidationResult};

/// Output format requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
	/// GeoJSON feature collection in the response body
	#[default]
	Geojson,
	/// WMS GetMap layer reference
	Wms,
	/// WFS GetFeature layer reference
	Wfs,
}

impl ResponseFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Geojson => "geojson",
			Self::Wms => "wms",
			Self::Wfs => "wfs",
		}
	}
}

impl std::fmt::Display for ResponseFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Module-defined search criteria
///
/// Keys and values are opaque to the dispatcher; each data provider
/// interprets them against its own list of supported parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(transparent)]
pub struct SearchCriteria(HashMap<String, Value>);

impl SearchCriteria {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Keys not present in `supported`, sorted
	pub fn unsupported_keys(&self, supported: &[&str]) -> Vec<String> {
		let mut keys: Vec<String> = self
			.keys()
			.filter(|key| !supported.contains(key))
			.map(str::to_string)
			.collect();
		keys.sort();
		keys
	}
}

impl FromIterator<(String, Value)> for SearchCriteria {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

fn default_geometry_required() -> bool {
	true
}

/// API request body for the spatial search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "requestInfo": { "apiId": "Rainmaker", "msgId": "1695889012604|en_IN" },
    "tenantId": "pg.citya",
    "module": "property",
    "searchCriteria": { "locality": "SUN04", "limit": 50 },
    "geometryRequired": true,
    "responseFormat": "geojson"
})))]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	/// Platform request metadata, forwarded to upstream services
	#[serde(default, alias = "RequestInfo", skip_serializing_if = "Option::is_none")]
	pub request_info: Option<RequestInfo>,

	/// Tenant the search is scoped to
	pub tenant_id: String,

	/// Module name selecting the data provider
	pub module: String,

	/// Module-defined search criteria
	#[serde(default)]
	pub search_criteria: SearchCriteria,

	/// Whether a spatial output should be rendered
	#[serde(default = "default_geometry_required")]
	pub geometry_required: bool,

	/// Output format rendered when geometry is required
	#[serde(default)]
	pub response_format: ResponseFormat,
}

impl SearchRequest {
	/// Create a GeoJSON request with empty criteria
	pub fn new(module: impl Into<String>, tenant_id: impl Into<String>) -> Self {
		Self {
			request_info: None,
			tenant_id: tenant_id.into(),
			module: module.into(),
			search_criteria: SearchCriteria::default(),
			geometry_required: true,
			response_format: ResponseFormat::default(),
		}
	}

	pub fn with_criteria(mut self, criteria: SearchCriteria) -> Self {
		self.search_criteria = criteria;
		self
	}

	pub fn with_format(mut self, format: ResponseFormat) -> Self {
		self.response_format = format;
		self
	}

	pub fn with_geometry_required(mut self, required: bool) -> Self {
		self.geometry_required = required;
		self
	}

	pub fn with_request_info(mut self, request_info: RequestInfo) -> Self {
		self.request_info = Some(request_info);
		self
	}

	/// Message id from the request metadata, or `-` when absent
	pub fn msg_id(&self) -> &str {
		self.request_info
			.as_ref()
			.and_then(|info| info.msg_id.as_deref())
			.unwrap_or("-")
	}

	/// Validate the fields every module relies on
	pub fn validate(&self) -> SearchValidationResult<()> {
		if self.module.trim().is_empty() {
			return Err(SearchValidationError::MissingRequiredField {
				field: "module".to_string(),
			});
		}

		if self.tenant_id.trim().is_empty() {
			return Err(SearchValidationError::MissingRequiredField {
				field: "tenantId".to_string(),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_defaults_applied_on_deserialize() {
		let request: SearchRequest = serde_json::from_value(json!({
			"module": "property",
			"tenantId": "pg.citya"
		}))
		.unwrap();

		assert!(request.geometry_required);
		assert_eq!(request.response_format, ResponseFormat::Geojson);
		assert!(request.search_criteria.is_empty());
		assert!(request.request_info.is_none());
		assert_eq!(request.msg_id(), "-");
	}

	#[test]
	fn test_full_request_deserialize() {
		let request: SearchRequest = serde_json::from_value(json!({
			"RequestInfo": {"apiId": "Rainmaker", "msgId": "abc|en_IN"},
			"module": "property",
			"tenantId": "pg.citya",
			"searchCriteria": {"city": "X", "limit": 10},
			"geometryRequired": false,
			"responseFormat": "wfs"
		}))
		.unwrap();

		assert!(!request.geometry_required);
		assert_eq!(request.response_format, ResponseFormat::Wfs);
		assert_eq!(request.search_criteria.get("city"), Some(&json!("X")));
		assert_eq!(request.msg_id(), "abc|en_IN");
	}

	#[test]
	fn test_unknown_response_format_is_rejected() {
		let result: Result<SearchRequest, _> = serde_json::from_value(json!({
			"module": "property",
			"tenantId": "pg.citya",
			"responseFormat": "kml"
		}));
		assert!(result.is_err());
	}

	#[test]
	fn test_validate_required_fields() {
		assert!(SearchRequest::new("property", "pg.citya").validate().is_ok());

		let error = SearchRequest::new(" ", "pg.citya").validate().unwrap_err();
		assert_eq!(
			error,
			SearchValidationError::MissingRequiredField {
				field: "module".to_string()
			}
		);

		let error = SearchRequest::new("property", "").validate().unwrap_err();
		assert_eq!(
			error,
			SearchValidationError::MissingRequiredField {
				field: "tenantId".to_string()
			}
		);
	}

	#[test]
	fn test_unsupported_keys_are_sorted() {
		let criteria = SearchCriteria::new()
			.with("zeta", 1)
			.with("city", "X")
			.with("alpha", true);
		assert_eq!(
			criteria.unsupported_keys(&["city"]),
			vec!["alpha".to_string(), "zeta".to_string()]
		);
	}
}
