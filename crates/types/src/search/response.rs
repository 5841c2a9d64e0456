//! Search response model

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::ResponseInfo;

/// Rendered spatial output; at most one is present per response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutput {
	/// GeoJSON feature collection of the fetched entities
	#[serde(rename = "geoJsonData")]
	GeoJson(FeatureCollection),
	/// WMS GetMap reference URL
	#[serde(rename = "wmsLayerUrl")]
	WmsLayerUrl(String),
	/// WFS GetFeature reference URL
	#[serde(rename = "wfsLayerUrl")]
	WfsLayerUrl(String),
}

/// API response body for the spatial search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	#[serde(rename = "ResponseInfo", skip_serializing_if = "Option::is_none", default)]
	pub response_info: Option<ResponseInfo>,
	pub module: String,
	pub tenant_id: String,
	/// Number of entities matching the search, independent of the output
	pub total_count: u64,
	/// Serialized inline as `geoJsonData`, `wmsLayerUrl` or `wfsLayerUrl`
	#[serde(flatten, skip_serializing_if = "Option::is_none", default)]
	#[cfg_attr(feature = "openapi", schema(ignore))]
	pub output: Option<SearchOutput>,
}

impl SearchResponse {
	pub fn new(module: impl Into<String>, tenant_id: impl Into<String>, total_count: u64) -> Self {
		Self {
			response_info: None,
			module: module.into(),
			tenant_id: tenant_id.into(),
			total_count,
			output: None,
		}
	}

	pub fn with_output(mut self, output: SearchOutput) -> Self {
		self.output = Some(output);
		self
	}

	pub fn with_response_info(mut self, response_info: ResponseInfo) -> Self {
		self.response_info = Some(response_info);
		self
	}

	pub fn geo_json_data(&self) -> Option<&FeatureCollection> {
		match &self.output {
			Some(SearchOutput::GeoJson(collection)) => Some(collection),
			_ => None,
		}
	}

	pub fn wms_layer_url(&self) -> Option<&str> {
		match &self.output {
			Some(SearchOutput::WmsLayerUrl(url)) => Some(url),
			_ => None,
		}
	}

	pub fn wfs_layer_url(&self) -> Option<&str> {
		match &self.output {
			Some(SearchOutput::WfsLayerUrl(url)) => Some(url),
			_ => None,
		}
	}
}
