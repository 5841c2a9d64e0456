//! Search response assembly

use gis_types::{
	ResponseFormat, ResponseInfo, SearchOutput, SearchRequest, SearchResponse, SpatialEntity,
};
use tracing::debug;

use crate::feature_builder::build_feature_collection;
use crate::layer_urls::LayerUrlBuilder;

/// Shapes fetched entities into the response format requested by the caller
#[derive(Debug, Clone, Default)]
pub struct ResponseAssembler {
	layer_urls: LayerUrlBuilder,
}

impl ResponseAssembler {
	pub fn new(layer_urls: LayerUrlBuilder) -> Self {
		Self { layer_urls }
	}

	pub fn layer_urls(&self) -> &LayerUrlBuilder {
		&self.layer_urls
	}

	/// Build the response for a request
	///
	/// Output is only rendered when geometry was requested and at least one
	/// entity was fetched; `total_count` is reported either way.
	pub fn assemble(
		&self,
		request: &SearchRequest,
		entities: &[SpatialEntity],
		total_count: u64,
	) -> SearchResponse {
		let response_info = ResponseInfo::from_request_info(request.request_info.as_ref(), true);
		let response = SearchResponse::new(&request.module, &request.tenant_id, total_count)
			.with_response_info(response_info);

		if !request.geometry_required || entities.is_empty() {
			debug!(
				"No spatial output rendered. RequestId: {}, geometryRequired: {}, entities: {}",
				request.msg_id(),
				request.geometry_required,
				entities.len()
			);
			return response;
		}

		let output = match request.response_format {
			ResponseFormat::Geojson => SearchOutput::GeoJson(build_feature_collection(entities)),
			ResponseFormat::Wms => SearchOutput::WmsLayerUrl(
				self.layer_urls.wms_url(&request.module, &request.tenant_id),
			),
			ResponseFormat::Wfs => SearchOutput::WfsLayerUrl(
				self.layer_urls.wfs_url(&request.module, &request.tenant_id),
			),
		};

		response.with_output(output)
	}
}
