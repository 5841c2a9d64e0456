use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{info, warn};

use crate::handlers::common::{error_response, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use gis_service::SearchServiceError;
use gis_types::{SearchRequest, SearchResponse};

/// Search spatial data of one module
///
/// POST /gis/v1/_search
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/gis/v1/_search",
	request_body = SearchRequest,
	responses(
		(status = 200, description = "Search completed", body = SearchResponse),
		(status = 400, description = "Invalid request or unsupported module", body = ErrorResponse),
		(status = 500, description = "Upstream data provider failure", body = ErrorResponse)
	),
	tag = "search"
))]
pub async fn post_search(
	State(state): State<AppState>,
	Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	info!(
		"Received GIS search request. RequestId: {}, Module: {}, Tenant: {}",
		request.msg_id(),
		request.module,
		request.tenant_id
	);

	let response = state
		.search_service
		.search(request)
		.await
		.map_err(|e| match e {
			SearchServiceError::Validation(e) => {
				warn!("Rejected GIS search request: {}", e);
				error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
			},
			SearchServiceError::Upstream(e) => error_response(
				StatusCode::INTERNAL_SERVER_ERROR,
				"UPSTREAM_ERROR",
				format!("Failed to fetch spatial data: {}", e),
			),
		})?;

	info!(
		"Returning GIS search response. Module: {}, TotalCount: {}",
		response.module, response.total_count
	);
	Ok(Json(response))
}
