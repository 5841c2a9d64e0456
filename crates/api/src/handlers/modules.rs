//! Module introspection handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::handlers::common::{error_response, ApiError};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use gis_types::ModuleInfo;

/// Registered modules
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ModulesResponse {
	pub modules: Vec<ModuleInfo>,
	pub total_modules: usize,
	pub timestamp: i64,
}

/// GET /gis/v1/modules - List registered modules
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/gis/v1/modules",
	responses((status = 200, description = "Registered modules", body = ModulesResponse)),
	tag = "modules"
))]
pub async fn get_modules(State(state): State<AppState>) -> Json<ModulesResponse> {
	let modules = state.search_service.modules();
	debug!("Listing {} registered modules", modules.len());

	Json(ModulesResponse {
		total_modules: modules.len(),
		modules,
		timestamp: chrono::Utc::now().timestamp(),
	})
}

/// GET /gis/v1/modules/{module} - Get one module's search parameters
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/gis/v1/modules/{module}",
	params(("module" = String, Path, description = "Module name")),
	responses(
		(status = 200, description = "Module details", body = ModuleInfo),
		(status = 404, description = "Not found", body = ErrorResponse)
	),
	tag = "modules"
))]
pub async fn get_module(
	State(state): State<AppState>,
	Path(module): Path<String>,
) -> Result<Json<ModuleInfo>, ApiError> {
	state
		.search_service
		.module_info(&module)
		.map(Json)
		.ok_or_else(|| {
			error_response(
				StatusCode::NOT_FOUND,
				"MODULE_NOT_FOUND",
				format!(
					"Module {} not found. Supported modules: [{}]",
					module,
					state.search_service.supported_modules().join(", ")
				),
			)
		})
}
