use crate::handlers::common::ErrorResponse;
use crate::handlers::modules::ModulesResponse;
use crate::handlers::{health, modules, search};
use utoipa::OpenApi;

use gis_types::{
	CriteriaPolicy, GeometryType, ModuleInfo, RequestInfo, ResponseFormat, ResponseInfo,
	ResponseStatus, SearchCriteria, SearchRequest, SearchResponse,
};

#[derive(OpenApi)]
#[openapi(
	paths(
		health::health,
		search::post_search,
		modules::get_modules,
		modules::get_module,
	),
	components(schemas(
		SearchRequest, SearchCriteria, ResponseFormat, RequestInfo,
		SearchResponse, ResponseInfo, ResponseStatus,
		ModuleInfo, ModulesResponse, CriteriaPolicy, GeometryType,
		ErrorResponse
	)),
	tags(
		(name = "search", description = "Spatial search across modules"),
		(name = "modules", description = "Registered module introspection"),
		(name = "health", description = "Health endpoint")
	)
)]
pub struct ApiDoc;
