use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{get_module, get_modules, health, post_search};
use crate::security::add_security_headers;
use crate::state::AppState;
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Maximum accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(MAX_BODY_BYTES);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let base_router = Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.route("/gis/v1/_search", post(post_search))
		.route("/gis/v1/_search/", post(post_search))
		.route("/gis/v1/modules", get(get_modules))
		.route("/gis/v1/modules/", get(get_modules))
		.route("/gis/v1/modules/{module}", get(get_module))
		.route("/gis/v1/modules/{module}/", get(get_module));

	#[cfg(feature = "openapi")]
	let router = base_router
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

	#[cfg(not(feature = "openapi"))]
	let router = base_router;

	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{to_bytes, Body},
		http::{Request, StatusCode},
	};
	use gis_service::{MockSearchServiceTrait, SearchServiceError};
	use gis_types::{
		geojson::FeatureCollection, CriteriaPolicy, ModuleInfo, ProviderError, SearchOutput,
		SearchResponse, SearchValidationError,
	};
	use serde_json::{json, Value};
	use std::sync::Arc;
	use tower::ServiceExt;

	fn app(mock: MockSearchServiceTrait) -> Router {
		create_router().with_state(AppState::new(Arc::new(mock)))
	}

	fn search_request(body: Value) -> Request<Body> {
		Request::builder()
			.method("POST")
			.uri("/gis/v1/_search")
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.unwrap()
	}

	async fn body_json(response: axum::response::Response) -> Value {
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	fn property_info() -> ModuleInfo {
		ModuleInfo {
			module: "property".to_string(),
			name: "Property Registry".to_string(),
			description: None,
			criteria_policy: CriteriaPolicy::Warn,
			supported_search_parameters: vec!["city".to_string(), "locality".to_string()],
		}
	}

	#[tokio::test]
	async fn test_health() {
		let response = app(MockSearchServiceTrait::new())
			.oneshot(Request::get("/health").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers().get("x-content-type-options").unwrap(),
			"nosniff"
		);
		assert!(response.headers().contains_key("x-request-id"));
	}

	#[tokio::test]
	async fn test_search_success() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_search()
			.withf(|request| request.module == "property" && request.tenant_id == "pg.citya")
			.times(1)
			.returning(|request| {
				Ok(SearchResponse::new(request.module, request.tenant_id, 0).with_output(
					SearchOutput::GeoJson(FeatureCollection {
						bbox: None,
						features: vec![],
						foreign_members: None,
					}),
				))
			});

		let response = app(mock)
			.oneshot(search_request(json!({
				"module": "property",
				"tenantId": "pg.citya",
				"searchCriteria": {"city": "CityA"}
			})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		let body = body_json(response).await;
		assert_eq!(body["totalCount"], json!(0));
		assert_eq!(body["geoJsonData"]["type"], json!("FeatureCollection"));
	}

	#[tokio::test]
	async fn test_search_unknown_module_is_bad_request() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_search().returning(|request| {
			Err(SearchServiceError::Validation(
				SearchValidationError::UnsupportedModule {
					module: request.module,
					supported: vec!["property".to_string()],
				},
			))
		});

		let response = app(mock)
			.oneshot(search_request(json!({"module": "trade", "tenantId": "pg.citya"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		let body = body_json(response).await;
		assert_eq!(body["error"], json!("VALIDATION_ERROR"));
		assert_eq!(
			body["message"],
			json!("Module not supported: trade. Supported modules: [property]")
		);
	}

	#[tokio::test]
	async fn test_search_upstream_failure_is_server_error() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_search().returning(|_| {
			Err(SearchServiceError::Upstream(
				ProviderError::from_http_failure(502),
			))
		});

		let response = app(mock)
			.oneshot(search_request(json!({"module": "property", "tenantId": "pg.citya"})))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
		let body = body_json(response).await;
		assert_eq!(body["error"], json!("UPSTREAM_ERROR"));
	}

	#[tokio::test]
	async fn test_search_rejects_unknown_response_format() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_search().never();

		let response = app(mock)
			.oneshot(search_request(json!({
				"module": "property",
				"tenantId": "pg.citya",
				"responseFormat": "kml"
			})))
			.await
			.unwrap();

		assert!(response.status().is_client_error());
	}

	#[tokio::test]
	async fn test_list_modules() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_modules().returning(|| vec![property_info()]);

		let response = app(mock)
			.oneshot(Request::get("/gis/v1/modules/").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		let body = body_json(response).await;
		assert_eq!(body["totalModules"], json!(1));
		assert_eq!(body["modules"][0]["module"], json!("property"));
		assert_eq!(
			body["modules"][0]["supportedSearchParameters"],
			json!(["city", "locality"])
		);
	}

	#[tokio::test]
	async fn test_get_module() {
		let mut mock = MockSearchServiceTrait::new();
		mock.expect_module_info()
			.returning(|module| (module == "property").then(property_info));
		mock.expect_supported_modules()
			.returning(|| vec!["property".to_string()]);

		let app = app(mock);
		let response = app
			.clone()
			.oneshot(Request::get("/gis/v1/modules/property").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(body_json(response).await["criteriaPolicy"], json!("warn"));

		let response = app
			.oneshot(Request::get("/gis/v1/modules/trade").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert_eq!(body_json(response).await["error"], json!("MODULE_NOT_FOUND"));
	}
}
