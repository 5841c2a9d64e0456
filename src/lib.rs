//! GIS Aggregator Library
//!
//! Spatial search façade over module data providers: routes a search to the
//! provider of its module and renders the result as GeoJSON or as a WMS/WFS
//! layer URL.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types
pub use gis_types::{
	geojson,
	serde_json,
	CriteriaPolicy,
	DataProvider,
	Geometry,
	GeometryType,
	ModuleInfo,
	ProviderError,
	RequestInfo,
	ResponseFormat,
	SearchCriteria,
	SearchRequest,
	SearchResponse,
	SearchValidationError,
	SpatialEntity,
};

// Service layer
pub use gis_service::{
	LayerUrlBuilder, ResponseAssembler, SearchService, SearchServiceError, SearchServiceTrait,
};

// API layer
pub use gis_api::{create_router, AppState};

// Providers
pub use gis_adapters::{PropertyProvider, PropertyProviderConfig, ProviderRegistry};

// Config
pub use gis_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod types {
	pub use gis_types::*;
}

pub mod config {
	pub use gis_config::*;
}

pub mod adapters {
	pub use gis_adapters::*;
}

pub mod api {
	pub use gis_api::*;
}

pub mod service {
	pub use gis_service::*;
}

pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the GIS aggregator
#[derive(Default)]
pub struct GisAggregatorBuilder {
	settings: Option<Settings>,
	providers: Vec<Box<dyn DataProvider>>,
}

impl GisAggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Register an additional data provider
	///
	/// Its module name must not collide with a configured module; collisions
	/// fail at [`GisAggregatorBuilder::start`].
	pub fn with_provider(mut self, provider: Box<dyn DataProvider>) -> Self {
		self.providers.push(provider);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Build the provider registry from settings and custom providers
	fn build_registry(
		providers: Vec<Box<dyn DataProvider>>,
		settings: &Settings,
	) -> Result<ProviderRegistry, Box<dyn std::error::Error>> {
		let mut registry = ProviderRegistry::new();

		let property = &settings.modules.property;
		if property.enabled {
			let config = PropertyProviderConfig {
				host: settings.property_host()?,
				search_path: property.search_path.clone(),
				timeout_ms: property.timeout_ms,
				criteria_policy: property.criteria_policy,
			};
			registry.register(Box::new(PropertyProvider::new(config)?))?;
		}

		for provider in providers {
			let module = provider.module_name().to_string();
			registry
				.register(provider)
				.map_err(|e| format!("Failed to register provider '{}': {}", module, e))?;
		}

		Ok(registry)
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		use gis_config::LogFormat;

		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		let result = match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
		};
		result.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the search service and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let registry = Self::build_registry(self.providers, &settings)?;
		info!(
			"Initialized {} data provider(s): [{}]",
			registry.len(),
			registry.module_names().join(", ")
		);

		let assembler = ResponseAssembler::new(LayerUrlBuilder::new(
			settings.geoserver.base_url.as_str(),
		));
		let search_service = SearchService::new(Arc::new(registry), assembler);

		let app_state = AppState::new(Arc::new(search_service) as Arc<dyn SearchServiceTrait>);
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server
	///
	/// Loads `.env` and the configuration file (unless settings were
	/// provided), initializes tracing, then binds and serves until Ctrl+C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		gis_config::log_module_configuration(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		let rate_cfg = settings.environment.rate_limiting.clone();
		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /gis/v1/_search");
		info!("  GET  /gis/v1/modules");
		info!("  GET  /gis/v1/modules/{{module}}");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		// Global rate limit at the make_service level: counts connections, not requests
		if rate_cfg.enabled {
			use std::time::Duration;
			use tower::limit::RateLimitLayer;
			use tower::ServiceBuilder;
			let make_svc = ServiceBuilder::new()
				.layer(RateLimitLayer::new(
					rate_cfg.requests_per_minute as u64,
					Duration::from_secs(60),
				))
				.service(app.into_make_service());
			axum::serve(listener, make_svc)
				.with_graceful_shutdown(shutdown_signal())
				.await?;
		} else {
			axum::serve(listener, app)
				.with_graceful_shutdown(shutdown_signal())
				.await?;
		}

		Ok(())
	}
}

async fn shutdown_signal() {
	if tokio::signal::ctrl_c().await.is_ok() {
		gis_config::log_service_shutdown();
	}
}
