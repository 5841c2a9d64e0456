//! Spatial search dispatch
//!
//! Routes a search request to the provider registered for its module, then
//! hands the fetched entities to the response assembler.

use std::sync::Arc;

use async_trait::async_trait;
use gis_adapters::ProviderRegistry;
use gis_types::{
	ModuleInfo, ProviderError, SearchRequest, SearchResponse, SearchValidationError,
};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::response::ResponseAssembler;

#[derive(Debug, Error)]
pub enum SearchServiceError {
	#[error("{0}")]
	Validation(#[from] SearchValidationError),
	#[error("Failed to fetch spatial data: {0}")]
	Upstream(#[from] ProviderError),
}

impl SearchServiceError {
	pub fn is_validation(&self) -> bool {
		matches!(self, SearchServiceError::Validation(_))
	}
}

/// Trait for the search service, mockable in handler tests
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SearchServiceTrait: Send + Sync {
	/// Validate, dispatch and assemble a spatial search
	async fn search(&self, request: SearchRequest) -> Result<SearchResponse, SearchServiceError>;

	/// Registered module names, sorted
	fn supported_modules(&self) -> Vec<String>;

	/// Introspection metadata for all registered modules
	fn modules(&self) -> Vec<ModuleInfo>;

	/// Introspection metadata for one module
	fn module_info(&self, module: &str) -> Option<ModuleInfo>;
}

#[derive(Debug, Clone)]
pub struct SearchService {
	registry: Arc<ProviderRegistry>,
	assembler: ResponseAssembler,
}

impl SearchService {
	pub fn new(registry: Arc<ProviderRegistry>, assembler: ResponseAssembler) -> Self {
		Self {
			registry,
			assembler,
		}
	}

	pub fn registry(&self) -> &ProviderRegistry {
		&self.registry
	}
}

#[async_trait]
impl SearchServiceTrait for SearchService {
	async fn search(&self, request: SearchRequest) -> Result<SearchResponse, SearchServiceError> {
		info!(
			"GIS search started. RequestId: {}, Module: {}, Tenant: {}, Format: {}",
			request.msg_id(),
			request.module,
			request.tenant_id,
			request.response_format
		);

		request.validate()?;

		let provider = self.registry.get(&request.module).ok_or_else(|| {
			SearchValidationError::UnsupportedModule {
				module: request.module.clone(),
				supported: self.registry.module_names(),
			}
		})?;

		provider.validate_search_criteria(&request.search_criteria)?;

		let entities = provider
			.fetch_spatial_data(&request)
			.await
			.inspect_err(|e| {
				error!(
					"Spatial data fetch failed. RequestId: {}, Module: {}, Error: {}",
					request.msg_id(),
					request.module,
					e
				)
			})?;
		debug!(
			"Fetched {} entities. RequestId: {}",
			entities.len(),
			request.msg_id()
		);

		let total_count = provider.get_total_count(&request).await?;
		let response = self.assembler.assemble(&request, &entities, total_count);

		info!(
			"GIS search completed. RequestId: {}, Module: {}, TotalCount: {}",
			request.msg_id(),
			request.module,
			total_count
		);
		Ok(response)
	}

	fn supported_modules(&self) -> Vec<String> {
		self.registry.module_names()
	}

	fn modules(&self) -> Vec<ModuleInfo> {
		self.registry
			.get_all()
			.iter()
			.map(|provider| ModuleInfo::from_provider(provider.as_ref()))
			.collect()
	}

	fn module_info(&self, module: &str) -> Option<ModuleInfo> {
		self.registry
			.get(module)
			.map(|provider| ModuleInfo::from_provider(provider.as_ref()))
	}
}
