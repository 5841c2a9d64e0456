//! Core data provider trait for module implementations

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{info, warn};

use super::{CriteriaPolicy, ProviderResult};
use crate::entities::SpatialEntity;
use crate::search::{SearchCriteria, SearchRequest, SearchValidationError, SearchValidationResult};

/// Core trait for module data providers
///
/// One implementation exists per business module. Providers are registered
/// once at startup and shared read-only between requests, so implementations
/// must not keep per-request mutable state.
#[async_trait]
pub trait DataProvider: Send + Sync + Debug {
	/// Routing key matched against [`SearchRequest::module`]
	fn module_name(&self) -> &str;

	/// Search parameters this module understands
	///
	/// Used for validation, for filtering the outgoing upstream call and
	/// for introspection. Not enforced as a strict schema.
	fn supported_search_parameters(&self) -> &[&str];

	/// Policy applied to criteria keys outside the supported set
	fn criteria_policy(&self) -> CriteriaPolicy {
		CriteriaPolicy::Warn
	}

	/// Human-readable name for this module
	fn name(&self) -> &str {
		self.module_name()
	}

	fn description(&self) -> Option<&str> {
		None
	}

	/// Validate search criteria against the supported parameters
	///
	/// Empty criteria mean "match all" and always pass. Unknown keys are
	/// logged under [`CriteriaPolicy::Warn`] and rejected under
	/// [`CriteriaPolicy::Reject`].
	fn validate_search_criteria(&self, criteria: &SearchCriteria) -> SearchValidationResult<()> {
		if criteria.is_empty() {
			info!(
				"Search criteria is empty for module {}, matching all records",
				self.module_name()
			);
			return Ok(());
		}

		let unsupported = criteria.unsupported_keys(self.supported_search_parameters());
		if unsupported.is_empty() {
			return Ok(());
		}

		match self.criteria_policy() {
			CriteriaPolicy::Warn => {
				for key in &unsupported {
					warn!(
						"Unsupported search parameter for {} module: {}",
						self.module_name(),
						key
					);
				}
				Ok(())
			},
			CriteriaPolicy::Reject => Err(SearchValidationError::UnsupportedCriteria {
				module: self.module_name().to_string(),
				keys: unsupported,
			}),
		}
	}

	/// Fetch and normalize the records matching the request
	///
	/// A transport failure or malformed payload is an error. A single
	/// malformed record is logged and skipped.
	async fn fetch_spatial_data(&self, request: &SearchRequest) -> ProviderResult<Vec<SpatialEntity>>;

	/// Total number of records matching the request
	///
	/// The default performs a full fetch and counts the result, so it is
	/// never cheaper than [`DataProvider::fetch_spatial_data`].
	async fn get_total_count(&self, request: &SearchRequest) -> ProviderResult<u64> {
		let entities = self.fetch_spatial_data(request).await?;
		Ok(entities.len() as u64)
	}
}
