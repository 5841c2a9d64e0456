//! Data provider contract shared by all modules

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, ProviderRegistryError};
pub use traits::DataProvider;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// How a provider treats search criteria keys it does not support
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CriteriaPolicy {
	/// Log a warning per unknown key and continue
	#[default]
	Warn,
	/// Fail validation listing the unknown keys
	Reject,
}

/// Introspection view of a registered module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
	pub module: String,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub criteria_policy: CriteriaPolicy,
	pub supported_search_parameters: Vec<String>,
}

impl ModuleInfo {
	pub fn from_provider(provider: &dyn DataProvider) -> Self {
		Self {
			module: provider.module_name().to_string(),
			name: provider.name().to_string(),
			description: provider.description().map(str::to_string),
			criteria_policy: provider.criteria_policy(),
			supported_search_parameters: provider
				.supported_search_parameters()
				.iter()
				.map(|p| p.to_string())
				.collect(),
		}
	}
}
