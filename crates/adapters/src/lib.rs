//! GIS data providers
//!
//! Module-specific providers for the GIS aggregator, and the registry that
//! maps module names to them.

pub mod client;
pub mod property_adapter;

use std::collections::HashMap;
use std::sync::Arc;

pub use client::{build_client, ClientConfig};
pub use gis_types::{DataProvider, ProviderError, ProviderRegistryError, ProviderResult};
pub use property_adapter::{PropertyProvider, PropertyProviderConfig, PROPERTY_SEARCH_PARAMETERS};

use tracing::{debug, info};

/// Registry of data providers keyed by module name
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
	providers: HashMap<String, Arc<dyn DataProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry with the built-in providers using default connection settings
	pub fn with_defaults() -> ProviderResult<Self> {
		let mut registry = Self::new();
		let property = PropertyProvider::new(PropertyProviderConfig::default())?;
		registry
			.register(Box::new(property))
			.map_err(|e| ProviderError::Configuration {
				reason: e.to_string(),
			})?;
		Ok(registry)
	}

	/// Register a provider under its module name
	pub fn register(&mut self, provider: Box<dyn DataProvider>) -> Result<(), ProviderRegistryError> {
		self.register_arc(Arc::from(provider))
	}

	pub fn register_arc(&mut self, provider: Arc<dyn DataProvider>) -> Result<(), ProviderRegistryError> {
		let module = provider.module_name().trim().to_string();
		if module.is_empty() {
			return Err(ProviderRegistryError::InvalidModuleName {
				module: provider.module_name().to_string(),
			});
		}
		if self.providers.contains_key(&module) {
			return Err(ProviderRegistryError::AlreadyRegistered { module });
		}

		info!(
			"Registered data provider for module '{}' ({} search parameters)",
			module,
			provider.supported_search_parameters().len()
		);
		self.providers.insert(module, provider);
		Ok(())
	}

	/// Look up the provider for a module
	pub fn get(&self, module: &str) -> Option<Arc<dyn DataProvider>> {
		let provider = self.providers.get(module).cloned();
		if provider.is_none() {
			debug!("No data provider registered for module '{}'", module);
		}
		provider
	}

	pub fn contains(&self, module: &str) -> bool {
		self.providers.contains_key(module)
	}

	/// Registered module names, sorted
	pub fn module_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.providers.keys().cloned().collect();
		names.sort();
		names
	}

	/// All providers, sorted by module name
	pub fn get_all(&self) -> Vec<Arc<dyn DataProvider>> {
		let mut providers: Vec<Arc<dyn DataProvider>> = self.providers.values().cloned().collect();
		providers.sort_by(|a, b| a.module_name().cmp(b.module_name()));
		providers
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use gis_types::test_utils::StaticProvider;

	#[test]
	fn test_register_and_lookup() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(Box::new(StaticProvider::new("water", vec![])))
			.unwrap();
		registry
			.register(Box::new(StaticProvider::new("property", vec![])))
			.unwrap();

		assert_eq!(registry.len(), 2);
		assert!(registry.get("property").is_some());
		assert!(registry.get("sewerage").is_none());
		assert_eq!(registry.module_names(), vec!["property", "water"]);

		let modules: Vec<_> = registry
			.get_all()
			.iter()
			.map(|p| p.module_name().to_string())
			.collect();
		assert_eq!(modules, vec!["property", "water"]);
	}

	#[test]
	fn test_duplicate_module_rejected() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(Box::new(StaticProvider::new("property", vec![])))
			.unwrap();

		let result = registry.register(Box::new(StaticProvider::new("property", vec![])));
		assert_eq!(
			result,
			Err(ProviderRegistryError::AlreadyRegistered {
				module: "property".to_string()
			})
		);
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn test_blank_module_name_rejected() {
		let mut registry = ProviderRegistry::new();
		let result = registry.register(Box::new(StaticProvider::new("  ", vec![])));
		assert!(matches!(
			result,
			Err(ProviderRegistryError::InvalidModuleName { .. })
		));
		assert!(registry.is_empty());
	}

	#[test]
	fn test_with_defaults_registers_property() {
		let registry = ProviderRegistry::with_defaults().unwrap();
		assert_eq!(registry.module_names(), vec!["property"]);
	}
}
