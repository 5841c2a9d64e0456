//! Test utilities for creating common test objects
//!
//! Provides an in-memory [`DataProvider`] and entity fixtures shared by the
//! unit and integration tests of the workspace crates.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::entities::SpatialEntity;
use crate::providers::{CriteriaPolicy, DataProvider, ProviderError, ProviderResult};
use crate::search::SearchRequest;

const DEFAULT_PARAMETERS: &[&str] = &["city", "locality", "limit"];

/// In-memory provider returning a fixed set of entities
///
/// Tracks how many times it was fetched from and can simulate an upstream
/// outage.
#[derive(Debug, Clone)]
pub struct StaticProvider {
	module: String,
	entities: Vec<SpatialEntity>,
	policy: CriteriaPolicy,
	should_fail: bool,
	fetch_calls: Arc<AtomicUsize>,
}

impl StaticProvider {
	pub fn new(module: &str, entities: Vec<SpatialEntity>) -> Self {
		Self {
			module: module.to_string(),
			entities,
			policy: CriteriaPolicy::Warn,
			should_fail: false,
			fetch_calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Provider whose fetches always fail with an upstream status error
	pub fn failing(module: &str) -> Self {
		Self {
			should_fail: true,
			..Self::new(module, Vec::new())
		}
	}

	pub fn with_policy(mut self, policy: CriteriaPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Number of fetches performed so far (counts included)
	pub fn fetch_count(&self) -> usize {
		self.fetch_calls.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl DataProvider for StaticProvider {
	fn module_name(&self) -> &str {
		&self.module
	}

	fn supported_search_parameters(&self) -> &[&str] {
		DEFAULT_PARAMETERS
	}

	fn criteria_policy(&self) -> CriteriaPolicy {
		self.policy
	}

	async fn fetch_spatial_data(
		&self,
		_request: &SearchRequest,
	) -> ProviderResult<Vec<SpatialEntity>> {
		self.fetch_calls.fetch_add(1, Ordering::Relaxed);
		if self.should_fail {
			return Err(ProviderError::from_http_failure(503));
		}
		Ok(self.entities.clone())
	}
}

/// Common entity fixtures
pub struct TestEntities;

impl TestEntities {
	/// Entity with a WKT point
	pub fn point(id: &str, x: f64, y: f64) -> SpatialEntity {
		SpatialEntity::builder(id)
			.property("propertyId", id)
			.wkt(format!("POINT({} {})", x, y))
			.build()
	}

	/// Entity with a closed square WKT polygon
	pub fn square(id: &str) -> SpatialEntity {
		SpatialEntity::builder(id)
			.property("propertyId", id)
			.wkt("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))")
			.build()
	}

	/// Entity with only a latitude/longitude pair
	pub fn located(id: &str, latitude: f64, longitude: f64) -> SpatialEntity {
		SpatialEntity::builder(id)
			.property("propertyId", id)
			.coordinates(latitude, longitude)
			.build()
	}

	/// Entity without any geometry source
	pub fn without_geometry(id: &str) -> SpatialEntity {
		SpatialEntity::builder(id).property("propertyId", id).build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_static_provider_counts_fetches() {
		let provider = StaticProvider::new("property", vec![TestEntities::square("PT-1")]);
		let request = SearchRequest::new("property", "pg.citya");

		assert_eq!(provider.fetch_spatial_data(&request).await.unwrap().len(), 1);
		assert_eq!(provider.get_total_count(&request).await.unwrap(), 1);
		assert_eq!(provider.fetch_count(), 2);
	}

	#[tokio::test]
	async fn test_failing_provider() {
		let provider = StaticProvider::failing("property");
		let request = SearchRequest::new("property", "pg.citya");

		let error = provider.fetch_spatial_data(&request).await.unwrap_err();
		assert_eq!(error.status_code(), Some(503));
	}
}
