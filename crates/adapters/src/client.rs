//! HTTP client construction for upstream module services

use gis_types::{ProviderError, ProviderResult};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Settings for the HTTP client a provider talks to its upstream with
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
	/// Request timeout; the only deadline applied to upstream calls
	pub timeout_ms: u64,
	/// Additional headers sent with every request
	pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			timeout_ms: 30_000,
			headers: HashMap::new(),
		}
	}
}

impl ClientConfig {
	pub fn with_timeout_ms(timeout_ms: u64) -> Self {
		Self {
			timeout_ms,
			..Self::default()
		}
	}
}

/// Build a JSON client with the aggregator's default headers
pub fn build_client(config: &ClientConfig) -> ProviderResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Content-Type", HeaderValue::from_static("application/json"));
	headers.insert("User-Agent", HeaderValue::from_static("GIS-Aggregator/1.0"));

	for (key, value) in &config.headers {
		match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
			(Ok(name), Ok(value)) => {
				headers.insert(name, value);
			},
			_ => warn!("Skipping invalid upstream header: {}", key),
		}
	}

	Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(config.timeout_ms))
		.build()
		.map_err(|e| ProviderError::Configuration {
			reason: format!("Failed to build HTTP client: {}", e),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_client_skips_invalid_headers() {
		let mut config = ClientConfig::with_timeout_ms(1_000);
		config
			.headers
			.insert("X-Tenant".to_string(), "pg".to_string());
		config
			.headers
			.insert("bad header".to_string(), "x".to_string());

		assert!(build_client(&config).is_ok());
	}
}
