//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use gis_types::CriteriaPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub logging: LoggingSettings,
	pub environment: EnvironmentSettings,
	pub geoserver: GeoServerSettings,
	pub modules: ModuleSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
	pub rate_limiting: RateLimitSettings,
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: true,
			rate_limiting: RateLimitSettings::default(),
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Rate limiting configuration
///
/// Applied around the make-service, so the budget counts accepted
/// connections rather than individual requests.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
}

impl Default for RateLimitSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			requests_per_minute: 100,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Map server used to render WMS/WFS layer URLs
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeoServerSettings {
	pub base_url: String,
}

impl Default for GeoServerSettings {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8080/geoserver".to_string(),
		}
	}
}

/// Per-module provider settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ModuleSettings {
	pub property: PropertyModuleSettings,
}

/// Property registry connection
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PropertyModuleSettings {
	pub enabled: bool,
	/// Scheme and authority of the property service
	pub host: ConfigurableValue,
	pub search_path: String,
	pub timeout_ms: u64,
	/// How unknown search criteria keys are treated
	pub criteria_policy: CriteriaPolicy,
}

impl Default for PropertyModuleSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			host: ConfigurableValue::from_plain("http://localhost:8280"),
			search_path: "/property-services/property/_search".to_string(),
			timeout_ms: 30_000,
			criteria_policy: CriteriaPolicy::Warn,
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
	#[error("server.port must be greater than 0")]
	InvalidPort,
	#[error("geoserver.base_url must not be empty")]
	MissingGeoServerUrl,
	#[error("environment.rate_limiting.requests_per_minute must be greater than 0 when rate limiting is enabled")]
	InvalidRateLimit,
	#[error("modules.{module}.timeout_ms must be greater than 0")]
	InvalidTimeout { module: String },
	#[error("modules.{module}.search_path must not be empty")]
	MissingSearchPath { module: String },
	#[error("modules.{module}.host: {source}")]
	UnresolvedHost {
		module: String,
		source: ConfigurableValueError,
	},
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Resolve the property service host
	pub fn property_host(&self) -> Result<String, ConfigValidationError> {
		self.modules
			.property
			.host
			.resolve()
			.map_err(|source| ConfigValidationError::UnresolvedHost {
				module: gis_types::modules::PROPERTY.to_string(),
				source,
			})
	}

	/// Check the settings before the server is built
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.server.port == 0 {
			return Err(ConfigValidationError::InvalidPort);
		}
		if self.geoserver.base_url.trim().is_empty() {
			return Err(ConfigValidationError::MissingGeoServerUrl);
		}
		let rate_limiting = &self.environment.rate_limiting;
		if rate_limiting.enabled && rate_limiting.requests_per_minute == 0 {
			return Err(ConfigValidationError::InvalidRateLimit);
		}

		let property = &self.modules.property;
		if property.enabled {
			let module = gis_types::modules::PROPERTY.to_string();
			if property.timeout_ms == 0 {
				return Err(ConfigValidationError::InvalidTimeout { module });
			}
			if property.search_path.trim().is_empty() {
				return Err(ConfigValidationError::MissingSearchPath { module });
			}
			self.property_host()?;
		}

		Ok(())
	}
}
