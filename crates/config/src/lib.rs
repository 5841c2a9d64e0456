//! GIS Configuration
//!
//! Configuration management and startup utilities for the GIS Aggregator.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, CONFIG_PATH_ENV};
pub use settings::{
	ConfigValidationError, EnvironmentProfile, EnvironmentSettings, GeoServerSettings, LogFormat,
	LoggingSettings, ModuleSettings, PropertyModuleSettings, RateLimitSettings, ServerSettings,
	Settings,
};
pub use startup_logger::{
	log_module_configuration, log_service_info, log_service_shutdown, log_startup_complete,
};
