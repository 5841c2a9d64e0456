//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};

/// Environment variable overriding the configuration file path
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Default configuration file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Load configuration from the config file
///
/// The file is optional; sections it omits fall back to their defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
	let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from an explicit path (extension optional)
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.build()?;

	s.try_deserialize()
}
