//! Configurable values that resolve from environment variables or literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read either from an environment variable or used as written
///
/// ```json
/// { "type": "env", "value": "PROPERTY_SERVICE_HOST" }
/// { "type": "plain", "value": "http://property-services:8080" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConfigurableValue {
	/// "env" for an environment variable, "plain" for a literal
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// Environment variable name or the literal value
	pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

impl ConfigurableValue {
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve to the actual value
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Where the value comes from, for startup logs
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => format!("plain value '{}'", self.value),
		}
	}
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "{}", self.value),
		}
	}
}

/// `env:NAME` reads `NAME` from the environment, anything else is a literal
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let host = ConfigurableValue::from_plain("http://property-services:8080");
		assert_eq!(host.value_type, ValueType::Plain);
		assert_eq!(host.resolve().unwrap(), "http://property-services:8080");
		assert_eq!(host.to_string(), "http://property-services:8080");
	}

	#[test]
	fn test_env_value() {
		env::set_var("GIS_TEST_PROPERTY_HOST", "http://from-env:8080");

		let host = ConfigurableValue::from_env("GIS_TEST_PROPERTY_HOST");
		assert_eq!(host.value_type, ValueType::Env);
		assert_eq!(host.resolve().unwrap(), "http://from-env:8080");
		assert_eq!(host.to_string(), "env:GIS_TEST_PROPERTY_HOST");

		env::remove_var("GIS_TEST_PROPERTY_HOST");
	}

	#[test]
	fn test_env_value_not_found() {
		let host = ConfigurableValue::from_env("GIS_TEST_MISSING_HOST");
		assert_eq!(
			host.resolve(),
			Err(ConfigurableValueError::EnvironmentVariableNotFound(
				"GIS_TEST_MISSING_HOST".to_string()
			))
		);
	}

	#[test]
	fn test_from_string_conversion() {
		let plain = ConfigurableValue::from("http://localhost:8280");
		assert_eq!(plain.value_type, ValueType::Plain);

		let env_value = ConfigurableValue::from("env:PROPERTY_HOST".to_string());
		assert_eq!(env_value.value_type, ValueType::Env);
		assert_eq!(env_value.value, "PROPERTY_HOST");
	}

	#[test]
	fn test_serde_shape() {
		let host: ConfigurableValue =
			serde_json::from_str(r#"{"type":"env","value":"PROPERTY_HOST"}"#).unwrap();
		assert_eq!(host, ConfigurableValue::from_env("PROPERTY_HOST"));
		assert_eq!(host.description(), "environment variable 'PROPERTY_HOST'");
	}
}
