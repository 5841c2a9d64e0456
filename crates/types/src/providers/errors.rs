//! Error types for data provider operations

use thiserror::Error;

/// Upstream failures while fetching module data
///
/// These abort the search and are surfaced to the caller as service errors;
/// they are never retried.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Configuration error: {reason}")]
	Configuration { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl ProviderError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ProviderError::HttpStatusError { status_code, .. } => Some(*status_code),
			ProviderError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	pub fn invalid_response(reason: impl Into<String>) -> Self {
		Self::InvalidResponse {
			reason: reason.into(),
		}
	}

	/// Create an HTTP failure error from response status with default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}
}

/// Provider registration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderRegistryError {
	#[error("Provider already registered for module: {module}")]
	AlreadyRegistered { module: String },

	#[error("Invalid module name: '{module}'")]
	InvalidModuleName { module: String },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = ProviderError::from_http_failure(503);
		assert_eq!(error.status_code(), Some(503));
		assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");

		let error = ProviderError::from_http_failure(418);
		assert_eq!(error.to_string(), "HTTP 418: HTTP Error 418");

		let error = ProviderError::invalid_response("not json");
		assert_eq!(error.status_code(), None);
		assert_eq!(error.to_string(), "Invalid response format: not json");
	}
}
