//! Validation errors for search requests

use thiserror::Error;

/// Caller-correctable search errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Module not supported: {module}. Supported modules: [{}]", .supported.join(", "))]
	UnsupportedModule {
		module: String,
		supported: Vec<String>,
	},

	#[error("Unsupported search parameters for module {module}: [{}]", .keys.join(", "))]
	UnsupportedCriteria { module: String, keys: Vec<String> },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unsupported_module_lists_registered_names() {
		let error = SearchValidationError::UnsupportedModule {
			module: "water".to_string(),
			supported: vec!["property".to_string(), "trade".to_string()],
		};
		assert_eq!(
			error.to_string(),
			"Module not supported: water. Supported modules: [property, trade]"
		);
	}

	#[test]
	fn test_unsupported_criteria_message() {
		let error = SearchValidationError::UnsupportedCriteria {
			module: "property".to_string(),
			keys: vec!["colour".to_string(), "size".to_string()],
		};
		assert!(error.to_string().contains("property"));
		assert!(error.to_string().contains("colour, size"));
	}
}
