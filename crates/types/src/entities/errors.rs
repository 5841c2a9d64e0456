//! Error raised while normalizing a single record or feature

use thiserror::Error;

/// A single malformed record or geometry
///
/// Always recovered locally: the offending record is dropped and logged,
/// and the rest of the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to transform record {entity_id}: {reason}")]
pub struct RecordTransformError {
	pub entity_id: String,
	pub reason: String,
}

impl RecordTransformError {
	pub fn new(entity_id: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			entity_id: entity_id.into(),
			reason: reason.into(),
		}
	}

	/// Error for a record whose identifier could not be determined
	pub fn unidentified(reason: impl Into<String>) -> Self {
		Self::new("<unknown>", reason)
	}
}
