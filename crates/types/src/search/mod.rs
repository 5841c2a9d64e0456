//! Search request and response models

pub mod errors;
pub mod request;
pub mod request_info;
pub mod response;

pub use errors::SearchValidationError;
pub use request::{ResponseFormat, SearchCriteria, SearchRequest};
pub use request_info::{RequestInfo, ResponseInfo, ResponseStatus};
pub use response::{SearchOutput, SearchResponse};

/// Result type for search validation
pub type SearchValidationResult<T> = Result<T, SearchValidationError>;
