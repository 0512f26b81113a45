//! # PA-API Core
//!
//! Resource/operation compatibility checks for Product Advertising API 5.0
//! requests. The request-building layer of a client calls [`validate`] (or
//! [`Operation::validate`]) before issuing a request; an invalid combination
//! surfaces as [`ValidationError::InvalidResource`] without any network call.
//!
//! ```
//! use paapi_core::{validate, Operation, Resource};
//!
//! assert!(validate(Operation::SearchItems, &[Resource::SearchRefinements]).is_ok());
//!
//! let error = validate(Operation::GetBrowseNodes, &[Resource::SearchRefinements]).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     r#"Invalid resource "SearchRefinements" for operation "GetBrowseNodes""#
//! );
//! ```

// Internal modules
pub mod compatibility;
pub mod error;
pub mod request;
pub mod validation;
pub mod vocabulary;

// Re-export key types for library consumers
pub use compatibility::CompatibilityTable;
pub use error::{RequestError, UnknownNameError, ValidationError, ValidationResult};
pub use request::{RequestFormat, ResourceRequest};
pub use validation::{invalid_names, invalid_resources, validate, validate_names};
pub use vocabulary::{Operation, Resource};
