//! Error types for resource validation and request loading

use std::path::PathBuf;
use thiserror::Error;

use crate::vocabulary::{Operation, Resource};

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for request loading operations
pub type RequestResult<T> = Result<T, RequestError>;

/// Validation error types
///
/// Both fields hold the identifiers exactly as the caller supplied them, so a
/// name outside the vocabulary is reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Resource may not be requested by the operation
    #[error("Invalid resource \"{resource}\" for operation \"{operation}\"")]
    InvalidResource { resource: String, operation: String },
}

impl ValidationError {
    /// Create invalid resource error from typed vocabulary values
    pub fn invalid_resource(resource: Resource, operation: Operation) -> Self {
        Self::invalid_resource_name(resource.as_str(), operation.as_str())
    }

    /// Create invalid resource error from raw identifiers
    pub fn invalid_resource_name(resource: &str, operation: &str) -> Self {
        Self::InvalidResource {
            resource: resource.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Offending resource identifier
    pub fn resource(&self) -> &str {
        match self {
            Self::InvalidResource { resource, .. } => resource,
        }
    }

    /// Operation identifier the resource was checked against
    pub fn operation(&self) -> &str {
        match self {
            Self::InvalidResource { operation, .. } => operation,
        }
    }

    /// Stable error code for reports
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidResource { .. } => "PA001",
        }
    }

    /// Validation failures are caused by the request shape; retrying never helps
    pub fn is_retriable(&self) -> bool {
        false
    }

    /// Get recommended action
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Self::InvalidResource { .. } => {
                "Remove the resource or choose an operation that supports it"
            }
        }
    }
}

/// A name outside the resource or operation vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} \"{name}\"")]
pub struct UnknownNameError {
    kind: &'static str,
    name: String,
}

impl UnknownNameError {
    /// Create error for `name` missing from the `kind` vocabulary
    pub fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    /// Vocabulary the name was looked up in ("resource" or "operation")
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The unrecognized name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Request description loading errors
#[derive(Debug, Error)]
pub enum RequestError {
    /// Request file could not be read
    #[error("Failed to read request file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Request is not valid TOML
    #[error("Invalid TOML request: {0}")]
    Toml(#[from] toml::de::Error),

    /// Request is not valid JSON
    #[error("Invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error(
        "Unsupported request format for {}: expected .toml or .json",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },
}

impl RequestError {
    /// Create I/O error for a request path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_resource_message_format() {
        let error = ValidationError::invalid_resource(
            Resource::SearchRefinements,
            Operation::GetBrowseNodes,
        );
        assert_eq!(
            error.to_string(),
            "Invalid resource \"SearchRefinements\" for operation \"GetBrowseNodes\""
        );
    }

    #[test]
    fn test_invalid_resource_uses_api_names() {
        let error = ValidationError::invalid_resource(
            Resource::VariationSummaryPriceHighestPrice,
            Operation::GetItems,
        );
        assert_eq!(error.resource(), "VariationSummary.Price.HighestPrice");
        assert_eq!(error.operation(), "GetItems");
        assert_eq!(error.error_code(), "PA001");
        assert!(!error.is_retriable());
    }

    #[test]
    fn test_raw_names_are_reported_verbatim() {
        let error = ValidationError::invalid_resource_name("Bogus.Thing", "FlyToMoon");
        assert_eq!(
            error.to_string(),
            "Invalid resource \"Bogus.Thing\" for operation \"FlyToMoon\""
        );
    }

    #[test]
    fn test_unknown_name_message() {
        let error = UnknownNameError::new("operation", "ListItems");
        assert_eq!(error.to_string(), "Unknown operation \"ListItems\"");
        assert_eq!(error.kind(), "operation");
    }

    #[test]
    fn test_unsupported_format_message() {
        let error = RequestError::unsupported_format("request.yaml");
        assert_eq!(
            error.to_string(),
            "Unsupported request format for request.yaml: expected .toml or .json"
        );
    }
}
