//! Request descriptions handed over by the request-building layer
//!
//! A [`ResourceRequest`] carries the operation and resources exactly as a
//! caller spelled them, so names outside the vocabulary reach the validator
//! and are reported as invalid resources instead of failing deserialization.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RequestError, RequestResult, ValidationError, ValidationResult};
use crate::validation;
use crate::vocabulary::{Operation, Resource};

/// Operation plus the resources requested with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Operation name, e.g. `SearchItems`
    pub operation: String,
    /// Resource names in request order
    #[serde(default)]
    pub resources: Vec<String>,
}

impl ResourceRequest {
    /// Create from typed vocabulary values
    pub fn new(operation: Operation, resources: &[Resource]) -> Self {
        Self {
            operation: operation.as_str().to_string(),
            resources: resources.iter().map(|r| r.as_str().to_string()).collect(),
        }
    }

    /// Create from raw identifiers
    pub fn from_names<S: AsRef<str>>(operation: &str, resources: &[S]) -> Self {
        Self {
            operation: operation.to_string(),
            resources: resources.iter().map(|r| r.as_ref().to_string()).collect(),
        }
    }

    /// Parse a TOML request description
    pub fn from_toml_str(content: &str) -> RequestResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON request description
    pub fn from_json_str(content: &str) -> RequestResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a request description, choosing the format by file extension
    pub fn from_path(path: &Path) -> RequestResult<Self> {
        let format = match RequestFormat::from_path(path) {
            Some(format) => format,
            None => return Err(RequestError::unsupported_format(path)),
        };

        #[cfg(feature = "logging")]
        log::debug!("Loading {:?} request from {}", format, path.display());

        let content = fs::read_to_string(path).map_err(|e| RequestError::io(path, e))?;

        let request = match format {
            RequestFormat::Toml => Self::from_toml_str(&content)?,
            RequestFormat::Json => Self::from_json_str(&content)?,
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "Loaded request for {} with {} resources",
            request.operation,
            request.resources.len()
        );

        Ok(request)
    }

    /// Typed operation, if the name is in the vocabulary
    pub fn operation(&self) -> Option<Operation> {
        Operation::from_name(&self.operation)
    }

    /// Fail-fast validation of the requested resources
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_names(&self.operation, &self.resources)
    }

    /// Every invalid resource in request order
    pub fn invalid_resources(&self) -> Vec<ValidationError> {
        validation::invalid_names(&self.operation, &self.resources)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> RequestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Supported request description formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Json,
}

impl RequestFormat {
    /// Detect format from a `.toml` or `.json` extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn request_file(suffix: &str) -> NamedTempFile {
        tempfile::Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_toml_request() {
        let request = ResourceRequest::from_toml_str(
            r#"
operation = "SearchItems"
resources = ["SearchRefinements", "ItemInfo.Title"]
"#,
        )
        .unwrap();

        assert_eq!(request.operation(), Some(Operation::SearchItems));
        assert_eq!(request.resources.len(), 2);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_json_request_with_unknown_names() {
        let request = ResourceRequest::from_json_str(
            r#"{"operation": "GetItems", "resources": ["ItemInfo.Title", "Nope.Nothing"]}"#,
        )
        .unwrap();

        let error = request.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"Invalid resource "Nope.Nothing" for operation "GetItems""#
        );
    }

    #[test]
    fn test_missing_resources_defaults_to_empty() {
        let request = ResourceRequest::from_toml_str(r#"operation = "GetBrowseNodes""#).unwrap();
        assert!(request.resources.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_operation_is_a_parse_error() {
        assert_matches!(
            ResourceRequest::from_json_str(r#"{"resources": []}"#),
            Err(RequestError::Json(_))
        );
        assert_matches!(
            ResourceRequest::from_toml_str("resources = 3"),
            Err(RequestError::Toml(_))
        );
    }

    #[test]
    fn test_typed_constructor_uses_api_names() {
        let request = ResourceRequest::new(
            Operation::GetVariations,
            &[Resource::VariationSummaryPriceLowestPrice],
        );
        assert_eq!(request.operation, "GetVariations");
        assert_eq!(
            request.resources,
            vec!["VariationSummary.Price.LowestPrice"]
        );
    }

    #[test]
    fn test_invalid_resources_report() {
        let resources = [
            "BrowseNodes.Ancestor",
            "Images.Primary.Small",
            "SearchRefinements",
        ];
        let request = ResourceRequest::from_names("GetBrowseNodes", &resources);
        let errors = request.invalid_resources();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].resource(), "Images.Primary.Small");
        assert_eq!(errors[1].resource(), "SearchRefinements");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = request_file(".toml");
        writeln!(file, "operation = \"GetItems\"").unwrap();
        writeln!(file, "resources = [\"Offers.Listings.Price\"]").unwrap();

        let request = ResourceRequest::from_path(file.path()).unwrap();
        assert_eq!(request.operation(), Some(Operation::GetItems));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = request_file(".JSON");
        write!(
            file,
            r#"{{"operation": "GetItems", "resources": ["VariationSummary.VariationDimension"]}}"#
        )
        .unwrap();

        let request = ResourceRequest::from_path(file.path()).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        assert_matches!(
            ResourceRequest::from_path(file.path()),
            Err(RequestError::UnsupportedFormat { .. })
        );
    }

    #[test]
    fn test_missing_file() {
        assert_matches!(
            ResourceRequest::from_path(Path::new("/nonexistent/paapi/request.toml")),
            Err(RequestError::Io { .. })
        );
    }

    #[test]
    fn test_json_output_round_trips() {
        let request = ResourceRequest::new(Operation::SearchItems, &[Resource::SearchRefinements]);
        let json = request.to_json().unwrap();
        assert_eq!(ResourceRequest::from_json_str(&json).unwrap(), request);
    }
}
