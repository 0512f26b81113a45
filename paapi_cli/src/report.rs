//! # Validation Report Types
//!
//! Serializable results of a `validate` run, rendered as text or JSON.

use chrono::{DateTime, Utc};
use paapi_core::{ResourceRequest, ValidationError};
use serde::{Deserialize, Serialize};

/// One resource the operation may not request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    pub resource: String,
    pub operation: String,
    pub message: String,
}

impl From<&ValidationError> for Finding {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.error_code().to_string(),
            resource: error.resource().to_string(),
            operation: error.operation().to_string(),
            message: error.to_string(),
        }
    }
}

/// Outcome of validating one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub operation: String,
    pub resources: Vec<String>,
    pub valid: bool,
    /// Whether every invalid resource was collected or only the first
    pub report_all: bool,
    pub findings: Vec<Finding>,
    pub checked_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Validate `request`, fail-fast unless `report_all` is set
    pub fn from_request(request: &ResourceRequest, report_all: bool) -> Self {
        let errors = if report_all {
            request.invalid_resources()
        } else {
            request.validate().err().into_iter().collect()
        };

        Self {
            operation: request.operation.clone(),
            resources: request.resources.clone(),
            valid: errors.is_empty(),
            report_all,
            findings: errors.iter().map(Finding::from).collect(),
            checked_at: Utc::now(),
        }
    }

    /// One-line outcome, `OK: ...` or `FAIL: ...`
    pub fn summary(&self) -> String {
        if self.valid {
            format!(
                "OK: {} resource(s) valid for operation \"{}\"",
                self.resources.len(),
                self.operation
            )
        } else {
            format!(
                "FAIL: {} invalid resource(s) for operation \"{}\"",
                self.findings.len(),
                self.operation
            )
        }
    }

    /// Summary followed by one indented line per finding
    pub fn to_text(&self) -> String {
        let mut out = self.summary();
        for finding in &self.findings {
            out.push_str(&format!("\n  [{}] {}", finding.code, finding.message));
        }
        out
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(operation: &str, resources: &[&str]) -> ResourceRequest {
        ResourceRequest::from_names(operation, resources)
    }

    #[test]
    fn test_valid_report() {
        let report = ValidationReport::from_request(
            &request("SearchItems", &["SearchRefinements", "ItemInfo.Title"]),
            false,
        );
        assert!(report.valid);
        assert!(report.findings.is_empty());
        assert_eq!(
            report.to_text(),
            "OK: 2 resource(s) valid for operation \"SearchItems\""
        );
    }

    #[test]
    fn test_fail_fast_report_has_one_finding() {
        let invalid = ["SearchRefinements", "Images.Primary.Small"];
        let report = ValidationReport::from_request(&request("GetBrowseNodes", &invalid), false);
        assert!(!report.valid);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].resource, "SearchRefinements");
        assert_eq!(
            report.to_text(),
            "FAIL: 1 invalid resource(s) for operation \"GetBrowseNodes\"\n  \
             [PA001] Invalid resource \"SearchRefinements\" for operation \"GetBrowseNodes\""
        );
    }

    #[test]
    fn test_full_report_collects_everything() {
        let invalid = ["SearchRefinements", "Images.Primary.Small"];
        let report = ValidationReport::from_request(&request("GetBrowseNodes", &invalid), true);
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[1].resource, "Images.Primary.Small");
    }

    #[test]
    fn test_json_report_fields() {
        let report =
            ValidationReport::from_request(&request("GetItems", &["SearchRefinements"]), false);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["valid"], false);
        assert_eq!(value["operation"], "GetItems");
        assert_eq!(value["findings"][0]["code"], "PA001");
        assert_eq!(value["findings"][0]["resource"], "SearchRefinements");
        assert!(value["checked_at"].is_string());
    }
}
