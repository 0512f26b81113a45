//! Resource/operation validation
//!
//! [`validate`] and [`validate_names`] are fail-fast: the scan runs in input
//! order and stops at the first resource the operation may not request.
//! [`invalid_resources`] and [`invalid_names`] keep scanning and report every
//! offending entry; their first element is always the error the fail-fast
//! form returns.
//!
//! Validation never logs and reads only the immutable global table.

use crate::compatibility::CompatibilityTable;
use crate::error::{ValidationError, ValidationResult};
use crate::vocabulary::{Operation, Resource};

/// Check that `operation` may request every resource in `resources`
pub fn validate(operation: Operation, resources: &[Resource]) -> ValidationResult<()> {
    let table = CompatibilityTable::global();

    match resources
        .iter()
        .find(|resource| !table.allows(**resource, operation))
    {
        Some(resource) => Err(ValidationError::invalid_resource(*resource, operation)),
        None => Ok(()),
    }
}

/// Check raw operation and resource identifiers
///
/// Names outside the vocabulary are not rejected separately: an unknown
/// resource allows no operation, and an unknown operation is allowed by no
/// resource. Both surface as [`ValidationError::InvalidResource`].
pub fn validate_names<S: AsRef<str>>(operation: &str, resources: &[S]) -> ValidationResult<()> {
    match resources
        .iter()
        .map(|resource| resource.as_ref())
        .find(|resource| !name_allows(resource, operation))
    {
        Some(resource) => Err(ValidationError::invalid_resource_name(resource, operation)),
        None => Ok(()),
    }
}

/// Every resource `operation` may not request, in input order
///
/// Duplicates are reported once per occurrence.
pub fn invalid_resources(operation: Operation, resources: &[Resource]) -> Vec<ValidationError> {
    let table = CompatibilityTable::global();

    resources
        .iter()
        .filter(|resource| !table.allows(**resource, operation))
        .map(|resource| ValidationError::invalid_resource(*resource, operation))
        .collect()
}

/// Every invalid raw resource identifier for `operation`, in input order
pub fn invalid_names<S: AsRef<str>>(operation: &str, resources: &[S]) -> Vec<ValidationError> {
    resources
        .iter()
        .map(|resource| resource.as_ref())
        .filter(|resource| !name_allows(resource, operation))
        .map(|resource| ValidationError::invalid_resource_name(resource, operation))
        .collect()
}

fn name_allows(resource: &str, operation: &str) -> bool {
    CompatibilityTable::global()
        .allowed_operations_by_name(resource)
        .iter()
        .any(|allowed| allowed.as_str() == operation)
}
