//! PA-API 5.0 operations

use crate::compatibility::CompatibilityTable;
use crate::error::ValidationResult;
use crate::validation;

use super::resource::Resource;

vocabulary_enum! {
    /// An action exposed by the Product Advertising API
    pub enum Operation: "operation" {
        GetBrowseNodes => "GetBrowseNodes",
        GetItems => "GetItems",
        GetVariations => "GetVariations",
        SearchItems => "SearchItems",
    }
}

impl Operation {
    /// Check that every resource may be requested by this operation.
    ///
    /// Fails on the first resource (in input order) that the operation
    /// does not allow.
    pub fn validate(self, resources: &[Resource]) -> ValidationResult<()> {
        validation::validate(self, resources)
    }

    /// All resources this operation may request, in vocabulary order
    pub fn allowed_resources(self) -> Vec<Resource> {
        CompatibilityTable::global().resources_for(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_operation_names_match_variants() {
        assert_eq!(Operation::GetBrowseNodes.as_str(), "GetBrowseNodes");
        assert_eq!(Operation::GetItems.as_str(), "GetItems");
        assert_eq!(Operation::GetVariations.as_str(), "GetVariations");
        assert_eq!(Operation::SearchItems.as_str(), "SearchItems");
        assert_eq!(Operation::ALL.len(), 4);
    }

    #[test]
    fn test_operation_parsing_is_case_sensitive() {
        assert_eq!(
            "GetItems".parse::<Operation>().ok(),
            Some(Operation::GetItems)
        );
        assert!(Operation::from_name("getitems").is_none());
        assert_matches!("ListItems".parse::<Operation>(), Err(e) if e.name() == "ListItems");
    }

    #[test]
    fn test_operation_serde_uses_api_name() {
        let json = serde_json::to_string(&Operation::SearchItems).unwrap();
        assert_eq!(json, "\"SearchItems\"");

        let parsed: Operation = serde_json::from_str("\"GetVariations\"").unwrap();
        assert_eq!(parsed, Operation::GetVariations);

        assert!(serde_json::from_str::<Operation>("\"Search\"").is_err());
    }

    #[test]
    fn test_browse_nodes_only_gets_browse_node_resources() {
        let resources = Operation::GetBrowseNodes.allowed_resources();
        assert_eq!(
            resources,
            vec![Resource::BrowseNodesAncestor, Resource::BrowseNodesChildren]
        );
    }

    #[test]
    fn test_method_form_delegates_to_validator() {
        assert!(Operation::SearchItems
            .validate(&[Resource::SearchRefinements, Resource::ItemInfoTitle])
            .is_ok());
        assert!(Operation::GetItems
            .validate(&[Resource::SearchRefinements])
            .is_err());
    }
}
