//! Resource → operation compatibility table
//!
//! The table mirrors the PA-API 5.0 schema: each resource lists the
//! operations whose `Resources` parameter may include it. It is built once
//! from [`RESOURCE_OPERATIONS`] on first use and never mutated afterwards, so
//! any number of threads may read it without coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::vocabulary::{Operation, Resource};

use crate::vocabulary::Operation::{GetBrowseNodes, GetItems, GetVariations, SearchItems};

const BROWSE_NODE_OPERATIONS: &[Operation] = &[GetBrowseNodes];
const ITEM_OPERATIONS: &[Operation] = &[GetItems, GetVariations, SearchItems];
const VARIATION_OPERATIONS: &[Operation] = &[GetVariations];
const SEARCH_OPERATIONS: &[Operation] = &[SearchItems];

/// Authoritative association of each resource with its allowed operations
pub const RESOURCE_OPERATIONS: &[(Resource, &[Operation])] = &[
    (Resource::BrowseNodesAncestor, BROWSE_NODE_OPERATIONS),
    (Resource::BrowseNodesChildren, BROWSE_NODE_OPERATIONS),
    (Resource::BrowseNodeInfoBrowseNodes, ITEM_OPERATIONS),
    (Resource::BrowseNodeInfoBrowseNodesAncestor, ITEM_OPERATIONS),
    (
        Resource::BrowseNodeInfoBrowseNodesSalesRank,
        ITEM_OPERATIONS,
    ),
    (Resource::BrowseNodeInfoWebsiteSalesRank, ITEM_OPERATIONS),
    (Resource::CustomerReviewsCount, ITEM_OPERATIONS),
    (Resource::CustomerReviewsStarRating, ITEM_OPERATIONS),
    (Resource::ImagesPrimarySmall, ITEM_OPERATIONS),
    (Resource::ImagesPrimaryMedium, ITEM_OPERATIONS),
    (Resource::ImagesPrimaryLarge, ITEM_OPERATIONS),
    (Resource::ImagesVariantsSmall, ITEM_OPERATIONS),
    (Resource::ImagesVariantsMedium, ITEM_OPERATIONS),
    (Resource::ImagesVariantsLarge, ITEM_OPERATIONS),
    (Resource::ItemInfoByLineInfo, ITEM_OPERATIONS),
    (Resource::ItemInfoContentInfo, ITEM_OPERATIONS),
    (Resource::ItemInfoContentRating, ITEM_OPERATIONS),
    (Resource::ItemInfoClassifications, ITEM_OPERATIONS),
    (Resource::ItemInfoExternalIds, ITEM_OPERATIONS),
    (Resource::ItemInfoFeatures, ITEM_OPERATIONS),
    (Resource::ItemInfoManufactureInfo, ITEM_OPERATIONS),
    (Resource::ItemInfoProductInfo, ITEM_OPERATIONS),
    (Resource::ItemInfoTechnicalInfo, ITEM_OPERATIONS),
    (Resource::ItemInfoTitle, ITEM_OPERATIONS),
    (Resource::ItemInfoTradeInInfo, ITEM_OPERATIONS),
    (
        Resource::OffersListingsAvailabilityMaxOrderQuantity,
        ITEM_OPERATIONS,
    ),
    (Resource::OffersListingsAvailabilityMessage, ITEM_OPERATIONS),
    (
        Resource::OffersListingsAvailabilityMinOrderQuantity,
        ITEM_OPERATIONS,
    ),
    (Resource::OffersListingsAvailabilityType, ITEM_OPERATIONS),
    (Resource::OffersListingsCondition, ITEM_OPERATIONS),
    (
        Resource::OffersListingsConditionSubCondition,
        ITEM_OPERATIONS,
    ),
    (
        Resource::OffersListingsDeliveryInfoIsAmazonFulfilled,
        ITEM_OPERATIONS,
    ),
    (
        Resource::OffersListingsDeliveryInfoIsFreeShippingEligible,
        ITEM_OPERATIONS,
    ),
    (
        Resource::OffersListingsDeliveryInfoIsPrimeEligible,
        ITEM_OPERATIONS,
    ),
    (
        Resource::OffersListingsDeliveryInfoShippingCharges,
        ITEM_OPERATIONS,
    ),
    (Resource::OffersListingsIsBuyBoxWinner, ITEM_OPERATIONS),
    (Resource::OffersListingsLoyaltyPointsPoints, ITEM_OPERATIONS),
    (Resource::OffersListingsMerchantInfo, ITEM_OPERATIONS),
    (Resource::OffersListingsPrice, ITEM_OPERATIONS),
    (
        Resource::OffersListingsProgramEligibilityIsPrimeExclusive,
        ITEM_OPERATIONS,
    ),
    (
        Resource::OffersListingsProgramEligibilityIsPrimePantry,
        ITEM_OPERATIONS,
    ),
    (Resource::OffersListingsPromotions, ITEM_OPERATIONS),
    (Resource::OffersListingsSavingBasis, ITEM_OPERATIONS),
    (Resource::OffersSummariesHighestPrice, ITEM_OPERATIONS),
    (Resource::OffersSummariesLowestPrice, ITEM_OPERATIONS),
    (Resource::OffersSummariesOfferCount, ITEM_OPERATIONS),
    (Resource::ParentASIN, ITEM_OPERATIONS),
    (
        Resource::RentalOffersListingsAvailabilityMaxOrderQuantity,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsAvailabilityMessage,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsAvailabilityMinOrderQuantity,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsAvailabilityType,
        ITEM_OPERATIONS,
    ),
    (Resource::RentalOffersListingsBasePrice, ITEM_OPERATIONS),
    (Resource::RentalOffersListingsCondition, ITEM_OPERATIONS),
    (
        Resource::RentalOffersListingsConditionSubCondition,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsDeliveryInfoIsAmazonFulfilled,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsDeliveryInfoIsFreeShippingEligible,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsDeliveryInfoIsPrimeEligible,
        ITEM_OPERATIONS,
    ),
    (
        Resource::RentalOffersListingsDeliveryInfoShippingCharges,
        ITEM_OPERATIONS,
    ),
    (Resource::RentalOffersListingsMerchantInfo, ITEM_OPERATIONS),
    (
        Resource::VariationSummaryPriceHighestPrice,
        VARIATION_OPERATIONS,
    ),
    (
        Resource::VariationSummaryPriceLowestPrice,
        VARIATION_OPERATIONS,
    ),
    (
        Resource::VariationSummaryVariationDimension,
        VARIATION_OPERATIONS,
    ),
    (Resource::SearchRefinements, SEARCH_OPERATIONS),
];

static GLOBAL_TABLE: OnceLock<CompatibilityTable> = OnceLock::new();

/// Immutable mapping from resource to the operations allowed to request it
#[derive(Debug, Clone)]
pub struct CompatibilityTable {
    entries: HashMap<Resource, &'static [Operation]>,
}

impl CompatibilityTable {
    /// Build a table from an explicit entry list
    ///
    /// A resource listed twice keeps its last entry.
    pub fn from_entries(entries: &[(Resource, &'static [Operation])]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Process-wide table built from [`RESOURCE_OPERATIONS`]
    pub fn global() -> &'static CompatibilityTable {
        GLOBAL_TABLE.get_or_init(|| Self::from_entries(RESOURCE_OPERATIONS))
    }

    /// Operations allowed to request `resource`; empty if the resource is unlisted
    pub fn allowed_operations(&self, resource: Resource) -> &'static [Operation] {
        self.entries.get(&resource).copied().unwrap_or(&[])
    }

    /// Same lookup keyed by the resource's API name; unknown names allow nothing
    pub fn allowed_operations_by_name(&self, name: &str) -> &'static [Operation] {
        Resource::from_name(name)
            .map(|resource| self.allowed_operations(resource))
            .unwrap_or(&[])
    }

    /// Check whether `operation` may request `resource`
    pub fn allows(&self, resource: Resource, operation: Operation) -> bool {
        self.allowed_operations(resource).contains(&operation)
    }

    /// Resources `operation` may request, in vocabulary order
    pub fn resources_for(&self, operation: Operation) -> Vec<Resource> {
        Resource::ALL
            .iter()
            .copied()
            .filter(|resource| self.allows(*resource, operation))
            .collect()
    }

    /// Listed entries in vocabulary order
    pub fn entries(&self) -> impl Iterator<Item = (Resource, &'static [Operation])> + '_ {
        Resource::ALL
            .iter()
            .filter_map(|resource| self.entries.get(resource).map(|ops| (*resource, *ops)))
    }

    /// Check whether `resource` has an entry at all
    pub fn contains(&self, resource: Resource) -> bool {
        self.entries.contains_key(&resource)
    }

    /// Number of listed resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_resource_has_an_entry() {
        let table = CompatibilityTable::global();
        for resource in Resource::ALL {
            assert!(table.contains(*resource), "missing entry for {}", resource);
            assert!(
                !table.allowed_operations(*resource).is_empty(),
                "{} allows no operation",
                resource
            );
        }
        assert_eq!(table.len(), Resource::ALL.len());
    }

    #[test]
    fn test_entry_list_has_no_duplicates() {
        let listed: HashSet<Resource> = RESOURCE_OPERATIONS.iter().map(|(r, _)| *r).collect();
        assert_eq!(listed.len(), RESOURCE_OPERATIONS.len());
        assert_eq!(listed.len(), Resource::ALL.len());
    }

    #[test]
    fn test_unlisted_resource_allows_nothing() {
        let entries = [(Resource::ItemInfoTitle, ITEM_OPERATIONS)];
        let table = CompatibilityTable::from_entries(&entries);

        assert!(table.allowed_operations(Resource::SearchRefinements).is_empty());
        for operation in Operation::ALL {
            assert!(!table.allows(Resource::SearchRefinements, *operation));
        }
        assert!(table.allows(Resource::ItemInfoTitle, Operation::GetItems));
    }

    #[test]
    fn test_lookup_by_name() {
        let table = CompatibilityTable::global();
        assert_eq!(
            table.allowed_operations_by_name("SearchRefinements"),
            &[Operation::SearchItems]
        );
        assert!(table.allowed_operations_by_name("ItemInfo.Nope").is_empty());
        assert!(table.allowed_operations_by_name("").is_empty());
    }

    #[test]
    fn test_resources_per_operation() {
        let table = CompatibilityTable::global();
        assert_eq!(table.resources_for(Operation::GetBrowseNodes).len(), 2);
        assert_eq!(table.resources_for(Operation::GetItems).len(), 57);
        assert_eq!(table.resources_for(Operation::GetVariations).len(), 60);
        assert_eq!(table.resources_for(Operation::SearchItems).len(), 58);
    }

    #[test]
    fn test_entries_follow_vocabulary_order() {
        let table = CompatibilityTable::global();
        let resources: Vec<Resource> = table.entries().map(|(r, _)| r).collect();
        assert_eq!(resources, Resource::ALL.to_vec());
    }

    #[test]
    fn test_global_table_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    CompatibilityTable::global() as *const CompatibilityTable as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
