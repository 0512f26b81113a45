//! PA-API 5.0 resources
//!
//! A resource names one block of item, offer or browse-node data a request
//! asks the API to return. Names are the dotted resource paths the API
//! accepts in its `Resources` request parameter.

use crate::compatibility::CompatibilityTable;

use super::operation::Operation;

vocabulary_enum! {
    /// A category of data that can be requested from the API
    pub enum Resource: "resource" {
        // === BROWSE NODES (GetBrowseNodes) ===
        BrowseNodesAncestor => "BrowseNodes.Ancestor",
        BrowseNodesChildren => "BrowseNodes.Children",

        // === BROWSE NODE INFO ===
        BrowseNodeInfoBrowseNodes => "BrowseNodeInfo.BrowseNodes",
        BrowseNodeInfoBrowseNodesAncestor => "BrowseNodeInfo.BrowseNodes.Ancestor",
        BrowseNodeInfoBrowseNodesSalesRank => "BrowseNodeInfo.BrowseNodes.SalesRank",
        BrowseNodeInfoWebsiteSalesRank => "BrowseNodeInfo.WebsiteSalesRank",

        // === CUSTOMER REVIEWS ===
        CustomerReviewsCount => "CustomerReviews.Count",
        CustomerReviewsStarRating => "CustomerReviews.StarRating",

        // === IMAGES ===
        ImagesPrimarySmall => "Images.Primary.Small",
        ImagesPrimaryMedium => "Images.Primary.Medium",
        ImagesPrimaryLarge => "Images.Primary.Large",
        ImagesVariantsSmall => "Images.Variants.Small",
        ImagesVariantsMedium => "Images.Variants.Medium",
        ImagesVariantsLarge => "Images.Variants.Large",

        // === ITEM INFO ===
        ItemInfoByLineInfo => "ItemInfo.ByLineInfo",
        ItemInfoContentInfo => "ItemInfo.ContentInfo",
        ItemInfoContentRating => "ItemInfo.ContentRating",
        ItemInfoClassifications => "ItemInfo.Classifications",
        ItemInfoExternalIds => "ItemInfo.ExternalIds",
        ItemInfoFeatures => "ItemInfo.Features",
        ItemInfoManufactureInfo => "ItemInfo.ManufactureInfo",
        ItemInfoProductInfo => "ItemInfo.ProductInfo",
        ItemInfoTechnicalInfo => "ItemInfo.TechnicalInfo",
        ItemInfoTitle => "ItemInfo.Title",
        ItemInfoTradeInInfo => "ItemInfo.TradeInInfo",

        // === OFFERS ===
        OffersListingsAvailabilityMaxOrderQuantity =>
            "Offers.Listings.Availability.MaxOrderQuantity",
        OffersListingsAvailabilityMessage => "Offers.Listings.Availability.Message",
        OffersListingsAvailabilityMinOrderQuantity =>
            "Offers.Listings.Availability.MinOrderQuantity",
        OffersListingsAvailabilityType => "Offers.Listings.Availability.Type",
        OffersListingsCondition => "Offers.Listings.Condition",
        OffersListingsConditionSubCondition => "Offers.Listings.Condition.SubCondition",
        OffersListingsDeliveryInfoIsAmazonFulfilled =>
            "Offers.Listings.DeliveryInfo.IsAmazonFulfilled",
        OffersListingsDeliveryInfoIsFreeShippingEligible =>
            "Offers.Listings.DeliveryInfo.IsFreeShippingEligible",
        OffersListingsDeliveryInfoIsPrimeEligible => "Offers.Listings.DeliveryInfo.IsPrimeEligible",
        OffersListingsDeliveryInfoShippingCharges => "Offers.Listings.DeliveryInfo.ShippingCharges",
        OffersListingsIsBuyBoxWinner => "Offers.Listings.IsBuyBoxWinner",
        OffersListingsLoyaltyPointsPoints => "Offers.Listings.LoyaltyPoints.Points",
        OffersListingsMerchantInfo => "Offers.Listings.MerchantInfo",
        OffersListingsPrice => "Offers.Listings.Price",
        OffersListingsProgramEligibilityIsPrimeExclusive =>
            "Offers.Listings.ProgramEligibility.IsPrimeExclusive",
        OffersListingsProgramEligibilityIsPrimePantry =>
            "Offers.Listings.ProgramEligibility.IsPrimePantry",
        OffersListingsPromotions => "Offers.Listings.Promotions",
        OffersListingsSavingBasis => "Offers.Listings.SavingBasis",
        OffersSummariesHighestPrice => "Offers.Summaries.HighestPrice",
        OffersSummariesLowestPrice => "Offers.Summaries.LowestPrice",
        OffersSummariesOfferCount => "Offers.Summaries.OfferCount",

        // === PARENT ASIN ===
        ParentASIN => "ParentASIN",

        // === RENTAL OFFERS ===
        RentalOffersListingsAvailabilityMaxOrderQuantity =>
            "RentalOffers.Listings.Availability.MaxOrderQuantity",
        RentalOffersListingsAvailabilityMessage => "RentalOffers.Listings.Availability.Message",
        RentalOffersListingsAvailabilityMinOrderQuantity =>
            "RentalOffers.Listings.Availability.MinOrderQuantity",
        RentalOffersListingsAvailabilityType => "RentalOffers.Listings.Availability.Type",
        RentalOffersListingsBasePrice => "RentalOffers.Listings.BasePrice",
        RentalOffersListingsCondition => "RentalOffers.Listings.Condition",
        RentalOffersListingsConditionSubCondition => "RentalOffers.Listings.Condition.SubCondition",
        RentalOffersListingsDeliveryInfoIsAmazonFulfilled =>
            "RentalOffers.Listings.DeliveryInfo.IsAmazonFulfilled",
        RentalOffersListingsDeliveryInfoIsFreeShippingEligible =>
            "RentalOffers.Listings.DeliveryInfo.IsFreeShippingEligible",
        RentalOffersListingsDeliveryInfoIsPrimeEligible =>
            "RentalOffers.Listings.DeliveryInfo.IsPrimeEligible",
        RentalOffersListingsDeliveryInfoShippingCharges =>
            "RentalOffers.Listings.DeliveryInfo.ShippingCharges",
        RentalOffersListingsMerchantInfo => "RentalOffers.Listings.MerchantInfo",

        // === VARIATION SUMMARY (GetVariations) ===
        VariationSummaryPriceHighestPrice => "VariationSummary.Price.HighestPrice",
        VariationSummaryPriceLowestPrice => "VariationSummary.Price.LowestPrice",
        VariationSummaryVariationDimension => "VariationSummary.VariationDimension",

        // === SEARCH REFINEMENTS (SearchItems) ===
        SearchRefinements => "SearchRefinements",
    }
}

impl Resource {
    /// Operations allowed to request this resource
    pub fn allowed_operations(self) -> &'static [Operation] {
        CompatibilityTable::global().allowed_operations(self)
    }

    /// Check whether `operation` may request this resource
    pub fn is_allowed_for(self, operation: Operation) -> bool {
        CompatibilityTable::global().allows(self, operation)
    }

    /// Top-level resource group, e.g. `Offers` for `Offers.Listings.Price`
    pub fn group(self) -> &'static str {
        let name = self.as_str();
        name.split_once('.').map_or(name, |(group, _)| group)
    }
}
