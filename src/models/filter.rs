use super::{AmenityKind, PropertyKind, TransactionKind};
use serde::{Deserialize, Serialize};

/// Canonical listing filter sent to the GraphQL backend.
///
/// `None` means "no constraint" and the field is left out of the serialized
/// variables entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionKind>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<AmenityKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Filter for the roommate finder pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_in_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let filter = ListingFilter {
            transaction: Some(TransactionKind::Sale),
            property_type: Some(PropertyKind::Apartment),
            price_min: Some(100_000),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "transaction": "SALE", "type": "APARTMENT", "priceMin": 100000 })
        );
    }

    #[test]
    fn uses_camel_case_field_names() {
        let filter = ListingFilter {
            listing_date: Some("last-week".to_string()),
            amenities: Some(vec![AmenityKind::SwimmingPool]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "listingDate": "last-week", "amenities": ["SWIMMING_POOL"] })
        );
    }
}
