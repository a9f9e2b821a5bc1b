use crate::models::{Listing, ListingFilter, Municipality};
use serde::{Deserialize, Serialize};

pub const LISTINGS_QUERY: &str = r#"
query Listings($name: String!, $municipality: String, $filter: ListingFilter) {
  listings(name: $name, municipality: $municipality, filter: $filter) {
    id
    title_en
    title_mk
    title_sq
    transaction
    type
    price
    rooms
    bathrooms
    area
    images
    createdAt
    city { id name_en name_mk name_sq }
    municipality { id name_en name_mk name_sq }
  }
}
"#;

pub const MUNICIPALITIES_QUERY: &str = r#"
query Municipalities($city: String!) {
  municipalities(city: $city) {
    id
    name_en
    name_mk
    name_sq
  }
}
"#;

/// Variables for the listings query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQueryVariables {
    /// City key
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    pub filter: ListingFilter,
}

/// Variables for the municipalities query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MunicipalityQueryVariables<'a> {
    pub city: &'a str,
}

/// Body of a GraphQL POST request
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Envelope of a GraphQL response
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListingsData {
    pub listings: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
pub struct MunicipalitiesData {
    pub municipalities: Vec<Municipality>,
}
