//! Builds canonical filters from listing URL segments and query parameters.

use super::slug::slugify;
use super::tables::{map_amenity, map_property, map_transaction};
use crate::error::ResolveError;
use crate::models::{ListingFilter, PropertyKind, RoommateFilter, TransactionKind};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, warn};

/// Path segments of a listing URL, as they appeared in the request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    pub locale: String,
    pub transaction: String,
    pub property_type: String,
    pub city: String,
    pub municipality: Option<String>,
}

/// Decoded query string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query, with or without `?`.
    ///
    /// Repeated keys keep the last value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Non-blank value of `name`, trimmed
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolve the required transaction and property type segments.
pub fn resolve_route_kinds(
    path: &PathParams,
) -> Result<(TransactionKind, PropertyKind), ResolveError> {
    let transaction =
        map_transaction(&path.transaction).ok_or_else(|| ResolveError::UnresolvedTransaction {
            token: path.transaction.clone(),
        })?;
    let property_type =
        map_property(&path.property_type).ok_or_else(|| ResolveError::UnresolvedPropertyType {
            token: path.property_type.clone(),
        })?;
    Ok((transaction, property_type))
}

/// Build the filter for a listing search page.
///
/// Fails only when the transaction or property type segment has no mapping.
pub fn build_filter(
    path: &PathParams,
    query: &QueryParams,
) -> Result<ListingFilter, ResolveError> {
    let (transaction, property_type) = resolve_route_kinds(path)?;
    Ok(build_filter_for_kinds(transaction, property_type, query))
}

/// Build the filter once the route kinds are already resolved.
pub fn build_filter_for_kinds(
    transaction: TransactionKind,
    property_type: PropertyKind,
    query: &QueryParams,
) -> ListingFilter {
    let filter = ListingFilter {
        transaction: Some(transaction),
        property_type: Some(property_type),
        condition: uppercase(query, "condition"),
        price_min: number(query, "priceMin"),
        price_max: number(query, "priceMax"),
        rooms: number_list(query, "bedrooms"),
        bathrooms: number(query, "bathrooms"),
        amenities: query.get("specificDetails").and_then(|raw| {
            let amenities: Vec<_> = split_list(raw).map(map_amenity).collect();
            (!amenities.is_empty()).then_some(amenities)
        }),
        listing_date: verbatim(query, "listingDate"),
        sort: verbatim(query, "sort"),
    };

    debug!(?filter, "Built listing filter");
    filter
}

/// Build the filter for a roommate finder page. Never fails.
pub fn build_roommate_filter(city: Option<&str>, query: &QueryParams) -> RoommateFilter {
    RoommateFilter {
        city: city.map(slugify).filter(|slug| !slug.is_empty()),
        budget_min: number(query, "budgetMin"),
        budget_max: number(query, "budgetMax"),
        gender: uppercase(query, "gender"),
        move_in_date: verbatim(query, "moveInDate"),
        sort: verbatim(query, "sort"),
    }
}

fn verbatim(query: &QueryParams, name: &str) -> Option<String> {
    query.get(name).map(str::to_string)
}

fn uppercase(query: &QueryParams, name: &str) -> Option<String> {
    query.get(name).map(str::to_uppercase)
}

// Malformed numbers are dropped rather than forwarded. Every numeric filter is
// a whole number, so fractions count as malformed.
fn number<T: FromStr>(query: &QueryParams, name: &str) -> Option<T> {
    let raw = query.get(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) if is_fractional(raw) => {
            warn!(
                param = name,
                value = raw,
                "Ignoring fractional value, only whole numbers are accepted"
            );
            None
        }
        Err(_) => {
            warn!(param = name, value = raw, "Ignoring malformed numeric filter");
            None
        }
    }
}

fn is_fractional(raw: &str) -> bool {
    raw.parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value.fract() != 0.0)
}

fn number_list(query: &QueryParams, name: &str) -> Option<Vec<u32>> {
    let raw = query.get(name)?;
    let values: Vec<u32> = split_list(raw)
        .filter_map(|segment| match segment.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(param = name, value = segment, "Ignoring malformed list entry");
                None
            }
        })
        .collect();

    (!values.is_empty()).then_some(values)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
