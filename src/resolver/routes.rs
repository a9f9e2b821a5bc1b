//! Canonical listing URLs and their alternate-locale variants.

use super::filter::{PathParams, QueryParams};
use super::slug::slugify;
use crate::models::{Locale, PropertyKind, TransactionKind};
use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;

/// Canonical listing URL:
/// `/{locale}/{transaction}/{type}/{city}[/municipality/{municipality}/listings]`.
///
/// City and municipality are slugified from their canonical (English) names.
pub fn compose_listing_url(
    locale: Locale,
    transaction: TransactionKind,
    property_type: PropertyKind,
    city: &str,
    municipality: Option<&str>,
) -> String {
    let mut url = format!(
        "/{}/{}/{}/{}",
        locale,
        transaction.url_token(),
        property_type.url_token(),
        slugify(city)
    );
    if let Some(municipality) = municipality {
        url.push_str(&format!("/municipality/{}/listings", slugify(municipality)));
    }
    url
}

/// One URL per supported locale, differing only in the locale segment.
///
/// A path without a locale segment gets one prepended. Any query string is
/// kept as is.
pub fn compose_alternate_locale_urls(path: &str) -> BTreeMap<Locale, String> {
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };

    let trimmed = path.trim_start_matches('/');
    let rest = match trimmed.split_once('/') {
        Some((first, rest)) if Locale::from_code(first).is_some() => rest,
        None if Locale::from_code(trimmed).is_some() => "",
        _ => trimmed,
    };

    Locale::ALL
        .into_iter()
        .map(|locale| {
            let mut url = if rest.is_empty() {
                format!("/{locale}")
            } else {
                format!("/{locale}/{rest}")
            };
            if let Some(query) = query {
                url.push('?');
                url.push_str(query);
            }
            (locale, url)
        })
        .collect()
}

/// Split a listing URL into its path segments and query parameters.
///
/// Returns `None` when the path does not have the listing shape. Segments are
/// percent-decoded but not otherwise validated here.
pub fn parse_listing_path(url: &str) -> Option<(PathParams, QueryParams)> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, QueryParams::parse(query)),
        None => (url, QueryParams::default()),
    };

    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    let (locale, transaction, property_type, city, municipality) = match segments.as_slice() {
        [locale, transaction, property_type, city] => {
            (*locale, *transaction, *property_type, *city, None)
        }
        [locale, transaction, property_type, city, "municipality", municipality, "listings"] => {
            (*locale, *transaction, *property_type, *city, Some(*municipality))
        }
        _ => return None,
    };

    let params = PathParams {
        locale: decode_segment(locale),
        transaction: decode_segment(transaction),
        property_type: decode_segment(property_type),
        city: decode_segment(city),
        municipality: municipality.map(decode_segment),
    };
    Some((params, query))
}

// Invalid UTF-8 sequences become U+FFFD
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
