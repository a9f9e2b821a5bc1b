//! Page-level resolution of listing URLs.
//!
//! This is where resolution failures become not-found responses and backend
//! failures become a degraded view. Nothing here returns an error to the
//! caller.

use super::filter::{build_filter_for_kinds, resolve_route_kinds, PathParams, QueryParams};
use super::labels::{
    city_label, property_type_label, resolve_label, transaction_label, LabelFallback,
    StaticLabel, PROPERTY_NOUN,
};
use super::routes::{compose_alternate_locale_urls, compose_listing_url};
use super::slug::slugify;
use crate::client::{ListingQueryVariables, ListingSource};
use crate::config::Config;
use crate::error::{FetchError, ResolveError};
use crate::models::{Listing, Locale, Municipality, PropertyKind, TransactionKind};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

const NOT_FOUND_MESSAGE: StaticLabel = StaticLabel {
    en: "Page not found",
    mk: "Страницата не е пронајдена",
    sq: "Faqja nuk u gjet",
};

const DEGRADED_MESSAGE: StaticLabel = StaticLabel {
    en: "We couldn't load listings right now. Please try again later.",
    mk: "Моментално не можеме да ги вчитаме огласите. \
         Обидете се повторно подоцна.",
    sq: "Nuk mund t'i ngarkojmë njoftimet tani. Ju lutemi provoni më vonë.",
};

/// Everything known about a listing page before the backend is called
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    /// Locale of the canonical URL
    pub locale: Locale,
    /// Locale of titles, labels and messages. Differs from `locale` only when
    /// the requested locale is not supported.
    pub text_locale: Locale,
    pub transaction: TransactionKind,
    pub property_type: PropertyKind,
    pub title: String,
    pub canonical_url: String,
    pub alternates: BTreeMap<Locale, String>,
    pub variables: ListingQueryVariables,
}

/// Listing as shown on a results page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub city: Option<String>,
    pub price: Option<u64>,
    pub rooms: Option<u32>,
    pub summary: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing, locale: Locale) -> Self {
        let title = resolve_label(
            &listing.title(),
            &listing.id,
            locale,
            LabelFallback::Generic(PROPERTY_NOUN),
        );
        let city = listing.city.as_ref().map(|city| {
            let key = city.name.en.as_deref().map(slugify).unwrap_or_else(|| city.id.clone());
            let entity = city.name.to_entity(key);
            resolve_label(&entity, &entity.key, locale, LabelFallback::CapitalizedKey)
        });

        Self {
            id: listing.id.clone(),
            title,
            city,
            price: listing.price,
            rooms: listing.rooms,
            summary: format!(
                "{} {}",
                property_type_label(listing.property_type, locale),
                transaction_label(listing.transaction, locale)
            ),
        }
    }
}

/// Outcome of handling one listing page request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageResponse {
    NotFound {
        locale: Locale,
        message: String,
    },
    Listings {
        page: ListingPage,
        cards: Vec<ListingCard>,
    },
    Degraded {
        page: ListingPage,
        message: String,
    },
}

/// Resolves listing URLs into pages and renders them against a backend
#[derive(Debug, Clone)]
pub struct PageResolver {
    default_locale: Locale,
}

impl PageResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            default_locale: config.default_locale,
        }
    }

    /// Resolve the filter, title and URLs for a listing page
    pub fn resolve(
        &self,
        path: &PathParams,
        query: &QueryParams,
    ) -> Result<ListingPage, ResolveError> {
        let locale = Locale::from_code_or(&path.locale, self.default_locale);
        let text_locale = text_locale(path);
        let (transaction, property_type) = resolve_route_kinds(path)?;
        let filter = build_filter_for_kinds(transaction, property_type, query);

        let city = slugify(&path.city);
        let municipality = path
            .municipality
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty());

        let canonical_url =
            compose_listing_url(locale, transaction, property_type, &city, municipality.as_deref());
        let alternates = compose_alternate_locale_urls(&canonical_url);
        let place = city_label(&city, text_locale);
        let title = page_title(text_locale, transaction, property_type, &place);

        Ok(ListingPage {
            locale,
            text_locale,
            transaction,
            property_type,
            title,
            canonical_url,
            alternates,
            variables: ListingQueryVariables {
                name: city,
                municipality,
                filter,
            },
        })
    }

    /// Resolve the page and fetch its listings
    pub async fn handle<S>(
        &self,
        source: &S,
        path: &PathParams,
        query: &QueryParams,
    ) -> PageResponse
    where
        S: ListingSource + ?Sized,
    {
        let mut page = match self.resolve(path, query) {
            Ok(page) => page,
            Err(err) => return self.not_found(path, &err),
        };

        if let Some(slug) = page.variables.municipality.clone() {
            let municipalities = match source.municipalities(&page.variables.name).await {
                Ok(municipalities) => municipalities,
                Err(err) => return degraded(page, source.source_name(), &err),
            };
            let Some(municipality) = find_municipality(&municipalities, &slug) else {
                let err = ResolveError::UnknownMunicipality {
                    city: page.variables.name.clone(),
                    slug,
                };
                return self.not_found(path, &err);
            };

            let locale = page.text_locale;
            let entity = municipality.name.to_entity(slug);
            let place = format!(
                "{}, {}",
                resolve_label(&entity, &entity.key, locale, LabelFallback::CapitalizedKey),
                city_label(&page.variables.name, locale)
            );
            page.title = page_title(locale, page.transaction, page.property_type, &place);
        }

        match source.listings(&page.variables).await {
            Ok(listings) => {
                debug!("Rendering {} listings for {}", listings.len(), page.canonical_url);
                let cards = listings
                    .iter()
                    .map(|listing| ListingCard::from_listing(listing, page.text_locale))
                    .collect();
                PageResponse::Listings { page, cards }
            }
            Err(err) => degraded(page, source.source_name(), &err),
        }
    }

    fn not_found(&self, path: &PathParams, err: &ResolveError) -> PageResponse {
        info!("Listing page not found: {}", err);
        let locale = text_locale(path);
        PageResponse::NotFound {
            locale,
            message: NOT_FOUND_MESSAGE.get(locale).to_string(),
        }
    }
}

impl Default for PageResolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Find the municipality whose English name slugifies to `slug`
pub fn find_municipality<'a>(
    municipalities: &'a [Municipality],
    slug: &str,
) -> Option<&'a Municipality> {
    let slug = slugify(slug);
    municipalities.iter().find(|municipality| {
        municipality
            .name
            .en
            .as_deref()
            .is_some_and(|name| slugify(name) == slug)
    })
}

/// Localized page heading, e.g. "Apartments for sale in Skopje"
pub fn page_title(
    locale: Locale,
    transaction: TransactionKind,
    property_type: PropertyKind,
    place: &str,
) -> String {
    let kind = property_type_label(property_type, locale);
    let action = transaction_label(transaction, locale);
    let preposition = match locale {
        Locale::En => "in",
        Locale::Mk => "во",
        Locale::Sq => "në",
    };
    format!("{kind} {action} {preposition} {place}")
}

// Unsupported locales read English text even though they route to the default
fn text_locale(path: &PathParams) -> Locale {
    Locale::from_code_or(&path.locale, Locale::TEXT_DEFAULT)
}

fn degraded(page: ListingPage, source: &str, err: &FetchError) -> PageResponse {
    warn!("Failed to fetch from {} for {}: {}", source, page.canonical_url, err);
    let message = DEGRADED_MESSAGE.get(page.text_locale).to_string();
    PageResponse::Degraded { page, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, LocalizedName};
    use crate::resolver::routes::parse_listing_path;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeSource {
        listings: Vec<Listing>,
        municipalities: Vec<Municipality>,
        fail: bool,
        seen: Mutex<Vec<ListingQueryVariables>>,
    }

    #[async_trait]
    impl ListingSource for FakeSource {
        async fn listings(
            &self,
            variables: &ListingQueryVariables,
        ) -> Result<Vec<Listing>, FetchError> {
            self.seen.lock().unwrap().push(variables.clone());
            if self.fail {
                return Err(FetchError::MissingData);
            }
            Ok(self.listings.clone())
        }

        async fn municipalities(&self, _city: &str) -> Result<Vec<Municipality>, FetchError> {
            if self.fail {
                return Err(FetchError::Status(502));
            }
            Ok(self.municipalities.clone())
        }

        fn source_name(&self) -> &'static str {
            "fake"
        }
    }

    fn name(en: &str, mk: &str, sq: &str) -> LocalizedName {
        LocalizedName {
            en: Some(en.to_string()),
            mk: Some(mk.to_string()),
            sq: Some(sq.to_string()),
        }
    }

    fn listing() -> Listing {
        Listing {
            id: "7".to_string(),
            title_en: Some("Sunny flat".to_string()),
            title_mk: None,
            title_sq: Some("Apartament me diell".to_string()),
            transaction: TransactionKind::Sale,
            property_type: PropertyKind::Apartment,
            price: Some(120_000),
            rooms: Some(2),
            bathrooms: Some(1),
            area: Some(64.5),
            city: Some(City {
                id: "1".to_string(),
                name: name("Skopje", "Скопје", "Shkup"),
            }),
            municipality: None,
            images: vec![],
            created_at: None,
        }
    }

    fn request(url: &str) -> (PathParams, QueryParams) {
        parse_listing_path(url).unwrap()
    }

    #[test]
    fn resolves_plain_city_page() {
        let (path, query) = request("/en/buy/apartments/skopje");
        let page = PageResolver::default().resolve(&path, &query).unwrap();

        assert_eq!(page.locale, Locale::En);
        assert_eq!(page.title, "Apartments for sale in Skopje");
        assert_eq!(page.canonical_url, "/en/buy/apartments/skopje");
        assert_eq!(page.variables.name, "skopje");
        assert_eq!(
            serde_json::to_value(&page.variables.filter).unwrap(),
            serde_json::json!({ "transaction": "SALE", "type": "APARTMENT" })
        );
        assert_eq!(page.alternates.len(), 3);
        assert_eq!(page.alternates[&Locale::Sq], "/sq/buy/apartments/skopje");
    }

    #[test]
    fn unknown_locale_routes_to_default_but_reads_english() {
        let (path, query) = request("/de/rent/houses/ohrid");
        let page = PageResolver::default().resolve(&path, &query).unwrap();
        assert_eq!(page.locale, Locale::Mk);
        assert_eq!(page.text_locale, Locale::En);
        assert_eq!(page.title, "Houses for rent in Ohrid");
        assert_eq!(page.canonical_url, "/mk/rent/houses/ohrid");
        assert_eq!(page.alternates[&Locale::En], "/en/rent/houses/ohrid");
    }

    #[tokio::test]
    async fn unknown_locale_messages_are_english() {
        let source = FakeSource {
            fail: true,
            ..Default::default()
        };
        let (path, query) = request("/fr/buy/villas/struga");
        let response = PageResolver::default().handle(&source, &path, &query).await;
        match response {
            PageResponse::Degraded { page, message } => {
                assert_eq!(page.canonical_url, "/mk/buy/villas/struga");
                assert!(message.starts_with("We couldn't load listings"));
            }
            other => panic!("expected degraded view, got {other:?}"),
        }

        let (path, query) = request("/fr/lease/villas/struga");
        let response = PageResolver::default().handle(&source, &path, &query).await;
        assert_eq!(
            response,
            PageResponse::NotFound {
                locale: Locale::En,
                message: "Page not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unknown_locale_cards_use_english_labels() {
        let source = FakeSource {
            listings: vec![listing()],
            ..Default::default()
        };
        let (path, query) = request("/de/buy/apartments/skopje");
        let response = PageResolver::default().handle(&source, &path, &query).await;
        let cards = match response {
            PageResponse::Listings { cards, .. } => cards,
            other => panic!("expected listings, got {other:?}"),
        };
        assert_eq!(cards[0].city.as_deref(), Some("Skopje"));
        assert_eq!(cards[0].summary, "Apartments for sale");
    }

    #[test]
    fn encoded_city_resolves_to_its_slug() {
        let (path, query) = request("/en/buy/apartments/%C5%A0tip");
        let page = PageResolver::default().resolve(&path, &query).unwrap();
        assert_eq!(page.variables.name, "stip");
        assert_eq!(page.title, "Apartments for sale in Štip");
        assert_eq!(page.canonical_url, "/en/buy/apartments/stip");
    }

    #[test]
    fn unsupported_transaction_is_unresolved() {
        let (path, query) = request("/en/lease/apartments/skopje");
        assert_eq!(
            PageResolver::default().resolve(&path, &query),
            Err(ResolveError::UnresolvedTransaction {
                token: "lease".to_string()
            })
        );
    }

    #[tokio::test]
    async fn unsupported_transaction_renders_not_found_without_fetching() {
        let source = FakeSource::default();
        let (path, query) = request("/sq/lease/apartments/skopje");
        let response = PageResolver::default().handle(&source, &path, &query).await;

        assert_eq!(
            response,
            PageResponse::NotFound {
                locale: Locale::Sq,
                message: "Faqja nuk u gjet".to_string()
            }
        );
        assert!(source.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn renders_localized_cards() {
        let source = FakeSource {
            listings: vec![listing()],
            ..Default::default()
        };
        let (path, query) = request("/mk/buy/apartments/skopje?priceMin=100000");
        let response = PageResolver::default().handle(&source, &path, &query).await;

        let (page, cards) = match response {
            PageResponse::Listings { page, cards } => (page, cards),
            other => panic!("expected listings, got {other:?}"),
        };
        assert_eq!(page.variables.filter.price_min, Some(100_000));
        assert_eq!(cards.len(), 1);
        // No Macedonian title, so English is used
        assert_eq!(cards[0].title, "Sunny flat");
        assert_eq!(cards[0].city.as_deref(), Some("Скопје"));
        assert_eq!(cards[0].summary, "Станови за продажба");
        assert_eq!(source.seen.lock().unwrap()[0], page.variables);
    }

    #[tokio::test]
    async fn backend_failure_degrades() {
        let source = FakeSource {
            fail: true,
            ..Default::default()
        };
        let (path, query) = request("/en/rent/rooms/bitola");
        let response = PageResolver::default().handle(&source, &path, &query).await;

        let (page, message) = match response {
            PageResponse::Degraded { page, message } => (page, message),
            other => panic!("expected degraded view, got {other:?}"),
        };
        assert_eq!(page.canonical_url, "/en/rent/rooms/bitola");
        assert!(message.starts_with("We couldn't load listings"));
    }

    #[tokio::test]
    async fn municipality_page_uses_backend_names() {
        let source = FakeSource {
            municipalities: vec![Municipality {
                id: "12".to_string(),
                name: name("Gazi Baba", "Гази Баба", "Gazi Babë"),
            }],
            ..Default::default()
        };
        let (path, query) = request("/sq/buy/houses/skopje/municipality/gazi-baba/listings");
        let response = PageResolver::default().handle(&source, &path, &query).await;

        let (page, cards) = match response {
            PageResponse::Listings { page, cards } => (page, cards),
            other => panic!("expected listings, got {other:?}"),
        };
        assert!(cards.is_empty());
        assert_eq!(page.title, "Shtëpi në shitje në Gazi Babë, Shkup");
        assert_eq!(page.variables.municipality.as_deref(), Some("gazi-baba"));
        assert_eq!(
            page.canonical_url,
            "/sq/buy/houses/skopje/municipality/gazi-baba/listings"
        );
    }

    #[tokio::test]
    async fn unknown_municipality_is_not_found() {
        let source = FakeSource::default();
        let (path, query) = request("/en/buy/houses/skopje/municipality/nowhere/listings");
        let response = PageResolver::default().handle(&source, &path, &query).await;
        assert!(matches!(response, PageResponse::NotFound { locale: Locale::En, .. }));
        assert!(source.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn card_falls_back_to_generic_noun() {
        let mut record = listing();
        record.title_en = None;
        record.title_sq = None;
        let card = ListingCard::from_listing(&record, Locale::Sq);
        assert_eq!(card.title, "Pronë");
        assert_eq!(card.city.as_deref(), Some("Shkup"));
    }
}
