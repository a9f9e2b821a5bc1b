use super::{Locale, PropertyKind, TransactionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display strings for one domain key, keyed by locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedEntity {
    /// Locale independent key used for slugs and routing
    pub key: String,
    pub names: BTreeMap<Locale, String>,
}

impl LocalizedEntity {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            names: BTreeMap::new(),
        }
    }

    /// Add a display string, skipping blank ones
    pub fn with_name(mut self, locale: Locale, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.names.insert(locale, name);
        }
        self
    }

    pub fn name(&self, locale: Locale) -> Option<&str> {
        self.names.get(&locale).map(String::as_str)
    }
}

/// `name_en` / `name_mk` / `name_sq` fields as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "name_en", default)]
    pub en: Option<String>,
    #[serde(rename = "name_mk", default)]
    pub mk: Option<String>,
    #[serde(rename = "name_sq", default)]
    pub sq: Option<String>,
}

impl LocalizedName {
    /// Convert into an entity keyed by `key`
    pub fn to_entity(&self, key: impl Into<String>) -> LocalizedEntity {
        locale_fields_entity(key, self.en.as_deref(), self.mk.as_deref(), self.sq.as_deref())
    }
}

/// City as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    #[serde(flatten)]
    pub name: LocalizedName,
}

/// Municipality as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: String,
    #[serde(flatten)]
    pub name: LocalizedName,
}

/// Listing record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    #[serde(rename = "title_en", default)]
    pub title_en: Option<String>,
    #[serde(rename = "title_mk", default)]
    pub title_mk: Option<String>,
    #[serde(rename = "title_sq", default)]
    pub title_sq: Option<String>,
    pub transaction: TransactionKind,
    #[serde(rename = "type")]
    pub property_type: PropertyKind,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub municipality: Option<Municipality>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Localized titles keyed by the listing id
    pub fn title(&self) -> LocalizedEntity {
        locale_fields_entity(
            self.id.clone(),
            self.title_en.as_deref(),
            self.title_mk.as_deref(),
            self.title_sq.as_deref(),
        )
    }
}

fn locale_fields_entity(
    key: impl Into<String>,
    en: Option<&str>,
    mk: Option<&str>,
    sq: Option<&str>,
) -> LocalizedEntity {
    let mut entity = LocalizedEntity::new(key);
    for (locale, value) in [(Locale::En, en), (Locale::Mk, mk), (Locale::Sq, sq)] {
        if let Some(value) = value {
            entity = entity.with_name(locale, value);
        }
    }
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_locale_suffixed_fields() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "42",
            "title_en": "Bright flat",
            "title_mk": "Светол стан",
            "transaction": "SALE",
            "type": "APARTMENT",
            "price": 95000,
            "city": { "id": "1", "name_en": "Skopje", "name_mk": "Скопје", "name_sq": "Shkup" },
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        let title = listing.title();
        assert_eq!(title.name(Locale::Mk), Some("Светол стан"));
        assert_eq!(title.name(Locale::Sq), None);

        let city = listing.city.as_ref().unwrap().name.to_entity("skopje");
        assert_eq!(city.name(Locale::Sq), Some("Shkup"));
        assert!(listing.images.is_empty());
        assert!(listing.created_at.is_some());
    }

    #[test]
    fn blank_names_are_skipped() {
        let entity = LocalizedEntity::new("ohrid")
            .with_name(Locale::En, "Ohrid")
            .with_name(Locale::Mk, "  ");
        assert_eq!(entity.name(Locale::Mk), None);
        assert_eq!(entity.name(Locale::En), Some("Ohrid"));
    }
}
