//! Localized display strings for cities, property types and transactions.
//!
//! Lookups fall back from the requested locale to English and then to a
//! caller supplied fallback, so resolving a label never fails.

use crate::models::{Locale, LocalizedEntity, PropertyKind, TransactionKind};
use phf::phf_map;
use std::collections::HashMap;

/// Static display strings for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLabel {
    pub en: &'static str,
    pub mk: &'static str,
    pub sq: &'static str,
}

impl StaticLabel {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Mk => self.mk,
            Locale::Sq => self.sq,
        }
    }
}

/// Anything that can answer a label lookup for one exact locale
pub trait LabelTable {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str>;
}

impl LabelTable for phf::Map<&'static str, StaticLabel> {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.get(key)
            .map(|label| label.get(locale))
            .filter(|name| !name.is_empty())
    }
}

impl LabelTable for HashMap<String, LocalizedEntity> {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.get(key).and_then(|entity| entity.name(locale))
    }
}

impl LabelTable for [LocalizedEntity] {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.iter()
            .find(|entity| entity.key == key)
            .and_then(|entity| entity.name(locale))
    }
}

impl LabelTable for LocalizedEntity {
    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        if self.key == key {
            self.name(locale)
        } else {
            None
        }
    }
}

/// What to show when neither the locale nor English has a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFallback {
    /// The raw key with its first letter uppercased
    CapitalizedKey,
    /// A fixed noun in the requested locale
    Generic(StaticLabel),
}

impl LabelFallback {
    fn render(&self, key: &str, locale: Locale) -> String {
        match self {
            LabelFallback::CapitalizedKey => capitalize(key),
            LabelFallback::Generic(noun) => noun.get(locale).to_string(),
        }
    }
}

/// Generic noun used when a property type has no label
pub const PROPERTIES_NOUN: StaticLabel = StaticLabel {
    en: "Properties",
    mk: "Недвижности",
    sq: "Prona",
};

/// Generic noun used when a listing has no title
pub const PROPERTY_NOUN: StaticLabel = StaticLabel {
    en: "Property",
    mk: "Недвижност",
    sq: "Pronë",
};

static CITIES: phf::Map<&'static str, StaticLabel> = phf_map! {
    "skopje" => StaticLabel { en: "Skopje", mk: "Скопје", sq: "Shkup" },
    "bitola" => StaticLabel { en: "Bitola", mk: "Битола", sq: "Manastir" },
    "ohrid" => StaticLabel { en: "Ohrid", mk: "Охрид", sq: "Ohër" },
    "tetovo" => StaticLabel { en: "Tetovo", mk: "Тетово", sq: "Tetovë" },
    "kumanovo" => StaticLabel { en: "Kumanovo", mk: "Куманово", sq: "Kumanovë" },
    "prilep" => StaticLabel { en: "Prilep", mk: "Прилеп", sq: "Prilep" },
    "stip" => StaticLabel { en: "Štip", mk: "Штип", sq: "Shtip" },
    "veles" => StaticLabel { en: "Veles", mk: "Велес", sq: "Veles" },
    "struga" => StaticLabel { en: "Struga", mk: "Струга", sq: "Strugë" },
    "gostivar" => StaticLabel { en: "Gostivar", mk: "Гостивар", sq: "Gostivar" },
    "strumica" => StaticLabel { en: "Strumica", mk: "Струмица", sq: "Strumicë" },
    "kavadarci" => StaticLabel { en: "Kavadarci", mk: "Кавадарци", sq: "Kavadar" },
    "kicevo" => StaticLabel { en: "Kičevo", mk: "Кичево", sq: "Kërçovë" },
    "gevgelija" => StaticLabel { en: "Gevgelija", mk: "Гевгелија", sq: "Gjevgjeli" },
};

static PROPERTY_TYPES: phf::Map<&'static str, StaticLabel> = phf_map! {
    "APARTMENT" => StaticLabel { en: "Apartments", mk: "Станови", sq: "Apartamente" },
    "HOUSE" => StaticLabel { en: "Houses", mk: "Куќи", sq: "Shtëpi" },
    "ROOM" => StaticLabel { en: "Rooms", mk: "Соби", sq: "Dhoma" },
    "VILLA" => StaticLabel { en: "Villas", mk: "Вили", sq: "Vila" },
    "STUDIO" => StaticLabel { en: "Studios", mk: "Студија", sq: "Studio" },
    "LAND" => StaticLabel { en: "Land", mk: "Земјиште", sq: "Tokë" },
    "OFFICE" => StaticLabel { en: "Offices", mk: "Канцеларии", sq: "Zyra" },
    "GARAGE" => StaticLabel { en: "Garages", mk: "Гаражи", sq: "Garazhe" },
    "STORAGE_ROOM" => StaticLabel { en: "Storage rooms", mk: "Магацини", sq: "Magazina" },
    "COMMERCIAL" => StaticLabel {
        en: "Commercial spaces",
        mk: "Деловни простори",
        sq: "Lokale afariste",
    },
    "BUILDING" => StaticLabel { en: "Buildings", mk: "Згради", sq: "Ndërtesa" },
};

static TRANSACTIONS: phf::Map<&'static str, StaticLabel> = phf_map! {
    "SALE" => StaticLabel { en: "for sale", mk: "за продажба", sq: "në shitje" },
    "RENT" => StaticLabel { en: "for rent", mk: "за изнајмување", sq: "me qira" },
};

/// Resolve a display string: requested locale, then English, then `fallback`
pub fn resolve_label<T: LabelTable + ?Sized>(
    table: &T,
    key: &str,
    locale: Locale,
    fallback: LabelFallback,
) -> String {
    let raw = key.trim();
    let normalized = raw.to_lowercase();

    for candidate in [raw, normalized.as_str()] {
        let found = table.lookup(candidate, locale).or_else(|| {
            if locale == Locale::TEXT_DEFAULT {
                None
            } else {
                table.lookup(candidate, Locale::TEXT_DEFAULT)
            }
        });
        if let Some(label) = found {
            return label.to_string();
        }
    }

    fallback.render(raw, locale)
}

/// City name for a slug such as `skopje`
pub fn city_label(city_key: &str, locale: Locale) -> String {
    resolve_label(&CITIES, city_key, locale, LabelFallback::CapitalizedKey)
}

/// Plural property type name, e.g. "Apartments"
pub fn property_type_label(kind: PropertyKind, locale: Locale) -> String {
    resolve_label(
        &PROPERTY_TYPES,
        kind.as_str(),
        locale,
        LabelFallback::Generic(PROPERTIES_NOUN),
    )
}

/// Transaction phrase, e.g. "for sale"
pub fn transaction_label(kind: TransactionKind, locale: Locale) -> String {
    resolve_label(&TRANSACTIONS, kind.as_str(), locale, LabelFallback::CapitalizedKey)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("skopje", Locale::Mk, "Скопје")]
    #[case("skopje", Locale::Sq, "Shkup")]
    #[case("skopje", Locale::En, "Skopje")]
    #[case("Skopje", Locale::Mk, "Скопје")]
    #[case("stip", Locale::En, "Štip")]
    fn resolves_city_labels(#[case] key: &str, #[case] locale: Locale, #[case] expected: &str) {
        assert_eq!(city_label(key, locale), expected);
    }

    #[rstest]
    #[case(Locale::En)]
    #[case(Locale::Mk)]
    #[case(Locale::Sq)]
    fn unknown_city_is_capitalized_key(#[case] locale: Locale) {
        assert_eq!(city_label("atlantis", locale), "Atlantis");
    }

    #[test]
    fn falls_back_to_english_then_fallback() {
        let entities = vec![
            LocalizedEntity::new("centar")
                .with_name(Locale::En, "Centar")
                .with_name(Locale::Mk, "Центар"),
            LocalizedEntity::new("butel").with_name(Locale::Mk, "Бутел"),
        ];

        assert_eq!(
            resolve_label(entities.as_slice(), "centar", Locale::Sq, LabelFallback::CapitalizedKey),
            "Centar"
        );
        assert_eq!(
            resolve_label(entities.as_slice(), "butel", Locale::Sq, LabelFallback::CapitalizedKey),
            "Butel"
        );
        assert_eq!(
            resolve_label(
                entities.as_slice(),
                "missing",
                Locale::Mk,
                LabelFallback::Generic(PROPERTIES_NOUN)
            ),
            "Недвижности"
        );
    }

    #[test]
    fn mixed_case_key_matches_lowercase_entry() {
        let entity = LocalizedEntity::new("kisela-voda").with_name(Locale::En, "Kisela Voda");
        assert_eq!(
            resolve_label(&entity, "  Kisela-Voda ", Locale::Mk, LabelFallback::CapitalizedKey),
            "Kisela Voda"
        );
        assert_eq!(
            resolve_label(&entity, "Karpos", Locale::Mk, LabelFallback::CapitalizedKey),
            "Karpos"
        );
    }

    #[test]
    fn hash_map_tables_resolve() {
        let mut table = HashMap::new();
        table.insert(
            "aerodrom".to_string(),
            LocalizedEntity::new("aerodrom").with_name(Locale::Sq, "Aerodrom"),
        );
        assert_eq!(
            resolve_label(&table, "aerodrom", Locale::Sq, LabelFallback::CapitalizedKey),
            "Aerodrom"
        );
    }

    #[test]
    fn kind_labels_are_localized() {
        assert_eq!(property_type_label(PropertyKind::Apartment, Locale::En), "Apartments");
        assert_eq!(property_type_label(PropertyKind::House, Locale::Mk), "Куќи");
        assert_eq!(transaction_label(TransactionKind::Rent, Locale::Sq), "me qira");
    }
}
