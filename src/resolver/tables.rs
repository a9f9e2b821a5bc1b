//! URL vocabulary to backend enum tables.
//!
//! Keys are lowercase and hyphenated. Transaction and property type lookups
//! are strict and return `None` for unknown tokens. Amenity lookups are
//! lenient and fall back to the upper snake case form of the token.

use crate::models::{AmenityKind, PropertyKind, TransactionKind};
use phf::phf_map;
use tracing::debug;

static TRANSACTIONS: phf::Map<&'static str, TransactionKind> = phf_map! {
    "buy" => TransactionKind::Sale,
    "rent" => TransactionKind::Rent,
};

static PROPERTY_TYPES: phf::Map<&'static str, PropertyKind> = phf_map! {
    "apartment" => PropertyKind::Apartment,
    "apartments" => PropertyKind::Apartment,
    "house" => PropertyKind::House,
    "houses" => PropertyKind::House,
    "room" => PropertyKind::Room,
    "rooms" => PropertyKind::Room,
    "villa" => PropertyKind::Villa,
    "villas" => PropertyKind::Villa,
    "studio" => PropertyKind::Studio,
    "studios" => PropertyKind::Studio,
    "land" => PropertyKind::Land,
    "lands" => PropertyKind::Land,
    "office" => PropertyKind::Office,
    "offices" => PropertyKind::Office,
    "garage" => PropertyKind::Garage,
    "garages" => PropertyKind::Garage,
    "storage-room" => PropertyKind::StorageRoom,
    "storage-rooms" => PropertyKind::StorageRoom,
    "commercial" => PropertyKind::Commercial,
    "commercial-space" => PropertyKind::Commercial,
    "commercial-spaces" => PropertyKind::Commercial,
    "building" => PropertyKind::Building,
    "buildings" => PropertyKind::Building,
};

static AMENITIES: phf::Map<&'static str, AmenityKind> = phf_map! {
    "balcony" => AmenityKind::Balcony,
    "heating" => AmenityKind::Heating,
    "air-conditioning" => AmenityKind::AirConditioning,
    "ac" => AmenityKind::AirConditioning,
    "furnished" => AmenityKind::Furnished,
    "elevator" => AmenityKind::Elevator,
    "lift" => AmenityKind::Elevator,
    "parking" => AmenityKind::Parking,
    "garden" => AmenityKind::Garden,
    "pool" => AmenityKind::SwimmingPool,
    "swimming-pool" => AmenityKind::SwimmingPool,
    "internet" => AmenityKind::Internet,
    "wifi" => AmenityKind::Internet,
    "laundry" => AmenityKind::Laundry,
    "dishwasher" => AmenityKind::Dishwasher,
    "security" => AmenityKind::Security,
    "storage" => AmenityKind::Storage,
    "pet-friendly" => AmenityKind::PetFriendly,
    "pets-allowed" => AmenityKind::PetFriendly,
    "terrace" => AmenityKind::Terrace,
    "fireplace" => AmenityKind::Fireplace,
    "cable-tv" => AmenityKind::CableTv,
    "washing-machine" => AmenityKind::WashingMachine,
};

/// Which table a token is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Transaction,
    Property,
    Amenity,
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Strict lookup of a transaction token such as `buy`
pub fn map_transaction(token: &str) -> Option<TransactionKind> {
    let kind = TRANSACTIONS.get(normalize(token).as_str()).copied();
    if kind.is_none() {
        debug!(token, "No transaction mapping");
    }
    kind
}

/// Strict lookup of a property type token such as `apartments`
pub fn map_property(token: &str) -> Option<PropertyKind> {
    let kind = PROPERTY_TYPES.get(normalize(token).as_str()).copied();
    if kind.is_none() {
        debug!(token, "No property type mapping");
    }
    kind
}

/// Lenient lookup of an amenity token; unknown tokens pass through
pub fn map_amenity(token: &str) -> AmenityKind {
    let normalized = normalize(token);
    match AMENITIES.get(normalized.as_str()) {
        Some(kind) => kind.clone(),
        None => AmenityKind::Other(normalized.replace('-', "_").to_uppercase()),
    }
}

/// Map a token to its canonical backend string.
///
/// Returns `None` only for strict vocabularies.
pub fn map_token(vocabulary: Vocabulary, token: &str) -> Option<String> {
    match vocabulary {
        Vocabulary::Transaction => map_transaction(token).map(|kind| kind.as_str().to_string()),
        Vocabulary::Property => map_property(token).map(|kind| kind.as_str().to_string()),
        Vocabulary::Amenity => Some(map_amenity(token).as_str().to_string()),
    }
}
