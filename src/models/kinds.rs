use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend transaction vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Sale,
    Rent,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Sale, TransactionKind::Rent];

    /// Canonical backend token
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Sale => "SALE",
            TransactionKind::Rent => "RENT",
        }
    }

    /// Path segment used in listing URLs
    pub fn url_token(self) -> &'static str {
        match self {
            TransactionKind::Sale => "buy",
            TransactionKind::Rent => "rent",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend property type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    Apartment,
    House,
    Room,
    Villa,
    Studio,
    Land,
    Office,
    Garage,
    StorageRoom,
    Commercial,
    Building,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 11] = [
        PropertyKind::Apartment,
        PropertyKind::House,
        PropertyKind::Room,
        PropertyKind::Villa,
        PropertyKind::Studio,
        PropertyKind::Land,
        PropertyKind::Office,
        PropertyKind::Garage,
        PropertyKind::StorageRoom,
        PropertyKind::Commercial,
        PropertyKind::Building,
    ];

    /// Canonical backend token
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "APARTMENT",
            PropertyKind::House => "HOUSE",
            PropertyKind::Room => "ROOM",
            PropertyKind::Villa => "VILLA",
            PropertyKind::Studio => "STUDIO",
            PropertyKind::Land => "LAND",
            PropertyKind::Office => "OFFICE",
            PropertyKind::Garage => "GARAGE",
            PropertyKind::StorageRoom => "STORAGE_ROOM",
            PropertyKind::Commercial => "COMMERCIAL",
            PropertyKind::Building => "BUILDING",
        }
    }

    /// Plural path segment used in listing URLs
    pub fn url_token(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "apartments",
            PropertyKind::House => "houses",
            PropertyKind::Room => "rooms",
            PropertyKind::Villa => "villas",
            PropertyKind::Studio => "studios",
            PropertyKind::Land => "land",
            PropertyKind::Office => "offices",
            PropertyKind::Garage => "garages",
            PropertyKind::StorageRoom => "storage-rooms",
            PropertyKind::Commercial => "commercial",
            PropertyKind::Building => "buildings",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity filter values.
///
/// Tokens outside the known vocabulary are kept as [`AmenityKind::Other`]
/// holding the upper snake case form of the token, so an amenity filter
/// never fails to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AmenityKind {
    Balcony,
    Heating,
    AirConditioning,
    Furnished,
    Elevator,
    Parking,
    Garden,
    SwimmingPool,
    Internet,
    Laundry,
    Dishwasher,
    Security,
    Storage,
    PetFriendly,
    Terrace,
    Fireplace,
    CableTv,
    WashingMachine,
    Other(String),
}

impl AmenityKind {
    pub const KNOWN: [AmenityKind; 18] = [
        AmenityKind::Balcony,
        AmenityKind::Heating,
        AmenityKind::AirConditioning,
        AmenityKind::Furnished,
        AmenityKind::Elevator,
        AmenityKind::Parking,
        AmenityKind::Garden,
        AmenityKind::SwimmingPool,
        AmenityKind::Internet,
        AmenityKind::Laundry,
        AmenityKind::Dishwasher,
        AmenityKind::Security,
        AmenityKind::Storage,
        AmenityKind::PetFriendly,
        AmenityKind::Terrace,
        AmenityKind::Fireplace,
        AmenityKind::CableTv,
        AmenityKind::WashingMachine,
    ];

    /// Canonical backend token
    pub fn as_str(&self) -> &str {
        match self {
            AmenityKind::Balcony => "BALCONY",
            AmenityKind::Heating => "HEATING",
            AmenityKind::AirConditioning => "AIR_CONDITIONING",
            AmenityKind::Furnished => "FURNISHED",
            AmenityKind::Elevator => "ELEVATOR",
            AmenityKind::Parking => "PARKING",
            AmenityKind::Garden => "GARDEN",
            AmenityKind::SwimmingPool => "SWIMMING_POOL",
            AmenityKind::Internet => "INTERNET",
            AmenityKind::Laundry => "LAUNDRY",
            AmenityKind::Dishwasher => "DISHWASHER",
            AmenityKind::Security => "SECURITY",
            AmenityKind::Storage => "STORAGE",
            AmenityKind::PetFriendly => "PET_FRIENDLY",
            AmenityKind::Terrace => "TERRACE",
            AmenityKind::Fireplace => "FIREPLACE",
            AmenityKind::CableTv => "CABLE_TV",
            AmenityKind::WashingMachine => "WASHING_MACHINE",
            AmenityKind::Other(token) => token,
        }
    }

    /// Build from a backend token such as `SWIMMING_POOL`
    pub fn from_canonical(token: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == token)
            .unwrap_or_else(|| AmenityKind::Other(token.to_string()))
    }
}

impl fmt::Display for AmenityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AmenityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AmenityKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_canonical(&token))
    }
}
