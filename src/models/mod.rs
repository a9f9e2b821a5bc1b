mod filter;
mod kinds;
mod listing;
mod locale;

pub use filter::{ListingFilter, RoommateFilter};
pub use kinds::{AmenityKind, PropertyKind, TransactionKind};
pub use listing::{City, Listing, LocalizedEntity, LocalizedName, Municipality};
pub use locale::Locale;
