//! Locale-aware listing filter resolver.
//!
//! Turns localized listing URLs such as `/en/buy/apartments/skopje?bedrooms=1,2`
//! into canonical GraphQL filter variables, and turns backend records back into
//! localized labels and routable URLs.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod session;

pub use config::Config;
pub use error::{FetchError, ResolveError};
