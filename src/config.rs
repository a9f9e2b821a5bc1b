use crate::models::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Runtime settings for the resolver and its GraphQL client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint URL
    pub graphql_endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Locale used when the URL's locale segment is not recognized
    pub default_locale: Locale,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            user_agent: concat!("listing-resolver/", env!("CARGO_PKG_VERSION")).to_string(),
            default_locale: Locale::ROUTING_DEFAULT,
        }
    }
}
