use crate::client::types::ListingQueryVariables;
use crate::error::FetchError;
use crate::models::{Listing, Municipality};
use async_trait::async_trait;

/// Common trait for listing backends
/// Implemented by the GraphQL client and by in-memory fakes in tests
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings matching the query variables
    async fn listings(&self, variables: &ListingQueryVariables) -> Result<Vec<Listing>, FetchError>;

    /// Fetch the municipalities of a city
    async fn municipalities(&self, city: &str) -> Result<Vec<Municipality>, FetchError>;

    /// Get the name of the backend
    fn source_name(&self) -> &'static str;
}
