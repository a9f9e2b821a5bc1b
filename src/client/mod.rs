pub mod graphql;
pub mod traits;
pub mod types;

pub use graphql::GraphQlClient;
pub use traits::ListingSource;
pub use types::ListingQueryVariables;
