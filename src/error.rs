use thiserror::Error;

/// Failure to turn an incoming listing URL into a query.
///
/// Every variant is a not-found condition for the page that owns the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown transaction token '{token}'")]
    UnresolvedTransaction { token: String },
    #[error("unknown property type token '{token}'")]
    UnresolvedPropertyType { token: String },
    #[error("unknown municipality '{slug}' in city '{city}'")]
    UnknownMunicipality { city: String, slug: String },
}

/// Failure talking to the GraphQL backend
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to the GraphQL endpoint failed")]
    Transport(#[from] reqwest::Error),
    #[error("GraphQL endpoint returned status {0}")]
    Status(u16),
    #[error("GraphQL endpoint reported errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("GraphQL response carried no data")]
    MissingData,
}
