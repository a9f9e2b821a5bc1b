use crate::client::traits::ListingSource;
use crate::client::types::{
    GraphQlRequest, GraphQlResponse, ListingQueryVariables, ListingsData, MunicipalitiesData,
    MunicipalityQueryVariables, LISTINGS_QUERY, MUNICIPALITIES_QUERY,
};
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{Listing, Municipality};
use crate::session::SessionContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// GraphQL backend client
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    session: Option<SessionContext>,
}

impl GraphQlClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Create a new client for the configured endpoint
    pub fn with_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.graphql_endpoint.clone(),
            session: None,
        })
    }

    /// Send requests on behalf of an authenticated session
    pub fn with_session(mut self, session: Option<SessionContext>) -> Self {
        self.session = session;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one query and unwrap the `data` payload
    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, FetchError>
    where
        V: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        debug!("Posting GraphQL query to {}", self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(session) = &self.session {
            request = request.header(AUTHORIZATION, session.bearer());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            warn!("GraphQL endpoint returned status: {}", response.status());
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: GraphQlResponse<T> = response.json().await?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            warn!("GraphQL errors: {}", messages.join("; "));
            return Err(FetchError::GraphQl(messages));
        }

        body.data.ok_or(FetchError::MissingData)
    }
}

#[async_trait]
impl ListingSource for GraphQlClient {
    async fn listings(
        &self,
        variables: &ListingQueryVariables,
    ) -> Result<Vec<Listing>, FetchError> {
        let data: ListingsData = self.execute(LISTINGS_QUERY, variables).await?;
        info!("Fetched {} listings for {}", data.listings.len(), variables.name);
        Ok(data.listings)
    }

    async fn municipalities(&self, city: &str) -> Result<Vec<Municipality>, FetchError> {
        let data: MunicipalitiesData = self
            .execute(MUNICIPALITIES_QUERY, MunicipalityQueryVariables { city })
            .await?;
        debug!("Fetched {} municipalities for {}", data.municipalities.len(), city);
        Ok(data.municipalities)
    }

    fn source_name(&self) -> &'static str {
        "GraphQL"
    }
}
