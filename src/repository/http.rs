//! REST implementation of the search collaborators.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::contract::ContractRecord;
use crate::domain::customer::CustomerRecord;
use crate::domain::dress::DressRecord;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ContractSearch, ContractSearchQuery, CustomerSearch, CustomerSearchQuery, DressSearch,
    DressSearchQuery,
};

/// List responses come either wrapped in `{"data": [...]}` or as a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// Decodes a list endpoint body into records.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> RepositoryResult<Vec<T>> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_items())
}

/// Search collaborators backed by the dashboard REST API.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> RepositoryResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, token, client))
    }

    pub fn with_client(base_url: impl Into<String>, token: Option<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|token| !token.is_empty()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> RepositoryResult<Vec<T>> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        decode_list(&body)
    }
}

#[async_trait]
impl CustomerSearch for HttpRepository {
    async fn search_customers(
        &self,
        query: CustomerSearchQuery,
    ) -> RepositoryResult<Vec<CustomerRecord>> {
        let request = self.get("/customers").query(&[
            ("search", query.search),
            ("limit", query.limit.to_string()),
        ]);
        self.fetch_list(request).await
    }
}

#[async_trait]
impl DressSearch for HttpRepository {
    async fn search_dresses(&self, query: DressSearchQuery) -> RepositoryResult<Vec<DressRecord>> {
        let request = self.get("/dresses/details").query(&[
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
            ("search", query.search),
        ]);
        self.fetch_list(request).await
    }
}

#[async_trait]
impl ContractSearch for HttpRepository {
    async fn search_contracts(
        &self,
        query: ContractSearchQuery,
    ) -> RepositoryResult<Vec<ContractRecord>> {
        let request = self.get("/contracts/search").query(&[
            ("query", query.search),
            ("limit", query.limit.to_string()),
        ]);
        self.fetch_list(request).await
    }
}
