use async_trait::async_trait;

use crate::MAX_RESULTS_PER_SOURCE;
use crate::domain::contract::ContractRecord;
use crate::domain::customer::CustomerRecord;
use crate::domain::dress::DressRecord;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[cfg(feature = "server")]
pub use http::HttpRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSearchQuery {
    pub search: String,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DressSearchQuery {
    pub search: String,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSearchQuery {
    pub search: String,
    pub limit: usize,
}

impl CustomerSearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            limit: MAX_RESULTS_PER_SOURCE,
        }
    }
}

impl DressSearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            limit: MAX_RESULTS_PER_SOURCE,
        }
    }
}

impl ContractSearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            limit: MAX_RESULTS_PER_SOURCE,
        }
    }
}

#[async_trait]
pub trait CustomerSearch: Send + Sync {
    async fn search_customers(
        &self,
        query: CustomerSearchQuery,
    ) -> RepositoryResult<Vec<CustomerRecord>>;
}

#[async_trait]
pub trait DressSearch: Send + Sync {
    async fn search_dresses(&self, query: DressSearchQuery) -> RepositoryResult<Vec<DressRecord>>;
}

#[async_trait]
pub trait ContractSearch: Send + Sync {
    async fn search_contracts(
        &self,
        query: ContractSearchQuery,
    ) -> RepositoryResult<Vec<ContractRecord>>;
}
