//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::contract::ContractRecord;
use crate::domain::customer::CustomerRecord;
use crate::domain::dress::DressRecord;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContractSearch, ContractSearchQuery, CustomerSearch, CustomerSearchQuery, DressSearch,
    DressSearchQuery,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl CustomerSearch for Repository {
        async fn search_customers(
            &self,
            query: CustomerSearchQuery,
        ) -> RepositoryResult<Vec<CustomerRecord>>;
    }

    #[async_trait]
    impl DressSearch for Repository {
        async fn search_dresses(&self, query: DressSearchQuery) -> RepositoryResult<Vec<DressRecord>>;
    }

    #[async_trait]
    impl ContractSearch for Repository {
        async fn search_contracts(
            &self,
            query: ContractSearchQuery,
        ) -> RepositoryResult<Vec<ContractRecord>>;
    }
}
