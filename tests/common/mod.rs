//! Scripted search sources shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rental_quicksearch::domain::contract::ContractRecord;
use rental_quicksearch::domain::customer::CustomerRecord;
use rental_quicksearch::domain::dress::DressRecord;
use rental_quicksearch::domain::types::EntityType;
use rental_quicksearch::repository::errors::{RepositoryError, RepositoryResult};
use rental_quicksearch::repository::{
    ContractSearch, ContractSearchQuery, CustomerSearch, CustomerSearchQuery, DressSearch,
    DressSearchQuery,
};

/// Returns fixed records for every query, optionally after a per-query delay
/// or with a failure for selected sources. Records every lookup it receives.
#[derive(Default)]
pub struct ScriptedRepository {
    pub customers: Vec<CustomerRecord>,
    pub dresses: Vec<DressRecord>,
    pub contracts: Vec<ContractRecord>,
    pub delays: HashMap<String, Duration>,
    pub failing: HashSet<EntityType>,
    pub calls: Mutex<Vec<(EntityType, String)>>,
}

impl ScriptedRepository {
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn failing(mut self, entity: EntityType) -> Self {
        self.failing.insert(entity);
        self
    }

    pub fn calls(&self) -> Vec<(EntityType, String)> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    async fn lookup<T: Clone>(
        &self,
        entity: EntityType,
        search: &str,
        records: &[T],
    ) -> RepositoryResult<Vec<T>> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((entity, search.to_string()));

        if let Some(delay) = self.delays.get(search) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(&entity) {
            return Err(RepositoryError::Server {
                status: 503,
                message: format!("{entity} search unavailable"),
            });
        }

        Ok(records.to_vec())
    }
}

#[async_trait]
impl CustomerSearch for ScriptedRepository {
    async fn search_customers(
        &self,
        query: CustomerSearchQuery,
    ) -> RepositoryResult<Vec<CustomerRecord>> {
        self.lookup(EntityType::Customer, &query.search, &self.customers)
            .await
    }
}

#[async_trait]
impl DressSearch for ScriptedRepository {
    async fn search_dresses(&self, query: DressSearchQuery) -> RepositoryResult<Vec<DressRecord>> {
        self.lookup(EntityType::Dress, &query.search, &self.dresses)
            .await
    }
}

#[async_trait]
impl ContractSearch for ScriptedRepository {
    async fn search_contracts(
        &self,
        query: ContractSearchQuery,
    ) -> RepositoryResult<Vec<ContractRecord>> {
        self.lookup(EntityType::Contract, &query.search, &self.contracts)
            .await
    }
}

pub fn customer(id: &str, firstname: &str, lastname: &str, email: &str) -> CustomerRecord {
    CustomerRecord {
        id: id.into(),
        firstname: Some(firstname.into()),
        lastname: Some(lastname.into()),
        email: Some(email.into()),
        ..Default::default()
    }
}

pub fn dress(id: &str, name: &str, reference: &str) -> DressRecord {
    DressRecord {
        id: id.into(),
        name: Some(name.into()),
        reference: Some(reference.into()),
        ..Default::default()
    }
}

pub fn contract(id: &str, number: &str, customer_id: &str, firstname: &str) -> ContractRecord {
    ContractRecord {
        id: id.into(),
        contract_number: Some(number.into()),
        customer_id: Some(customer_id.into()),
        customer_firstname: Some(firstname.into()),
        ..Default::default()
    }
}

/// Catalogue in which every source has a record matching "mar".
pub fn catalogue() -> ScriptedRepository {
    ScriptedRepository {
        customers: vec![
            customer("1", "Marie", "Curie", "marie@example.com"),
            customer("2", "Paul", "Durand", "paul@example.com"),
        ],
        dresses: vec![dress("1", "Marquise", "MQ-01"), dress("2", "Aurore", "AU-02")],
        contracts: vec![contract("1", "CT-001", "1", "Marie")],
        ..Default::default()
    }
}
