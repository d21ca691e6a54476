//! Fan-out of one quick-search cycle over the three record sources.

use std::future::Future;

use crate::domain::suggestion::Suggestion;
use crate::domain::types::{EntityFilter, EntityType, SearchQuery, SearchTerm};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContractSearch, ContractSearchQuery, CustomerSearch, CustomerSearchQuery, DressSearch,
    DressSearchQuery,
};
use crate::services::normalize::{contract_suggestion, customer_suggestion, dress_suggestion};
use crate::services::{ServiceError, ServiceResult};
use crate::MAX_RESULTS_PER_SOURCE;

/// Any implementation of the three search collaborators.
pub trait SearchSources: CustomerSearch + DressSearch + ContractSearch {}

impl<T> SearchSources for T where T: CustomerSearch + DressSearch + ContractSearch + ?Sized {}

async fn fetch_customer_suggestions<R>(
    repo: &R,
    term: &SearchTerm,
    query_lower: &str,
) -> RepositoryResult<Vec<Suggestion>>
where
    R: CustomerSearch + ?Sized,
{
    let customers = repo
        .search_customers(CustomerSearchQuery::new(term.as_str()))
        .await?;
    Ok(customers
        .into_iter()
        .filter_map(|customer| customer_suggestion(customer, query_lower))
        .take(MAX_RESULTS_PER_SOURCE)
        .collect())
}

async fn fetch_dress_suggestions<R>(
    repo: &R,
    term: &SearchTerm,
    query_lower: &str,
) -> RepositoryResult<Vec<Suggestion>>
where
    R: DressSearch + ?Sized,
{
    let dresses = repo
        .search_dresses(DressSearchQuery::new(term.as_str()))
        .await?;
    Ok(dresses
        .into_iter()
        .filter_map(|dress| dress_suggestion(dress, query_lower))
        .take(MAX_RESULTS_PER_SOURCE)
        .collect())
}

async fn fetch_contract_suggestions<R>(
    repo: &R,
    term: &SearchTerm,
    query_lower: &str,
) -> RepositoryResult<Vec<Suggestion>>
where
    R: ContractSearch + ?Sized,
{
    let contracts = repo
        .search_contracts(ContractSearchQuery::new(term.as_str()))
        .await?;
    Ok(contracts
        .into_iter()
        .filter_map(|contract| contract_suggestion(contract, query_lower))
        .take(MAX_RESULTS_PER_SOURCE)
        .collect())
}

/// Runs `lookup` only when the filter selects `entity`.
async fn when_included<F>(
    filter: EntityFilter,
    entity: EntityType,
    lookup: F,
) -> Option<(EntityType, RepositoryResult<Vec<Suggestion>>)>
where
    F: Future<Output = RepositoryResult<Vec<Suggestion>>>,
{
    if filter.includes(entity) {
        Some((entity, lookup.await))
    } else {
        None
    }
}

/// Queries every source selected by `filter` concurrently and merges the
/// normalized results in customer, dress, contract order.
///
/// A failing source is logged and contributes nothing. Only when every
/// dispatched source fails is [`ServiceError::AllSourcesFailed`] returned.
pub async fn search_suggestions<R>(
    repo: &R,
    term: &SearchTerm,
    filter: EntityFilter,
) -> ServiceResult<Vec<Suggestion>>
where
    R: SearchSources + ?Sized,
{
    let query_lower = term.to_lowercase();

    let (customers, dresses, contracts) = futures::join!(
        when_included(
            filter,
            EntityType::Customer,
            fetch_customer_suggestions(repo, term, &query_lower),
        ),
        when_included(
            filter,
            EntityType::Dress,
            fetch_dress_suggestions(repo, term, &query_lower),
        ),
        when_included(
            filter,
            EntityType::Contract,
            fetch_contract_suggestions(repo, term, &query_lower),
        ),
    );

    let mut dispatched = 0;
    let mut failed = 0;
    let mut merged = Vec::new();

    for (entity, outcome) in [customers, dresses, contracts].into_iter().flatten() {
        dispatched += 1;
        match outcome {
            Ok(suggestions) => merged.extend(suggestions),
            Err(err) => {
                failed += 1;
                log::error!("Quick search for {entity} failed: {err}");
            }
        }
    }

    if dispatched > 0 && failed == dispatched {
        return Err(ServiceError::AllSourcesFailed);
    }

    Ok(merged)
}

/// Runs one cycle for a raw query. Queries shorter than the minimum length
/// yield no suggestions without contacting any source.
pub async fn quick_search<R>(repo: &R, query: &SearchQuery) -> ServiceResult<Vec<Suggestion>>
where
    R: SearchSources + ?Sized,
{
    match query.term() {
        Ok(term) => search_suggestions(repo, &term, query.entity_filter).await,
        Err(_) => Ok(Vec::new()),
    }
}
