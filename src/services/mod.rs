use thiserror::Error;

pub mod normalize;
pub mod quick_search;

/// Errors surfaced by the quick-search services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Every dispatched source lookup failed in the same cycle.
    #[error("search failed: all sources are unavailable")]
    AllSourcesFailed,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
