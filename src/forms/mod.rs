//! Request parameters accepted by the HTTP routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod quick_search;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid parameter: {0}")]
    TypeConstraint(String),
}
