//! DTOs exposed by the quick-search API endpoint.

use serde::Serialize;

use crate::domain::suggestion::Suggestion;
use crate::domain::types::{EntityFilter, SearchQuery};

/// One row of the response, with the list key and badge precomputed.
#[derive(Debug, Serialize)]
pub struct SuggestionItem {
    pub key: String,
    pub badge: &'static str,
    #[serde(flatten)]
    pub suggestion: Suggestion,
}

impl From<Suggestion> for SuggestionItem {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            key: suggestion.key(),
            badge: suggestion.badge(),
            suggestion,
        }
    }
}

/// Result payload of `GET /api/v1/quick-search`.
#[derive(Debug, Serialize)]
pub struct QuickSearchResponse {
    pub query: String,
    pub filter: EntityFilter,
    pub suggestions: Vec<SuggestionItem>,
}

impl QuickSearchResponse {
    pub fn new(query: &SearchQuery, suggestions: Vec<Suggestion>) -> Self {
        Self {
            query: query.text.clone(),
            filter: query.entity_filter,
            suggestions: suggestions.into_iter().map(SuggestionItem::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
