use serde::Serialize;

use crate::domain::contract::ContractRecord;
use crate::domain::customer::CustomerRecord;
use crate::domain::dress::DressRecord;
use crate::domain::types::EntityType;

/// Source records carried along with a suggestion so the selected entity can
/// be opened without refetching it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct SuggestionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress: Option<DressRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractRecord>,
}

impl SuggestionPayload {
    pub fn is_empty(&self) -> bool {
        self.customer.is_none() && self.dress.is_none() && self.contract.is_none()
    }
}

/// Display-ready search result, independent of its source entity.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub entity_type: EntityType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub payload: SuggestionPayload,
}

impl Suggestion {
    /// Identifier unique across a merged result set.
    ///
    /// Record ids may collide between sources, so the entity type is part of
    /// the key.
    pub fn key(&self) -> String {
        format!("{}-{}", self.entity_type, self.id)
    }

    pub fn badge(&self) -> &'static str {
        self.entity_type.badge()
    }
}
