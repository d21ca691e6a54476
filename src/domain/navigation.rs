//! Outbound requests emitted when a suggestion is committed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::suggestion::{Suggestion, SuggestionPayload};
use crate::domain::types::EntityType;

/// State handed to the listing page when navigating to it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuickSearchNavigation {
    pub entity: EntityType,
    pub entity_id: String,
    #[serde(skip_serializing_if = "SuggestionPayload::is_empty")]
    pub payload: SuggestionPayload,
}

/// What the surrounding application should do with a committed suggestion.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationRequest {
    /// Route to the entity's listing page.
    Navigate {
        path: &'static str,
        state: QuickSearchNavigation,
    },
    /// The current page already lists the entity; open it in place.
    Dispatch {
        event: &'static str,
        detail: Map<String, Value>,
    },
}

/// Listing page hosting each entity type.
pub const fn listing_path(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Customer => "/customers",
        EntityType::Dress | EntityType::Contract => "/catalogue",
    }
}

/// In-page event opening the detail view of each entity type.
pub const fn view_event(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Customer => "open-customer-view",
        EntityType::Dress => "open-dress-view",
        EntityType::Contract => "open-contract-view",
    }
}

impl NavigationRequest {
    /// Builds the request for `suggestion` given the path currently displayed.
    pub fn for_suggestion(suggestion: &Suggestion, current_path: &str) -> Self {
        let entity = suggestion.entity_type;
        let path = listing_path(entity);

        if current_path.starts_with(path) {
            let mut detail = match serde_json::to_value(&suggestion.payload) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            };
            detail.insert(
                format!("{entity}Id"),
                Value::String(suggestion.id.clone()),
            );
            NavigationRequest::Dispatch {
                event: view_event(entity),
                detail,
            }
        } else {
            NavigationRequest::Navigate {
                path,
                state: QuickSearchNavigation {
                    entity,
                    entity_id: suggestion.id.clone(),
                    payload: suggestion.payload.clone(),
                },
            }
        }
    }
}
