//! Strongly-typed value objects shared by the quick-search core.
//!
//! These wrappers enforce basic invariants (e.g., a search term long enough to
//! be dispatched, a known entity filter) so that once a value reaches the
//! dispatcher it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MIN_QUERY_LENGTH;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Trimmed query is shorter than [`MIN_QUERY_LENGTH`] characters.
    #[error("query must contain at least {min} characters", min = MIN_QUERY_LENGTH)]
    QueryTooShort,
    /// Provided entity or filter name is not recognised.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

/// Kind of record a suggestion was built from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Customer,
    Dress,
    Contract,
}

impl EntityType {
    /// Fixed source order used when merging results.
    pub const ALL: [EntityType; 3] = [EntityType::Customer, EntityType::Dress, EntityType::Contract];

    pub const fn as_str(self) -> &'static str {
        match self {
            EntityType::Customer => "customer",
            EntityType::Dress => "dress",
            EntityType::Contract => "contract",
        }
    }

    /// Badge shown next to a suggestion row.
    pub const fn badge(self) -> &'static str {
        match self {
            EntityType::Customer => "Client",
            EntityType::Dress => "Robe",
            EntityType::Contract => "Contrat",
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(EntityType::Customer),
            "dress" => Ok(EntityType::Dress),
            "contract" => Ok(EntityType::Contract),
            other => Err(TypeConstraintError::UnknownEntity(other.to_string())),
        }
    }
}

/// User-selected restriction of the search scope.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityFilter {
    #[default]
    All,
    Customer,
    Dress,
    Contract,
}

impl EntityFilter {
    /// Returns `true` when lookups for `entity` are part of this filter.
    pub fn includes(self, entity: EntityType) -> bool {
        match self {
            EntityFilter::All => true,
            EntityFilter::Customer => entity == EntityType::Customer,
            EntityFilter::Dress => entity == EntityType::Dress,
            EntityFilter::Contract => entity == EntityType::Contract,
        }
    }

    /// Entities to query, in merge order.
    pub fn entities(self) -> impl Iterator<Item = EntityType> {
        EntityType::ALL
            .into_iter()
            .filter(move |entity| self.includes(*entity))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EntityFilter::All => "all",
            EntityFilter::Customer => "customer",
            EntityFilter::Dress => "dress",
            EntityFilter::Contract => "contract",
        }
    }

    /// Label displayed in the filter selector.
    pub const fn label(self) -> &'static str {
        match self {
            EntityFilter::All => "Tout",
            EntityFilter::Customer => "Clients",
            EntityFilter::Dress => "Robes",
            EntityFilter::Contract => "Contrats",
        }
    }

    /// Placeholder displayed in the empty search input.
    pub const fn placeholder(self) -> &'static str {
        match self {
            EntityFilter::All => "Rechercher client, robe ou contrat...",
            EntityFilter::Customer => "Rechercher un client...",
            EntityFilter::Dress => "Rechercher une robe...",
            EntityFilter::Contract => "Rechercher un contrat...",
        }
    }
}

impl Display for EntityFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(EntityFilter::All);
        }
        trimmed.parse::<EntityType>().map(EntityFilter::from)
    }
}

impl From<EntityType> for EntityFilter {
    fn from(value: EntityType) -> Self {
        match value {
            EntityType::Customer => EntityFilter::Customer,
            EntityType::Dress => EntityFilter::Dress,
            EntityType::Contract => EntityFilter::Contract,
        }
    }
}

/// Trimmed free-text query that is long enough to be sent to the backend.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims the input and ensures it has at least [`MIN_QUERY_LENGTH`] characters.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Err(TypeConstraintError::QueryTooShort);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the trimmed term as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased copy used by the client-side match predicates.
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw query as typed by the user together with the active filter.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub entity_filter: EntityFilter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, entity_filter: EntityFilter) -> Self {
        Self {
            text: text.into(),
            entity_filter,
        }
    }

    /// Validated term, or an error when the trimmed text is too short.
    pub fn term(&self) -> Result<SearchTerm, TypeConstraintError> {
        SearchTerm::new(&self.text)
    }
}
