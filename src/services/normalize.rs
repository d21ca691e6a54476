//! Mapping of backend records into display-ready suggestions.
//!
//! Each mapper re-checks the record against the lower-cased query and returns
//! `None` for records the backend matched on fields not shown to the user.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::contract::ContractRecord;
use crate::domain::customer::CustomerRecord;
use crate::domain::dress::DressRecord;
use crate::domain::suggestion::{Suggestion, SuggestionPayload};
use crate::domain::types::EntityType;

const CUSTOMER_FALLBACK_TITLE: &str = "Client";
const DRESS_FALLBACK_TITLE: &str = "Robe";
const CONTRACT_FALLBACK_TITLE: &str = "Contrat";
const LABEL_SEPARATOR: &str = " • ";

fn matches_any(candidates: &[Option<&str>], query_lower: &str) -> bool {
    candidates
        .iter()
        .any(|value| value.unwrap_or_default().to_lowercase().contains(query_lower))
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.is_empty()).cloned()
}

pub fn customer_suggestion(customer: CustomerRecord, query_lower: &str) -> Option<Suggestion> {
    let candidates = [
        customer.firstname.as_deref(),
        customer.lastname.as_deref(),
        customer.email.as_deref(),
        customer.phone.as_deref(),
    ];
    if !matches_any(&candidates, query_lower) {
        return None;
    }

    let title = customer
        .full_name()
        .or_else(|| non_empty(customer.email.as_ref()))
        .unwrap_or_else(|| CUSTOMER_FALLBACK_TITLE.to_string());

    Some(Suggestion {
        id: customer.id.clone(),
        entity_type: EntityType::Customer,
        title,
        subtitle: customer.email.clone(),
        description: customer.phone.clone(),
        payload: SuggestionPayload {
            customer: Some(customer),
            ..Default::default()
        },
    })
}

pub fn dress_suggestion(dress: DressRecord, query_lower: &str) -> Option<Suggestion> {
    let candidates = [dress.name.as_deref(), dress.reference.as_deref()];
    if !matches_any(&candidates, query_lower) {
        return None;
    }

    let title = non_empty(dress.name.as_ref()).unwrap_or_else(|| DRESS_FALLBACK_TITLE.to_string());
    let subtitle = non_empty(dress.reference.as_ref()).map(|reference| format!("Réf. {reference}"));
    let labels = [dress.type_name.as_deref(), dress.size_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>();
    let description = (!labels.is_empty()).then(|| labels.join(LABEL_SEPARATOR));

    Some(Suggestion {
        id: dress.id.clone(),
        entity_type: EntityType::Dress,
        title,
        subtitle,
        description,
        payload: SuggestionPayload {
            dress: Some(dress),
            ..Default::default()
        },
    })
}

pub fn contract_suggestion(contract: ContractRecord, query_lower: &str) -> Option<Suggestion> {
    let candidates = [
        contract.contract_number.as_deref(),
        contract.customer_firstname.as_deref(),
        contract.customer_lastname.as_deref(),
        contract.customer_email.as_deref(),
    ];
    if !matches_any(&candidates, query_lower) {
        return None;
    }

    let title = non_empty(contract.contract_number.as_ref())
        .unwrap_or_else(|| CONTRACT_FALLBACK_TITLE.to_string());
    let subtitle = contract
        .customer_full_name()
        .or_else(|| non_empty(contract.customer_email.as_ref()));
    let description = format_date_range(
        contract.start_datetime.as_deref(),
        contract.end_datetime.as_deref(),
    );
    let customer = contract.customer_snapshot();

    Some(Suggestion {
        id: contract.id.clone(),
        entity_type: EntityType::Contract,
        title,
        subtitle,
        description,
        payload: SuggestionPayload {
            customer,
            contract: Some(contract),
            ..Default::default()
        },
    })
}

/// Parses the timestamp shapes the backend emits: RFC 3339, naive
/// date-time, or a bare date.
fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc().fixed_offset());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

/// Formats `start → end` as `dd MMM yyyy` dates, or `None` when either side
/// is missing or unparsable.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = parse_timestamp(start?)?;
    let end = parse_timestamp(end?)?;
    Some(format!(
        "{} → {}",
        start.format_localized("%d %b %Y", Locale::fr_FR),
        end.format_localized("%d %b %Y", Locale::fr_FR)
    ))
}
