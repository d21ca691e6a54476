use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{EntityFilter, SearchQuery};
use crate::forms::FormError;

/// Query string of `GET /api/v1/quick-search`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct QuickSearchForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub q: String,
    #[serde(default)]
    pub filter: String,
}

impl TryFrom<QuickSearchForm> for SearchQuery {
    type Error = FormError;

    fn try_from(form: QuickSearchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let filter = form.filter.parse::<EntityFilter>()?;
        Ok(SearchQuery::new(form.q.trim(), filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_form_into_query() {
        let form = QuickSearchForm {
            q: "  Jane ".into(),
            filter: "customer".into(),
        };
        let query = SearchQuery::try_from(form).unwrap();
        assert_eq!(query.text, "Jane");
        assert_eq!(query.entity_filter, EntityFilter::Customer);
    }

    #[test]
    fn missing_filter_means_all() {
        let query = SearchQuery::try_from(QuickSearchForm {
            q: "robe".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.entity_filter, EntityFilter::All);
    }

    #[test]
    fn rejects_unknown_filter_and_long_query() {
        let unknown = QuickSearchForm {
            q: "robe".into(),
            filter: "invoice".into(),
        };
        match SearchQuery::try_from(unknown) {
            Err(FormError::TypeConstraint(message)) => {
                assert_eq!(message, "unknown entity: invoice")
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let long = QuickSearchForm {
            q: "x".repeat(201),
            ..Default::default()
        };
        assert!(matches!(
            SearchQuery::try_from(long),
            Err(FormError::Validation(_))
        ));
    }
}
