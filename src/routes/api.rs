use actix_web::{HttpResponse, Responder, web};
use log::{error, warn};

use crate::domain::types::SearchQuery;
use crate::dto::api::{ErrorResponse, QuickSearchResponse};
use crate::forms::quick_search::QuickSearchForm;
use crate::services::quick_search::{SearchSources, quick_search};

/// Registers the API routes backed by the repository `R`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: SearchSources + 'static,
{
    cfg.route("/v1/quick-search", web::get().to(api_v1_quick_search::<R>));
}

pub async fn api_v1_quick_search<R>(
    params: web::Query<QuickSearchForm>,
    repo: web::Data<R>,
) -> impl Responder
where
    R: SearchSources + 'static,
{
    let query = match SearchQuery::try_from(params.into_inner()) {
        Ok(query) => query,
        Err(e) => {
            warn!("Rejected quick search parameters: {e}");
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()));
        }
    };

    match quick_search(repo.get_ref(), &query).await {
        Ok(suggestions) => HttpResponse::Ok().json(QuickSearchResponse::new(&query, suggestions)),
        Err(e) => {
            error!("Failed to run quick search: {e}");
            HttpResponse::BadGateway().json(ErrorResponse::new("search failed"))
        }
    }
}
