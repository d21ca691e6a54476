use actix_web::{App, http::StatusCode, test, web};
use rental_quicksearch::domain::types::EntityType;
use rental_quicksearch::routes::api::configure;
use serde_json::Value;

mod common;

use common::{ScriptedRepository, catalogue};

async fn call(repo: ScriptedRepository, uri: &str) -> (StatusCode, Value, web::Data<ScriptedRepository>) {
    let repo = web::Data::new(repo);
    let app = test::init_service(
        App::new()
            .app_data(repo.clone())
            .service(web::scope("/api").configure(configure::<ScriptedRepository>)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, json, repo)
}

#[actix_web::test]
async fn merges_sources_in_order() {
    let (status, body, repo) = call(catalogue(), "/api/v1/quick-search?q=mar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "mar");
    assert_eq!(body["filter"], "all");

    let keys: Vec<&str> = body["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["customer-1", "dress-1", "contract-1"]);

    let first = &body["suggestions"][0];
    assert_eq!(first["title"], "Marie Curie");
    assert_eq!(first["subtitle"], "marie@example.com");
    assert_eq!(first["badge"], "Client");
    assert_eq!(first["entity_type"], "customer");

    assert_eq!(body["suggestions"][1]["subtitle"], "Réf. MQ-01");
    assert_eq!(body["suggestions"][2]["payload"]["customer"]["id"], "1");
    assert_eq!(repo.calls().len(), 3);
}

#[actix_web::test]
async fn filter_limits_sources() {
    let (status, body, repo) =
        call(catalogue(), "/api/v1/quick-search?q=mar&filter=dress").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
    assert_eq!(repo.calls(), vec![(EntityType::Dress, "mar".to_string())]);
}

#[actix_web::test]
async fn short_query_returns_empty_without_lookups() {
    let (status, body, repo) = call(catalogue(), "/api/v1/quick-search?q=%20m%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["suggestions"].as_array().unwrap().is_empty());
    assert!(repo.calls().is_empty());
}

#[actix_web::test]
async fn partial_failure_still_answers() {
    let repo = catalogue().failing(EntityType::Dress);
    let (status, body, _) = call(repo, "/api/v1/quick-search?q=mar").await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["customer-1", "contract-1"]);
}

#[actix_web::test]
async fn all_sources_failing_is_bad_gateway() {
    let repo = catalogue()
        .failing(EntityType::Customer)
        .failing(EntityType::Dress)
        .failing(EntityType::Contract);
    let (status, body, _) = call(repo, "/api/v1/quick-search?q=mar").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "search failed");
}

#[actix_web::test]
async fn unknown_filter_is_rejected() {
    let (status, body, repo) =
        call(catalogue(), "/api/v1/quick-search?q=mar&filter=invoice").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid parameter: unknown entity: invoice");
    assert!(repo.calls().is_empty());
}
