use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::HttpRepository;

#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

/// Shortest trimmed query that is sent to the search sources.
pub const MIN_QUERY_LENGTH: usize = 2;
/// Quiet period after the last keystroke before a search is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);
/// Maximum number of suggestions requested from, and kept for, each source.
pub const MAX_RESULTS_PER_SOURCE: usize = 6;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = HttpRepository::new(
        server_config.backend_url.clone(),
        server_config.backend_token.clone(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
    let repo = web::Data::new(repo);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving quick search on {}:{} against {}",
        server_config.address,
        server_config.port,
        repo.base_url()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").configure(routes::api::configure::<HttpRepository>))
            .app_data(repo.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
