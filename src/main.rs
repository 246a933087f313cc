mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use std::sync::Arc;

use config::Config;
use handlers::rest;
use repository::Repository;

use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to load config: {e}");
    });
    tracing::info!("Loaded config: {cfg:?}");

    // Store and service creation
    let repo_ptr = Arc::new(tokio::sync::Mutex::new(Repository::new()));
    let service = Arc::new(NoteService::new(repo_ptr));

    let router = app(service.clone(), &cfg);

    let listener = tokio::net::TcpListener::bind(cfg.bind_address())
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {}: {e}", cfg.bind_address());
            panic!("failed to bind to address: {e}");
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Notes server listening on http://{addr}"),
        Err(e) => tracing::warn!("Listening on unknown address: {e}"),
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| {
            tracing::error!("HTTP server error: {e}");
            panic!("failed to start HTTP server: {e}");
        });

    tracing::info!(
        "Notes server stopped, discarding {} notes",
        service.count().await
    );
}

fn app(service: Arc<NoteService>, cfg: &Config) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/api-doc/openapi.json", get(rest::openapi_json))
        .merge(rest::router(service));

    with_limits(router, cfg)
}

fn with_limits(router: Router, cfg: &Config) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                cfg.request_timeout,
            ))
            .layer(DefaultBodyLimit::max(cfg.max_body_bytes)),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

async fn root() -> Response {
    (StatusCode::OK, "Notes server is up").into_response()
}
