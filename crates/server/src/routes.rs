use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::catalog::CatalogStore;

use crate::metrics;
use crate::openapi::ApiDoc;

pub mod services;

/// Shared handler state. The catalog is injected so tests can hand in a
/// fresh store per router.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Routes of the service catalog API only, without static files or docs.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/services",
            get(services::list_services).post(services::create_service),
        )
        .route("/api/services/:id", delete(services::delete_service))
        .with_state(state)
}

/// Build the full application router: API, health, metrics, docs and static assets.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
    let static_files = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(ops)
        .merge(api_router(state))
        .fallback_service(static_files)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
