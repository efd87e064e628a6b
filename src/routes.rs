//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod todos;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, patch},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Todo routes
        .route(
            "/api/v1/todos",
            get(todos::list_todos).post(todos::create_todo),
        )
        .route(
            "/api/v1/todos/{id}",
            get(todos::get_todo)
                .put(todos::replace_todo)
                .delete(todos::delete_todo),
        )
        .route("/api/v1/todos/{id}/status", patch(todos::update_status))
        .route("/api/v1/todos/{id}/title", patch(todos::update_title))
        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
    ];

    if origins.is_empty() {
        // Credentials cannot be combined with a wildcard origin
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
            .expose_headers([header::CONTENT_LENGTH])
            .max_age(Duration::from_secs(12 * 60 * 60))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
            .allow_credentials(true)
            .expose_headers([header::CONTENT_LENGTH])
            .max_age(Duration::from_secs(12 * 60 * 60))
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
