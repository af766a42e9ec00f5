//! Route definitions for the Ferry HTTP API.
//!
//! All routes are mounted under `/api`.

use std::time::Duration;

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(upload_routes())
        .merge(file_routes())
        .merge(guest_link_routes())
        .merge(settings_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Owner and guest upload forms
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", get(handlers::upload::upload_page))
        .route(
            "/g/{guest_link_id}",
            get(handlers::guest::guest_upload_page),
        )
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}/downloads", get(handlers::file::file_downloads))
}

fn guest_link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/guest-links",
            get(handlers::guest_link::list_guest_links)
                .post(handlers::guest_link::create_guest_link),
        )
        .route(
            "/guest-links/new",
            get(handlers::guest_link::new_guest_link_form),
        )
}

fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(handlers::settings::get_settings).put(handlers::settings::update_settings),
    )
}
