//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`         - Create a mapping
//! - `GET    /shorten/{code}`  - Resolve a mapping
//! - `PUT    /shorten/{code}`  - Update a mapping
//! - `DELETE /shorten/{code}`  - Delete a mapping
//! - `GET    /health`          - Health check: store connectivity
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/shorten/abcd/` reaches
/// the same handler as `/shorten/abcd`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}

/// Routes and per-request middleware without path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::mapping_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
