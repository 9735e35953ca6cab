//! API route configuration.

use crate::api::handlers::{
    delete_mapping_handler, get_mapping_handler, shorten_handler, update_mapping_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Mapping routes.
///
/// # Endpoints
///
/// - `POST   /shorten`         - Create (or return) the mapping for a URL
/// - `GET    /shorten/{code}`  - Resolve a short code
/// - `PUT    /shorten/{code}`  - Point a short code at a new URL
/// - `DELETE /shorten/{code}`  - Delete a mapping
pub fn mapping_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler)).route(
        "/shorten/{code}",
        get(get_mapping_handler)
            .put(update_mapping_handler)
            .delete(delete_mapping_handler),
    )
}
