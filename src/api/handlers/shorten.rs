//! Handlers for the mapping endpoints (create, read, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::mapping::{MappingResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// - **201 Created** with the new mapping
/// - **200 OK** with the existing mapping if the URL was already shortened
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com/a",
///   "shortCode": "3f1e",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "updatedAt": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is missing or invalid
/// - 503 Service Unavailable if the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let shortened = state.url_service.shorten(payload.url).await?;

    let status = if shortened.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(shortened.into_mapping().into())))
}

/// Resolves a short code.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// - 404 Not Found if the code is unknown
/// - 400 Bad Request for any other store error
pub async fn get_mapping_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MappingResponse>, AppError> {
    let mapping = state.url_service.resolve(&code).await?;

    Ok(Json(mapping.into()))
}

/// Points a short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Errors
///
/// - 400 Bad Request if the body is invalid or the URL is already shortened
///   under another code
/// - 404 Not Found if the code is unknown
pub async fn update_mapping_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<MappingResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.url_service.update(&code, &payload.url).await?;

    Ok(Json(mapping.into()))
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_mapping_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
