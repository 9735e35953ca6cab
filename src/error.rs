use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::StoreError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    StoreQuery(String),
    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::StoreQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        if e.is_unavailable() {
            return AppError::Unavailable(e.to_string());
        }

        match e {
            StoreError::Duplicate(field) => {
                AppError::Conflict(format!("A mapping with this {field} already exists"))
            }
            other => AppError::StoreQuery(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::unavailable("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_store_timeout_maps_to_unavailable() {
        let err: AppError = StoreError::Timeout(Duration::from_secs(5)).into();
        assert!(matches!(err, AppError::Unavailable(_)));
    }

    #[test]
    fn test_store_unavailable_maps_to_unavailable() {
        let err: AppError = StoreError::Unavailable("connection refused".into()).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err: AppError = StoreError::Duplicate(crate::domain::UniqueField::Url).into();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_store_query_error_passes_message_through() {
        let err: AppError = StoreError::Query("relation \"urls\" does not exist".into()).into();
        assert!(matches!(err, AppError::StoreQuery(_)));
        assert!(err.to_string().contains("relation \"urls\" does not exist"));
    }

    #[test]
    fn test_error_body_carries_message() {
        let body = AppError::not_found("Short code not found").to_error_body();
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Short code not found" }));
    }
}
