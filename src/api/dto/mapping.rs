//! DTOs for the mapping endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request body for `POST /shorten` and `PUT /shorten/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (required, must be an absolute URL).
    #[validate(
        length(min = 1, message = "url is required"),
        url(message = "Invalid URL format")
    )]
    pub url: String,
}

/// JSON representation of a mapping.
///
/// Timestamps serialize as RFC 3339.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id,
            url: mapping.url,
            short_code: mapping.code,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
        }
    }
}
