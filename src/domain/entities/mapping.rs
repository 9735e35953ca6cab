//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and its original URL.
///
/// `id` comes from the shared sequence counter, `url` is unique across all
/// mappings and `code` is a prefix of the URL's digest.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        url: String,
        code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            code,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl NewMapping {
    /// Converts the insert payload into the record the store will hold.
    ///
    /// `updated_at` starts equal to `created_at`.
    pub fn into_mapping(self) -> UrlMapping {
        UrlMapping::new(self.id, self.url, self.code, self.created_at, self.created_at)
    }
}
