//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::store_error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing URL mappings.
///
/// Every method maps to a single store round trip. Implementations must be
/// safe to share between concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping whose original URL equals `url`.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds the mapping with the given short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] naming the violated field when the
    /// URL or the code is already taken.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError>;

    /// Atomically replaces the URL of the mapping identified by `code` and
    /// bumps `updated_at`, returning the post-update record.
    ///
    /// Returns `Ok(None)` if no mapping has that code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if `url` belongs to another mapping.
    async fn update_url(
        &self,
        code: &str,
        url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Deletes the mapping with the given code.
    ///
    /// Returns `Ok(true)` if a mapping was removed, `Ok(false)` if none matched.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Counts persisted mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Round trip used by health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
