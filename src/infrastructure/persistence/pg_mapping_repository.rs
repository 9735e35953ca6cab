//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::StoreError;
use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::utils::db_error::map_sqlx_error;

/// PostgreSQL repository for URL mappings.
///
/// Uniqueness of `url` and `code` is enforced by the `urls_url_key` and
/// `urls_code_key` constraints; violations surface as
/// [`StoreError::Duplicate`].
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, StoreError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, url, code, created_at, updated_at
            FROM urls
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, url, code, created_at, updated_at
            FROM urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (id, url, code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, url, code, created_at, updated_at
            "#,
        )
        .bind(new_mapping.id)
        .bind(&new_mapping.url)
        .bind(&new_mapping.code)
        .bind(new_mapping.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn update_url(
        &self,
        code: &str,
        url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlMapping>, StoreError> {
        // GREATEST keeps updated_at >= created_at even if clocks disagree.
        sqlx::query_as::<_, UrlMapping>(
            r#"
            UPDATE urls
            SET url = $2,
                updated_at = GREATEST($3, created_at)
            WHERE code = $1
            RETURNING id, url, code, created_at, updated_at
            "#,
        )
        .bind(code)
        .bind(url)
        .bind(updated_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM urls WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
