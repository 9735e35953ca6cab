//! PostgreSQL implementation of the id sequence.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::StoreError;
use crate::domain::repositories::SequenceRepository;
use crate::utils::db_error::map_sqlx_error;

/// Key of the singleton counter row.
const COUNTER_ID: &str = "counter";

/// Counter stored as a single row in the `counter` table.
///
/// The increment is one upsert statement, so concurrent callers are
/// serialised by the row lock and never observe the same value.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn next_id(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO counter (id, count)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE SET count = counter.count + 1
            RETURNING count
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn current(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT count FROM counter WHERE id = $1")
            .bind(COUNTER_ID)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.unwrap_or(0))
    }
}
