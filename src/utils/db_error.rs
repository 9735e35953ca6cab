//! Translation of `sqlx` errors into [`StoreError`].

use crate::domain::{StoreError, UniqueField};

/// Name of the unique constraint on `urls.url`.
pub const URL_UNIQUE_CONSTRAINT: &str = "urls_url_key";

/// Name of the unique constraint on `urls.code`.
pub const CODE_UNIQUE_CONSTRAINT: &str = "urls_code_key";

/// Classifies a driver error.
///
/// Only unique violations on the two known constraints and connection-level
/// failures are recognised; everything else is passed through as
/// [`StoreError::Query`].
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        match db_err.constraint() {
            Some(URL_UNIQUE_CONSTRAINT) => return StoreError::Duplicate(UniqueField::Url),
            Some(CODE_UNIQUE_CONSTRAINT) => return StoreError::Duplicate(UniqueField::Code),
            _ => {}
        }
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}
