//! Classification of failures reported by the mapping store.
//!
//! Store implementations translate their driver errors into [`StoreError`]
//! so the application layer can tell a lost uniqueness race apart from an
//! unreachable store without knowing which database sits underneath.

use std::time::Duration;

/// Column guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Url,
    Code,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::Url => f.write_str("url"),
            UniqueField::Code => f.write_str("code"),
        }
    }
}

/// Errors that can occur while talking to the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write was rejected by a uniqueness constraint.
    #[error("Duplicate value for unique field `{0}`")]
    Duplicate(UniqueField),

    /// The store could not be reached or dropped the connection.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The operation did not finish before its deadline.
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),

    /// Any other error reported by the store, passed through verbatim.
    #[error("Store error: {0}")]
    Query(String),
}

impl StoreError {
    /// Returns true for failures caused by the store being unreachable or slow.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Timeout(_))
    }
}
