//! Repository trait for the shared id sequence.

use crate::domain::store_error::StoreError;
use async_trait::async_trait;

/// Singleton counter handing out mapping ids.
///
/// The counter lives in the store rather than being derived from the number
/// of mappings, so concurrent creations never receive the same id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Increments the counter and returns its new value in one atomic step.
    ///
    /// The counter document is created with value `1` on first use.
    async fn next_id(&self) -> Result<i64, StoreError>;

    /// Returns the current counter value, or `0` if no id was ever issued.
    async fn current(&self) -> Result<i64, StoreError>;
}
