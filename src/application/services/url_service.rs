//! URL mapping creation, resolution, update and deletion.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::{MappingRepository, SequenceRepository};
use crate::domain::{StoreError, UniqueField};
use crate::error::AppError;
use crate::utils::code_generator::code_candidates;

/// Outcome of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortened {
    /// A new mapping was inserted.
    Created(UrlMapping),
    /// The URL was already mapped; the existing record is returned unchanged.
    Existing(UrlMapping),
}

impl Shortened {
    pub fn mapping(&self) -> &UrlMapping {
        match self {
            Shortened::Created(m) | Shortened::Existing(m) => m,
        }
    }

    pub fn into_mapping(self) -> UrlMapping {
        match self {
            Shortened::Created(m) | Shortened::Existing(m) => m,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Shortened::Created(_))
    }
}

/// Service for the four mapping operations.
///
/// Every store call goes through [`UrlService::guard`], which bounds it by
/// the configured store timeout. The service keeps no state between requests
/// besides the shared repository handles.
pub struct UrlService {
    mappings: Arc<dyn MappingRepository>,
    sequence: Arc<dyn SequenceRepository>,
    store_timeout: Duration,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        mappings: Arc<dyn MappingRepository>,
        sequence: Arc<dyn SequenceRepository>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            mappings,
            sequence,
            store_timeout,
        }
    }

    /// Shortens `url`, reusing the existing mapping if there is one.
    ///
    /// # Code Derivation
    ///
    /// The code is the 4-character digest prefix from
    /// [`crate::utils::code_generator::generate_code`]. If a different URL
    /// already owns that code, the insert is retried with longer prefixes of
    /// the same digest, keeping the id already taken from the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] naming the winning code if a concurrent
    /// request inserted the same URL first.
    ///
    /// Returns [`AppError::Unavailable`] on any other store failure, including
    /// timeouts, and when every digest prefix is already owned by another
    /// mapping. Nothing is retried.
    pub async fn shorten(&self, url: String) -> Result<Shortened, AppError> {
        if let Some(existing) = self
            .guard(self.mappings.find_by_url(&url))
            .await
            .map_err(unavailable)?
        {
            tracing::debug!(code = %existing.code, "URL already shortened");
            metrics::counter!("mappings_existing_total").increment(1);
            return Ok(Shortened::Existing(existing));
        }

        let id = self
            .guard(self.sequence.next_id())
            .await
            .map_err(unavailable)?;
        let created_at = Utc::now();

        for code in code_candidates(&url) {
            let new_mapping = NewMapping {
                id,
                url: url.clone(),
                code,
                created_at,
            };

            match self.guard(self.mappings.insert(new_mapping)).await {
                Ok(mapping) => {
                    tracing::info!(id = mapping.id, code = %mapping.code, "Mapping created");
                    metrics::counter!("mappings_created_total").increment(1);
                    return Ok(Shortened::Created(mapping));
                }
                Err(StoreError::Duplicate(UniqueField::Code)) => {
                    tracing::warn!(id, "Short code collision, retrying with a longer code");
                    metrics::counter!("code_collisions_total").increment(1);
                }
                Err(StoreError::Duplicate(UniqueField::Url)) => {
                    return Err(self.url_taken(&url).await);
                }
                Err(e) => return Err(unavailable(e)),
            }
        }

        tracing::error!(id, "Every short code candidate is taken");
        Err(AppError::unavailable("No free short code left for this URL"))
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has the code. Other store
    /// failures are passed through via `From<StoreError>`.
    pub async fn resolve(&self, code: &str) -> Result<UrlMapping, AppError> {
        self.guard(self.mappings.find_by_code(code))
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Points an existing code at a new URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `new_url` is empty
    /// - [`AppError::Conflict`] naming the owner if `new_url` belongs to a
    ///   different mapping
    /// - [`AppError::NotFound`] if no mapping has `code`
    pub async fn update(&self, code: &str, new_url: &str) -> Result<UrlMapping, AppError> {
        if new_url.trim().is_empty() {
            return Err(AppError::bad_request("url must not be empty"));
        }

        if let Some(owner) = self.guard(self.mappings.find_by_url(new_url)).await?
            && owner.code != code
        {
            metrics::counter!("mappings_conflicts_total").increment(1);
            return Err(conflict(&owner.code));
        }

        match self
            .guard(self.mappings.update_url(code, new_url, Utc::now()))
            .await
        {
            Ok(Some(mapping)) => {
                tracing::info!(code, "Mapping updated");
                Ok(mapping)
            }
            Ok(None) => Err(not_found(code)),
            Err(StoreError::Duplicate(UniqueField::Url)) => Err(self.url_taken(new_url).await),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the mapping with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.guard(self.mappings.delete(code)).await? {
            tracing::info!(code, "Mapping deleted");
            Ok(())
        } else {
            Err(not_found(code))
        }
    }

    /// Checks that the store answers within the timeout.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.guard(self.mappings.ping()).await
    }

    /// Bounds a store call by the configured timeout.
    async fn guard<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.store_timeout, op).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout = ?self.store_timeout, "Store operation timed out");
                metrics::counter!("store_timeouts_total").increment(1);
                Err(StoreError::Timeout(self.store_timeout))
            }
        }
    }

    /// Builds the conflict reported when a URL lost a uniqueness race.
    async fn url_taken(&self, url: &str) -> AppError {
        metrics::counter!("mappings_conflicts_total").increment(1);

        match self.guard(self.mappings.find_by_url(url)).await {
            Ok(Some(owner)) => conflict(&owner.code),
            Ok(None) | Err(_) => AppError::conflict("URL is already shortened"),
        }
    }
}

fn unavailable(e: StoreError) -> AppError {
    match e {
        StoreError::Duplicate(_) => e.into(),
        other => AppError::unavailable(other.to_string()),
    }
}

fn conflict(code: &str) -> AppError {
    AppError::conflict(format!("URL is already shortened as '{code}'"))
}

fn not_found(code: &str) -> AppError {
    AppError::not_found(format!("Short code '{code}' not found"))
}
