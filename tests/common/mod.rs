#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shorten_service::application::services::UrlService;
use shorten_service::domain::entities::{NewMapping, UrlMapping};
use shorten_service::domain::repositories::{MappingRepository, SequenceRepository};
use shorten_service::domain::{StoreError, UniqueField};
use shorten_service::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory mapping store enforcing the same uniqueness rules as the
/// `urls` table.
#[derive(Default)]
pub struct InMemoryMappings {
    rows: Mutex<HashMap<String, UrlMapping>>,
    delay: Option<Duration>,
}

impl InMemoryMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that takes `delay` to answer every call.
    pub fn slow(delay: Duration) -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            delay: Some(delay),
        }
    }

    pub async fn seed(&self, id: i64, url: &str, code: &str) {
        let now = Utc::now();
        self.rows.lock().await.insert(
            code.to_string(),
            UrlMapping::new(id, url.to_string(), code.to_string(), now, now),
        );
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappings {
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, StoreError> {
        self.wait().await;
        Ok(self
            .rows
            .lock()
            .await
            .values()
            .find(|m| m.url == url)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        self.wait().await;
        Ok(self.rows.lock().await.get(code).cloned())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        self.wait().await;
        let mut rows = self.rows.lock().await;

        if rows.values().any(|m| m.url == new_mapping.url) {
            return Err(StoreError::Duplicate(UniqueField::Url));
        }
        if rows.contains_key(&new_mapping.code) {
            return Err(StoreError::Duplicate(UniqueField::Code));
        }

        let mapping = new_mapping.into_mapping();
        rows.insert(mapping.code.clone(), mapping.clone());
        Ok(mapping)
    }

    async fn update_url(
        &self,
        code: &str,
        url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlMapping>, StoreError> {
        self.wait().await;
        let mut rows = self.rows.lock().await;

        if rows.values().any(|m| m.url == url && m.code != code) {
            return Err(StoreError::Duplicate(UniqueField::Url));
        }

        Ok(rows.get_mut(code).map(|m| {
            m.url = url.to_string();
            m.updated_at = updated_at.max(m.created_at);
            m.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        self.wait().await;
        Ok(self.rows.lock().await.remove(code).is_some())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.wait().await;
        Ok(self.rows.lock().await.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.wait().await;
        Ok(())
    }
}

/// In-memory counter with the same upsert-on-first-use semantics.
#[derive(Default)]
pub struct InMemorySequence {
    count: AtomicI64,
}

#[async_trait]
impl SequenceRepository for InMemorySequence {
    async fn next_id(&self) -> Result<i64, StoreError> {
        Ok(self.count.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn current(&self) -> Result<i64, StoreError> {
        Ok(self.count.load(Ordering::SeqCst))
    }
}

/// Store whose every call fails as if the database were down.
pub struct UnreachableStore;

#[async_trait]
impl MappingRepository for UnreachableStore {
    async fn find_by_url(&self, _url: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(unreachable_error())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(unreachable_error())
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        Err(unreachable_error())
    }

    async fn update_url(
        &self,
        _code: &str,
        _url: &str,
        _updated_at: DateTime<Utc>,
    ) -> Result<Option<UrlMapping>, StoreError> {
        Err(unreachable_error())
    }

    async fn delete(&self, _code: &str) -> Result<bool, StoreError> {
        Err(unreachable_error())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(unreachable_error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_error())
    }
}

#[async_trait]
impl SequenceRepository for UnreachableStore {
    async fn next_id(&self) -> Result<i64, StoreError> {
        Err(unreachable_error())
    }

    async fn current(&self) -> Result<i64, StoreError> {
        Err(unreachable_error())
    }
}

fn unreachable_error() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

/// State over fresh in-memory repositories, returned alongside the mapping
/// store so tests can inspect it.
pub fn create_test_state() -> (AppState, Arc<InMemoryMappings>) {
    let mappings = Arc::new(InMemoryMappings::new());
    let state = state_with(mappings.clone(), Arc::new(InMemorySequence::default()), TEST_TIMEOUT);
    (state, mappings)
}

pub fn state_with(
    mappings: Arc<dyn MappingRepository>,
    sequence: Arc<dyn SequenceRepository>,
    store_timeout: Duration,
) -> AppState {
    AppState::new(Arc::new(UrlService::new(mappings, sequence, store_timeout)))
}

pub fn unreachable_state() -> AppState {
    state_with(
        Arc::new(UnreachableStore),
        Arc::new(UnreachableStore),
        TEST_TIMEOUT,
    )
}
