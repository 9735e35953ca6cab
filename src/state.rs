use std::sync::Arc;

use crate::application::services::UrlService;

/// Shared state injected into every handler.
///
/// Built once at startup. Cloning only bumps reference counts; request data
/// never lives here.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
