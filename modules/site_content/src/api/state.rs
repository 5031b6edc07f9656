//! Application state
//!
//! Arc-wrapped state shared across the HTML and JSON handlers.

use crate::contract::SiteContentApi;
use crate::domain::render::RenderContext;
use crate::domain::{AuthProvider, SessionManager};
use std::sync::Arc;

/// Shared state of every router in this module
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    api: Arc<dyn SiteContentApi>,
    render: RenderContext,
    cache_max_age_secs: u64,
    auth: Arc<dyn AuthProvider>,
    sessions: SessionManager,
}

impl AppState {
    pub fn new(
        api: Arc<dyn SiteContentApi>,
        render: RenderContext,
        cache_max_age_secs: u64,
        auth: Arc<dyn AuthProvider>,
        sessions: SessionManager,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                api,
                render,
                cache_max_age_secs,
                auth,
                sessions,
            }),
        }
    }

    pub fn api(&self) -> &dyn SiteContentApi {
        self.inner.api.as_ref()
    }

    pub fn render(&self) -> &RenderContext {
        &self.inner.render
    }

    /// `Cache-Control` value of cacheable responses
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.inner.cache_max_age_secs)
    }

    pub fn auth(&self) -> &dyn AuthProvider {
        self.inner.auth.as_ref()
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.inner.sessions
    }
}
