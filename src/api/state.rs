//! Application state shared across handlers.

use std::sync::Arc;

use crate::settings::Settings;
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// The proxy layer is stateless per request; this only carries the
/// configuration snapshot and the backend client built from it.
#[derive(Clone)]
pub struct AppState {
    /// Configuration resolved once at process start.
    pub settings: Arc<Settings>,
    /// HTTP client for forwarding requests to the wiki backend.
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create new application state from resolved settings.
    pub fn new(settings: Settings) -> Self {
        let upstream = UpstreamClient::new(settings.backend_url.clone());
        Self {
            settings: Arc::new(settings),
            upstream,
        }
    }
}
