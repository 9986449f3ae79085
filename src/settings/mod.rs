//! Runtime configuration.
//!
//! The backend base URL is resolved once at process start from a fixed
//! priority chain of environment variables and handed to the rest of the
//! service through [`Settings`], so handlers never read ambient state.

use std::env;

/// Fallback backend location when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Environment variables consulted for the backend base URL, in priority
/// order: service-specific override first, then the generic one.
const BACKEND_URL_ENV_KEYS: &[&str] = &["PYTHON_BACKEND_HOST", "SERVER_BASE_URL"];

/// Process-wide configuration, sourced once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address to bind the HTTP listener to.
    pub host: String,
    /// Port to bind the HTTP listener to.
    pub port: u16,
    /// Base URL of the wiki backend service.
    pub backend_url: String,
    /// Explicit CORS origins. Empty means localhost dev defaults.
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Resolve the backend base URL from the process environment.
    pub fn backend_url_from_env() -> String {
        resolve_backend_url(|key| env::var(key).ok())
    }
}

/// Return the first non-empty configured value, or the default.
///
/// Takes the lookup as a closure so the priority order is testable without
/// touching the process environment.
pub fn resolve_backend_url(lookup: impl Fn(&str) -> Option<String>) -> String {
    BACKEND_URL_ENV_KEYS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
