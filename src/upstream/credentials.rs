//! Credential forwarding.

use axum::http::{HeaderMap, header};

/// Credentials lifted off an inbound request and replayed on the backend call.
///
/// The values are opaque to this layer: never parsed, never mutated, never
/// logged in full. Authentication decisions belong entirely to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedCredentials {
    cookie: String,
    authorization: Option<String>,
}

impl ForwardedCredentials {
    /// Read the `Cookie` and `Authorization` headers from an inbound request.
    ///
    /// A missing cookie header becomes the empty string; a missing
    /// authorization header stays absent so it is omitted from the outbound
    /// request rather than sent blank.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Self {
            cookie,
            authorization,
        }
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
