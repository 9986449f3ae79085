//! Proxy dispatcher: forwards one request to the wiki backend and
//! normalizes the reply.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::credentials::ForwardedCredentials;

/// JSON fields probed for a human-readable error message, in priority order.
const ERROR_MESSAGE_FIELDS: &[&str] = &["detail", "error"];

/// Message used when a caught error carries no text of its own.
const GENERIC_FAILURE_MESSAGE: &str = "Internal Server Error";

/// Outcome of a single proxied request.
///
/// The status code always reflects the backend's own status when a reply was
/// received; transport failures are fixed at 500.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    /// Backend replied with a success status; body is relayed untouched.
    Success(u16, Value),
    /// Backend replied with an error, or the outbound call itself failed.
    Failure(u16, String),
}

/// Client for forwarding requests to the wiki backend service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward one request to the backend and normalize the reply.
    ///
    /// Only non-absent query parameters should be passed in `query`; the
    /// forwarded cookie is always attached, the authorization header only
    /// when one was forwarded. A single transport failure is surfaced
    /// immediately as `Failure(500, ...)`; there is no retry.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        credentials: &ForwardedCredentials,
    ) -> ProxyOutcome {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching backend request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Cookie", credentials.cookie());
        if let Some(authorization) = credentials.authorization() {
            request = request.header("Authorization", authorization);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                error!(%url, error = %err, "backend request failed");
                return ProxyOutcome::Failure(500, caught_message(&err));
            }
        };

        let status = response.status().as_u16();
        if response.status().is_success() {
            match response.json::<Value>().await {
                Ok(body) => ProxyOutcome::Success(status, body),
                Err(err) => {
                    error!(%url, error = %err, "failed to parse backend response body");
                    ProxyOutcome::Failure(500, caught_message(&err))
                }
            }
        } else {
            let text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&text)
                .unwrap_or_else(|| format!("Backend request failed with status {status}"));
            warn!(%url, status, "backend returned error");
            ProxyOutcome::Failure(status, message)
        }
    }
}

fn caught_message(err: &reqwest::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

/// Best-effort extraction of a human-readable message from an error body.
///
/// Probes the JSON fields listed in [`ERROR_MESSAGE_FIELDS`] in order, then
/// falls back to the raw body text. Returns `None` for an empty body.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for field in ERROR_MESSAGE_FIELDS {
            if let Some(message) = value.get(field).and_then(Value::as_str) {
                return Some(message.to_string());
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
