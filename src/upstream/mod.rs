//! Wiki backend HTTP client module.
//!
//! Provides the proxy dispatcher used by the API route handlers.

mod client;
mod credentials;

pub use client::{ProxyOutcome, UpstreamClient, extract_error_message};
pub use credentials::ForwardedCredentials;
