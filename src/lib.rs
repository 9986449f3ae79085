//! Wikigate - browser-facing proxy for the wiki backend API.
//!
//! Route handlers forward authenticated browser requests to the backend
//! service, preserving credentials and normalizing error responses.

pub mod api;
pub mod settings;
pub mod upstream;
