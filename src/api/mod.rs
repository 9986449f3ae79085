//! HTTP API module.
//!
//! Provides the local endpoints and the proxy route handlers that forward
//! browser requests to the wiki backend.

mod error;
mod handlers;
mod proxy;
mod routes;
mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
