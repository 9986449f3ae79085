//! Proxy route handlers.
//!
//! Each handler forwards the inbound request to a fixed backend resource,
//! preserving credentials and relaying the normalized outcome. Beyond the
//! required-parameter check on the task status route, no validation happens
//! here; authentication and business rules are the backend's job.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::Method;
use serde::Deserialize;

use crate::upstream::{ForwardedCredentials, ProxyOutcome};

use super::error::{ApiError, ApiResult, ErrorResponse};
use super::state::AppState;

/// Convert a dispatcher outcome into the outbound HTTP response.
///
/// Success bodies pass through unmodified; failures take the uniform
/// `{"error"}` envelope with the normalized status.
fn relay(outcome: ProxyOutcome) -> Response {
    match outcome {
        ProxyOutcome::Success(status, body) => (status_from(status), Json(body)).into_response(),
        ProxyOutcome::Failure(status, message) => {
            (status_from(status), Json(ErrorResponse { error: message })).into_response()
        }
    }
}

fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Repository permission set for the current session.
///
/// GET /api/permissions
pub async fn get_permissions(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let credentials = ForwardedCredentials::from_headers(&headers);
    relay(
        state
            .upstream
            .dispatch(Method::GET, "/api/auth/permissions", &[], &credentials)
            .await,
    )
}

/// Query parameters for the cached projects route.
#[derive(Debug, Deserialize)]
pub struct CacheQuery {
    pub email: Option<String>,
}

/// Cached project list for a user, read straight from the backend cache.
///
/// GET /api/projects/cache?email=...
pub async fn get_cached_projects(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
    headers: HeaderMap,
) -> Response {
    let credentials = ForwardedCredentials::from_headers(&headers);

    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(email) = query.email {
        params.push(("email", email));
    }

    relay(
        state
            .upstream
            .dispatch(Method::GET, "/gitlab/cache", &params, &credentials)
            .await,
    )
}

/// Single-shot task status read, polled by clients until a terminal state.
///
/// GET /api/tasks/{task_id}/status
///
/// The task state machine lives in the backend; this handler relays the
/// current `status`/`progress` verbatim. An empty task id is rejected before
/// any backend call is attempted.
pub async fn get_task_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    if task_id.trim().is_empty() {
        return Err(ApiError::bad_request("Task ID is required"));
    }

    let credentials = ForwardedCredentials::from_headers(&headers);
    let path = format!("/api/tasks/{}/status", urlencoding::encode(&task_id));

    Ok(relay(
        state
            .upstream
            .dispatch(Method::GET, &path, &[], &credentials)
            .await,
    ))
}

/// Wiki structure for a project.
///
/// GET /api/wiki/{project_key}/structure
///
/// The project key arrives URL-decoded from the router and is re-encoded
/// when composed into the backend path, so keys containing `/` survive.
pub async fn get_wiki_structure(
    State(state): State<AppState>,
    Path(project_key): Path<String>,
    headers: HeaderMap,
) -> Response {
    let credentials = ForwardedCredentials::from_headers(&headers);
    let path = format!(
        "/api/wiki/projects/{}/structure",
        urlencoding::encode(&project_key)
    );

    relay(
        state
            .upstream
            .dispatch(Method::GET, &path, &[], &credentials)
            .await,
    )
}

/// Current-user lookup against the backend SSO session.
///
/// GET /api/auth/user
pub async fn get_current_user(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let credentials = ForwardedCredentials::from_headers(&headers);
    relay(
        state
            .upstream
            .dispatch(Method::GET, "/api/auth/sso/user", &[], &credentials)
            .await,
    )
}
