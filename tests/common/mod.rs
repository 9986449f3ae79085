//! Test utilities: a recording mock backend and app factory.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use wikigate::api::{AppState, create_router};
use wikigate::settings::Settings;

/// One request as observed by the mock backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Clone)]
struct RecorderState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    reply_status: StatusCode,
    reply_body: String,
    reply_content_type: &'static str,
}

/// Catch-all handler: records the request and returns the canned reply.
async fn record(State(state): State<RecorderState>, request: Request<Body>) -> Response {
    let headers = request.headers();
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let captured = CapturedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        cookie: header_str(header::COOKIE),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
    };
    state.requests.lock().await.push(captured);

    (
        state.reply_status,
        [(header::CONTENT_TYPE, state.reply_content_type)],
        state.reply_body.clone(),
    )
        .into_response()
}

/// Handle onto a spawned mock backend.
pub struct MockBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn hits(&self) -> usize {
        self.requests.lock().await.len()
    }
}

/// Spawn a mock backend that answers every request with a canned JSON body.
#[allow(dead_code)]
pub async fn spawn_backend_json(status: u16, body: serde_json::Value) -> MockBackend {
    spawn_backend(status, body.to_string(), "application/json").await
}

/// Spawn a mock backend on an ephemeral port with a fixed reply.
pub async fn spawn_backend(status: u16, body: String, content_type: &'static str) -> MockBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = RecorderState {
        requests: requests.clone(),
        reply_status: StatusCode::from_u16(status).unwrap(),
        reply_body: body,
        reply_content_type: content_type,
    };

    let router = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockBackend {
        url: format!("http://{addr}"),
        requests,
    }
}

/// Build the wikigate router pointed at the given backend URL.
pub fn test_app(backend_url: &str) -> Router {
    let settings = Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        backend_url: backend_url.to_string(),
        allowed_origins: Vec::new(),
    };
    create_router(AppState::new(settings))
}

/// A base URL that nothing is listening on (connection refused).
#[allow(dead_code)]
pub async fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
