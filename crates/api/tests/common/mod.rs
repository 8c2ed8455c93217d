#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use akiya_api::config::ServerConfig;
use akiya_api::router::build_app_router;
use akiya_api::state::AppState;
use akiya_api::store::PropertyStore;
use akiya_core::error::CoreError;
use akiya_core::generation::{GenerationRequest, ImageGenerator};
use akiya_core::normalize::GenerationOutput;
use akiya_core::resolver::ImageResolver;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const MULTIPART_BOUNDARY: &str = "akiya-test-boundary";

/// Build a test `ServerConfig` with safe defaults and no upstream token.
pub fn test_config(demo_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: "static".to_string(),
        demo_assets_dir: demo_dir.to_string_lossy().to_string(),
        max_upload_bytes: 1024 * 1024,
        replicate: None,
    }
}

fn state_with(
    demo_dir: &Path,
    generator: Option<Arc<dyn ImageGenerator>>,
) -> (AppState, ServerConfig) {
    let config = test_config(demo_dir);
    let state = AppState {
        store: Arc::new(PropertyStore::seeded()),
        resolver: Arc::new(ImageResolver::new(demo_dir)),
        generator,
    };
    (state, config)
}

/// App in mock mode (no generator configured).
pub fn build_test_app() -> Router {
    let (state, config) = state_with(Path::new("/nonexistent/demo-images"), None);
    build_app_router(state, &config)
}

/// App in live mode, generating through `generator` and reading demo
/// photos from `demo_dir`.
pub fn build_live_app(generator: Arc<FakeGenerator>, demo_dir: &Path) -> Router {
    let (state, config) = state_with(demo_dir, Some(generator as Arc<dyn ImageGenerator>));
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake generator
// ---------------------------------------------------------------------------

/// Records every request and answers with a canned result.
pub struct FakeGenerator {
    result: Result<GenerationOutput, String>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn returning(output: GenerationOutput) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(output),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(detail.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, CoreError> {
        self.requests.lock().unwrap().push(request);
        self.result.clone().map_err(CoreError::Upstream)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form with a single `file` part.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Upload a small PNG to `house_id` and return the new image id.
pub async fn upload_png(app: Router, house_id: &str) -> String {
    let response = post_multipart(
        app,
        &format!("/api/upload/{house_id}"),
        "test.png",
        "image/png",
        b"\x89PNG\r\n\x1a\nfake",
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["image_id"]
        .as_str()
        .unwrap()
        .to_string()
}
