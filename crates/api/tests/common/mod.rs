#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use formular_api::config::ServerConfig;
use formular_api::router::build_app_router;
use formular_api::state::AppState;
use formular_api::store::MemorySubmissionStore;
use formular_core::catalogue::FieldCatalogue;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        fields_path: None,
        database_url: None,
    }
}

/// Full application router over the built-in field list and an in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(FieldCatalogue::default())
}

pub fn build_test_app_with(catalogue: FieldCatalogue) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        catalogue: Arc::new(catalogue),
        submissions: Arc::new(MemorySubmissionStore::new()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
