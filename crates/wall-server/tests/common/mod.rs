//! Test harness: an app state backed by a temp directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use wall_core::config::WallConfig;
use wall_server::{build_state, router, AppState};

pub struct TestApp {
    pub state: Arc<AppState>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn start(default_locale: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WallConfig {
            default_locale: default_locale.to_string(),
            data_dir: Some(dir.path().join("data")),
            uploads_dir: Some(dir.path().join("uploads")),
            ..WallConfig::default()
        };
        let state = build_state(cfg).await.unwrap();
        Self { state, _dir: dir }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        router(Arc::clone(&self.state)).oneshot(req).await.unwrap()
    }
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}
