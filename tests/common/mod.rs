use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use dashboard::{create_router, AppState, BuildConfig, Config};
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
}

pub fn spawn_app(build_config: BuildConfig) -> TestApp {
    let state = Arc::new(AppState {
        config: Config::default(),
        build_config,
    });

    let router = create_router(state.clone());

    TestApp { router, state }
}

pub fn setup_test_app() -> TestApp {
    spawn_app(BuildConfig::default())
}

/// Issue a GET and return the status with the body as text.
#[allow(dead_code)]
pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, String) {
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
