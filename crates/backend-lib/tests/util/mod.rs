//! Shared helpers for the HTTP integration tests: build a seeded app and
//! drive it through `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backend_lib::{config::Settings, router, seed, AppState};
use tower::ServiceExt;

pub fn test_settings() -> Settings {
    Settings {
        bind_addr: ([127, 0, 0, 1], 0).into(),
        log_level: "info".to_string(),
        token_secret: "integration-test-secret".to_string(),
        token_ttl_secs: 3600,
    }
}

/// Application state with the default administrator seeded.
pub async fn app_state() -> Arc<AppState> {
    let state = Arc::new(AppState::new(test_settings()));
    seed::ensure_default_admin(&state)
        .await
        .expect("seeding should succeed");
    state
}

/// Router plus the state behind it (for service-level assertions).
pub async fn app() -> (Router, Arc<AppState>) {
    let state = app_state().await;
    (router::create_router(Arc::clone(&state)), state)
}

/// Send one request and return status plus parsed JSON body (or `Null` for
/// an empty body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register an account and return its id.
pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["user"]["id"].as_str().unwrap().to_string()
}

/// Log in and return the bearer token.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Token for the seeded default administrator.
pub async fn admin_token(app: &Router) -> String {
    login(app, seed::DEFAULT_ADMIN_EMAIL, seed::DEFAULT_ADMIN_PASSWORD).await
}
