#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use thekedar_api::auth::delivery::OtpProvider;
use thekedar_api::auth::jwt::JwtConfig;
use thekedar_api::auth::otp::OtpConfig;
use thekedar_api::auth::session::SessionManager;
use thekedar_api::config::ServerConfig;
use thekedar_api::router::build_app_router;
use thekedar_api::state::AppState;

/// Passcode the test server issues for every challenge.
pub const TEST_OTP: &str = "123456";

/// Build a test `ServerConfig` with safe defaults and a fixed mock passcode.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_hours: 24,
            refresh_token_expiry_days: 7,
        },
        otp: OtpConfig {
            ttl_secs: 300,
            sweep_interval_secs: 60,
            provider: OtpProvider::Mock {
                fixed_code: Some(TEST_OTP.to_string()),
            },
        },
    }
}

/// Build the full application router over `pool`, with the same middleware
/// stack the binary uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let sessions = SessionManager::start(config.jwt.clone(), &config.otp);
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
        sessions,
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a decimal that was serialized as a JSON string.
pub fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {value}"))
        .parse()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Domain helpers
// ---------------------------------------------------------------------------

/// Log in `phone` through the OTP flow and return the full session JSON.
pub async fn login(app: &Router, phone: &str) -> Value {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/send-otp",
        serde_json::json!({ "phone": phone }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/verify-otp",
        serde_json::json!({ "phone": phone, "otp": TEST_OTP }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Log in `phone` and return only the access token.
pub async fn access_token(app: &Router, phone: &str) -> String {
    login(app, phone).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a project and return its id.
pub async fn create_project(app: &Router, token: &str, name: &str) -> String {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Create a labourer and return its id.
pub async fn create_labour(app: &Router, token: &str, name: &str, wage: &str) -> String {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/labours",
        serde_json::json!({ "name": name, "daily_wage": wage }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Assign a labourer to a project.
pub async fn assign(app: &Router, token: &str, project_id: &str, labour_id: &str) {
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/labours"),
        serde_json::json!({ "labour_id": labour_id }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
