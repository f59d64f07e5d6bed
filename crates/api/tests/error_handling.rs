//! Error responses produced before a handler body runs: authentication,
//! path and payload rejections.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{access_token, body_json};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_unauthorized_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/projects").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_bearer_scheme_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/api/v1/projects")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/labours", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_id_in_path_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;

    let response = common::get_auth(app, "/api/v1/labours/not-a-uuid", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_body_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/projects")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_amount_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let response = common::post_json_auth(
        app,
        "/api/v1/labours",
        serde_json::json!({ "name": "Ramesh", "daily_wage": "five hundred" }),
        &token,
    )
    .await;

    assert!(response.status().is_client_error());
}
