//! HTTP-level integration tests for the OTP login and session endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login, post_json, TEST_OTP};
use serde_json::json;
use sqlx::PgPool;

const PHONE: &str = "9876543210";

#[sqlx::test(migrations = "../../db/migrations")]
async fn send_otp_echoes_code_in_mock_mode(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/send-otp", json!({ "phone": PHONE })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], TEST_OTP);
    assert!(json["expires_at"].is_string());
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn send_otp_rejects_short_phone(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/send-otp", json!({ "phone": "12345" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PHONE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_otp_creates_user_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let first = login(&app, PHONE).await;
    assert!(first["access_token"].is_string());
    assert!(first["refresh_token"].is_string());
    assert!(first["expires_at"].is_string());
    assert_eq!(first["user"]["phone"], PHONE);

    let second = login(&app, PHONE).await;
    assert_eq!(first["user"]["id"], second["user"]["id"]);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_otp_with_wrong_code_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/v1/auth/send-otp", json!({ "phone": PHONE })).await;

    let response = post_json(
        app,
        "/api/v1/auth/verify-otp",
        json!({ "phone": PHONE, "otp": "000000" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_otp_is_single_use(pool: PgPool) {
    let app = common::build_test_app(pool);
    login(&app, PHONE).await;

    let response = post_json(
        app,
        "/api/v1/auth/verify-otp",
        json!({ "phone": PHONE, "otp": TEST_OTP }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_otp_without_challenge_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/verify-otp",
        json!({ "phone": PHONE, "otp": TEST_OTP }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_otp_rejects_wrong_length_code(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/verify-otp",
        json!({ "phone": PHONE, "otp": "12345" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_issues_new_pair(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = login(&app, PHONE).await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": session["refresh_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let refreshed = body_json(response).await;
    assert_eq!(refreshed["user"]["id"], session["user"]["id"]);

    let token = refreshed["access_token"].as_str().unwrap();
    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rejects_access_token_and_garbage(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = login(&app, PHONE).await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": session["access_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": "not-a-jwt" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_for_deleted_user_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let session = login(&app, PHONE).await;

    sqlx::query("DELETE FROM users").execute(&pool).await.unwrap();

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": session["refresh_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_current_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = login(&app, PHONE).await;
    let token = session["access_token"].as_str().unwrap();

    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], session["user"]["id"]);
    assert_eq!(json["phone"], PHONE);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_access_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = login(&app, PHONE).await;

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let refresh = session["refresh_token"].as_str().unwrap();
    let response = get_auth(app, "/api/v1/auth/me", refresh).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
