//! HTTP-level integration tests for projects and labour assignment.

mod common;

use axum::http::StatusCode;
use common::{
    access_token, assign, body_json, create_labour, create_project, delete_auth, get_auth,
    post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects",
        json!({ "name": "Sector 21 villa", "description": "Two floors" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Sector 21 villa");
    assert_eq!(json["description"], "Two floors");
    assert_eq!(json["user_id"], created["user_id"]);
    assert_eq!(json["labours"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_is_invalid(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;

    let response =
        post_json_auth(app, "/api/v1/projects", json!({ "name": "   " }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_NAME");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_description_is_invalid(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        json!({ "name": "Site", "description": "x".repeat(1001) }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_DESCRIPTION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_shows_only_own_projects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = access_token(&app, "9000000001").await;
    let bob = access_token(&app, "9000000002").await;
    create_project(&app, &alice, "A1").await;
    create_project(&app, &alice, "A2").await;
    create_project(&app, &bob, "B1").await;

    let response = get_auth(app, "/api/v1/projects", &alice).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_and_missing_projects_are_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = access_token(&app, "9000000001").await;
    let bob = access_token(&app, "9000000002").await;
    let project = create_project(&app, &alice, "Alice's site").await;
    let uri = format!("/api/v1/projects/{project}");

    let response = get_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let response = put_json_auth(app.clone(), &uri, json!({ "name": "Mine now" }), &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let missing = format!("/api/v1/projects/{}", uuid::Uuid::new_v4());
    let response = get_auth(app, &missing, &alice).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_name_and_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Old").await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{project}"),
        json!({ "name": "New", "description": "Renovation" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "New");
    assert_eq!(json["description"], "Renovation");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_then_access_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Temp").await;
    let uri = format!("/api/v1/projects/{project}");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assigning_twice_lists_once(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Site").await;
    let labour = create_labour(&app, &token, "Ramesh", "800.00").await;

    assign(&app, &token, &project, &labour).await;
    assign(&app, &token, &project, &labour).await;

    let response = get_auth(
        app.clone(),
        &format!("/api/v1/projects/{project}/labours"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let labours = json["data"].as_array().unwrap();
    assert_eq!(labours.len(), 1);
    assert_eq!(labours[0]["id"], labour.as_str());

    let response = get_auth(app, &format!("/api/v1/projects/{project}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["labours"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assigning_missing_labour_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Site").await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{project}/labours"),
        json!({ "labour_id": uuid::Uuid::new_v4() }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removing_assignment_twice_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Site").await;
    let labour = create_labour(&app, &token, "Ramesh", "800.00").await;
    assign(&app, &token, &project, &labour).await;
    let uri = format!("/api/v1/projects/{project}/labours/{labour}");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_project_keeps_labour(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token(&app, "9000000001").await;
    let project = create_project(&app, &token, "Site").await;
    let labour = create_labour(&app, &token, "Ramesh", "800.00").await;
    assign(&app, &token, &project, &labour).await;

    let response = delete_auth(app.clone(), &format!("/api/v1/projects/{project}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/labours/{labour}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
