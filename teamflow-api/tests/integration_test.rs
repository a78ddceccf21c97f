/// Integration tests for the TeamFlow API
///
/// These tests drive the full router and verify the layers that sit in
/// front of the store:
/// - Authentication (missing, malformed, and forged credentials)
/// - Policy decisions and their externally visible denial reasons
/// - Request validation ordering (handlers reject bad input before I/O)
/// - Failure-class separation (401 vs 400 vs 403 vs 422 vs 503)
///
/// The database pool is lazy and points at a dead port, so any path that
/// reaches the store surfaces as a 503. That makes the ordering assertions
/// sharp: a 403 or 422 proves the request was refused before any query ran.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::TestContext;
use serde_json::json;
use teamflow_shared::models::user::Role;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Health reports degraded (not an error) when the database is unreachable
#[tokio::test]
async fn test_health_degraded_without_database() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["message"], "Missing credentials");
}

#[tokio::test]
async fn test_non_bearer_header_is_bad_request() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let ctx = TestContext::new();

    // Signed with a different secret
    let claims = teamflow_shared::auth::jwt::Claims::new(
        uuid::Uuid::new_v4(),
        Role::Admin,
        teamflow_shared::auth::jwt::TokenType::Access,
    );
    let forged =
        teamflow_shared::auth::jwt::create_token(&claims, "some-other-secret-key-32-bytes!!!")
            .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .header("authorization", format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A refresh token is not valid for API access
#[tokio::test]
async fn test_refresh_token_rejected_as_access_credential() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .header(
            "authorization",
            format!("Bearer {}", ctx.refresh_token(Role::Admin)),
        )
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The user listing is admin only; the member denial carries the generic reason
#[tokio::test]
async fn test_member_cannot_list_users() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .header("authorization", ctx.auth_header(Role::Member))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "forbidden");
    assert_eq!(body["message"], "Forbidden");
}

/// An admin passes the policy check; only the dead store fails afterwards
#[tokio::test]
async fn test_admin_passes_user_listing_policy() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("GET")
        .uri("/v1/users")
        .header("authorization", ctx.auth_header(Role::Admin))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

/// Task creation denies members before validation or store access
#[tokio::test]
async fn test_member_cannot_create_task() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/tasks")
        .header("authorization", ctx.auth_header(Role::Member))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "title": "Write copy",
                "project_id": uuid::Uuid::new_v4(),
            })
            .to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Only admin can add tasks");
}

/// An admin's bad payload fails validation before any query runs
#[tokio::test]
async fn test_task_creation_validates_before_store_access() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/tasks")
        .header("authorization", ctx.auth_header(Role::Admin))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "title": "",
                "project_id": uuid::Uuid::new_v4(),
            })
            .to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "title");
}

/// Project creation is open to members, so only validation can refuse it early
#[tokio::test]
async fn test_member_project_creation_passes_policy() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/projects")
        .header("authorization", ctx.auth_header(Role::Member))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "title": "" }).to_string()))
        .unwrap();

    // 422, not 403: the policy allowed it and validation refused the title
    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "password": "alllowercase1!",
            })
            .to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["details"][0]["field"], "password");
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Jane Doe",
                "email": "not-an-email",
                "password": "SecureP@ss123",
            })
            .to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/v1/auth/refresh")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "refresh_token": ctx.access_token(Role::Member) }).to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A non-UUID task id is rejected by path extraction
#[tokio::test]
async fn test_status_update_rejects_malformed_id() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("PATCH")
        .uri("/v1/tasks/not-a-uuid/status")
        .header("authorization", ctx.auth_header(Role::Admin))
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
