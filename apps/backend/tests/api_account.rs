//! Account registration and status API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL environment variable before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test account registration without a name.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_account_without_name() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/account/register")
        .json(&fixtures::account_register_request(None))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert!(body.get("account_id").is_some());
    assert!(body.get("token").is_some());
    assert!(body["token"].as_str().unwrap().len() > 10);

    // Cleanup
    let account_id = body["account_id"].as_str().unwrap();
    let uuid = uuid::Uuid::parse_str(account_id).unwrap();
    ctx.cleanup_account(uuid).await;
}

/// Test account registration with a name.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_account_with_name() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/account/register")
        .json(&fixtures::account_register_request(Some("My Test Account")))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.get("account_id").is_some());

    // Cleanup
    let account_id = body["account_id"].as_str().unwrap();
    let uuid = uuid::Uuid::parse_str(account_id).unwrap();
    ctx.cleanup_account(uuid).await;
}

/// Test account status endpoint requires authentication.
#[tokio::test]
#[ignore = "requires database"]
async fn test_account_status_requires_auth() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/account/status").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test account status with valid token.
#[tokio::test]
#[ignore = "requires database"]
async fn test_account_status_with_valid_token() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (account_id, token) = ctx.create_test_account(Some("Test Account")).await;

    let response = server
        .get("/api/account/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["account_id"].as_str().unwrap(), account_id.to_string());

    // Cleanup
    ctx.cleanup_account(account_id).await;
}

/// Test account status with invalid token.
#[tokio::test]
#[ignore = "requires database"]
async fn test_account_status_with_invalid_token() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/account/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            "Bearer invalid-token-here",
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test account status with malformed authorization header.
#[tokio::test]
#[ignore = "requires database"]
async fn test_account_status_malformed_auth() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    // Missing "Bearer " prefix
    let response = server
        .get("/api/account/status")
        .add_header(axum::http::header::AUTHORIZATION, "some-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test that account status updates last_seen timestamp.
#[tokio::test]
#[ignore = "requires database"]
async fn test_account_status_updates_last_seen() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (account_id, token) = ctx.create_test_account(None).await;

    // First request
    let _ = server
        .get("/api/account/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    // Get account and check last_seen
    let account = ctx.get_account_by_token(&token).await.unwrap();
    let first_seen = account.last_seen_at;

    // Wait a bit
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    // Second request
    let _ = server
        .get("/api/account/status")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    // Check last_seen was updated
    let account = ctx.get_account_by_token(&token).await.unwrap();
    assert!(account.last_seen_at >= first_seen);

    // Cleanup
    ctx.cleanup_account(account_id).await;
}
