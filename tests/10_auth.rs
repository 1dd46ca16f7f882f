mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use uuid::Uuid;

use journal_api::auth::issue_token;

#[tokio::test]
async fn health_and_root_respond() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, common::get("/health")).await;
    assert_eq!(status, StatusCode::OK, "unexpected health status: {}", body);
    assert_eq!(body["data"]["status"], "ok");

    let (status, body) = common::send(&app, common::get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Journal API");

    Ok(())
}

#[tokio::test]
async fn public_routes_require_no_credential() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, common::get("/journal")).await;
    assert_eq!(status, StatusCode::OK, "list failed: {}", body);
    assert_eq!(body["success"], true);
    assert!(body["data"].as_array().is_some_and(|a| a.is_empty()));

    let (status, body) = common::send(&app, common::get("/journal/search/anything")).await;
    assert_eq!(status, StatusCode::OK, "search failed: {}", body);
    assert!(body["data"].as_array().is_some_and(|a| a.is_empty()));

    Ok(())
}

#[tokio::test]
async fn protected_routes_reject_missing_credentials() -> Result<()> {
    let app = common::test_app();
    let payload = json!({ "journal": { "title": "t", "date": "2024-01-01", "entry": "e" } });
    let id = Uuid::new_v4();

    let (status, body) = common::send(&app, common::get("/api/journal/mine")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "unexpected: {}", body);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Missing Authorization header");

    let req = common::json_request("POST", "/api/journal", None, &payload);
    let (status, _) = common::send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = common::json_request("PUT", &format!("/api/journal/{}", id), None, &payload);
    let (status, _) = common::send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/journal/{}", id))
        .body(Body::empty())?;
    let (status, _) = common::send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn malformed_credentials_are_unauthorized_not_server_errors() -> Result<()> {
    let app = common::test_app();

    // Wrong scheme
    let req = Request::builder()
        .uri("/api/journal/mine")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())?;
    let (status, body) = common::send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "unexpected: {}", body);
    assert_eq!(body["code"], "UNAUTHORIZED");

    // Garbage token
    let (status, body) =
        common::send(&app, common::get_authed("/api/journal/mine", "not.a.token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "unexpected: {}", body);

    // Token signed with a different secret
    let forged = issue_token(Uuid::new_v4(), "some-other-secret", 1)?;
    let (status, body) = common::send(&app, common::get_authed("/api/journal/mine", &forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED, "unexpected: {}", body);
    assert_eq!(body["error"], true);

    Ok(())
}

#[tokio::test]
async fn valid_tokens_pass_the_gate() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer_for(Uuid::new_v4());

    let (status, body) = common::send(&app, common::get_authed("/api/journal/mine", &token)).await;
    assert_eq!(status, StatusCode::OK, "unexpected: {}", body);
    assert_eq!(body["success"], true);
    assert!(body["data"].as_array().is_some_and(|a| a.is_empty()));

    Ok(())
}
