use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn validate_reset_token_accepts_success_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/validate-reset-token");
        then.status(200).json_body(json!({ "message": "ok" }));
    });

    let client = api_client(&server);
    client.validate_reset_token("valid-token".into()).await.unwrap();
}

#[tokio::test]
async fn validate_reset_token_sends_token_in_body() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/validate-reset-token")
            .json_body(json!({ "token": "abc" }));
        then.status(200).json_body(json!({}));
    });

    let client = api_client(&server);
    client.validate_reset_token("abc".into()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn validate_reset_token_surfaces_rejection() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/validate-reset-token");
        then.status(400).json_body(json!({
            "error": "token expired",
            "code": "VALIDATION_ERROR"
        }));
    });

    let client = api_client(&server);
    let error = client
        .validate_reset_token("abc".into())
        .await
        .expect_err("should reject");
    assert_eq!(error.error, "token expired");
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn validate_reset_token_falls_back_on_unparseable_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/validate-reset-token");
        then.status(500).body("upstream blew up");
    });

    let client = api_client(&server);
    let error = client
        .validate_reset_token("abc".into())
        .await
        .expect_err("should reject");
    assert_eq!(error.error, "Invalid or expired reset token");
    assert_eq!(error.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn reset_password_returns_message_on_success() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/reset-password")
            .json_body(json!({ "token": "tok", "newPassword": "Valid1Pass!" }));
        then.status(200)
            .json_body(json!({ "message": "password reset complete" }));
    });

    let client = api_client(&server);
    let response = client
        .reset_password("tok".into(), "Valid1Pass!".into())
        .await
        .unwrap();
    assert_eq!(response.message, "password reset complete");
    mock.assert_async().await;
}

#[tokio::test]
async fn reset_password_surfaces_backend_message_field() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/reset-password");
        then.status(400).json_body(json!({ "message": "Token expired" }));
    });

    let client = api_client(&server);
    let error = client
        .reset_password("tok".into(), "Valid1Pass!".into())
        .await
        .expect_err("should reject");
    assert_eq!(error.error, "Token expired");
}

#[tokio::test]
async fn reset_password_uses_generic_fallback_when_error_has_no_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/reset-password");
        then.status(500).json_body(json!({ "ok": false }));
    });

    let client = api_client(&server);
    let error = client
        .reset_password("tok".into(), "Valid1Pass!".into())
        .await
        .expect_err("should reject");
    assert_eq!(error.error, "Failed to reset password");
    assert_eq!(error.code, "REQUEST_FAILED");
}
