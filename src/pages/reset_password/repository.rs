use crate::api::{ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn validate_token(&self, token: String) -> Result<(), ApiError> {
        self.client.validate_reset_token(token).await
    }

    pub async fn reset_password(
        &self,
        token: String,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(token, new_password).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ResetPasswordRepository {
        ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn validate_token_accepts_known_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/auth/validate-reset-token");
            then.status(200).json_body(json!({}));
        });

        let repo = repository(&server);
        repo.validate_token("valid-token".into()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn validate_token_rejects_expired_token() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/validate-reset-token");
            then.status(400).json_body(json!({
                "error": "token expired",
                "code": "VALIDATION_ERROR"
            }));
        });

        let repo = repository(&server);
        repo.validate_token("abc".into())
            .await
            .expect_err("expired token should be rejected");
    }

    #[tokio::test]
    async fn reset_password_calls_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/reset-password");
            then.status(200)
                .json_body(json!({ "message": "password reset complete" }));
        });

        let repo = repository(&server);
        let response = repo
            .reset_password("valid-token".into(), "Valid1Pass!".into())
            .await
            .unwrap();
        assert_eq!(response.message, "password reset complete");
    }

    #[tokio::test]
    async fn reset_password_propagates_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/reset-password");
            then.status(400).json_body(json!({ "message": "Token expired" }));
        });

        let repo = repository(&server);
        let error = repo
            .reset_password("expired-token".into(), "Valid1Pass!".into())
            .await
            .expect_err("should return backend error");
        assert_eq!(error.error, "Token expired");
    }
}
