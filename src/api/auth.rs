use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, ResetPasswordRequest, ValidateResetTokenRequest},
};

impl ApiClient {
    /// Checks a reset token against the auth service. The body of a
    /// success response carries no information for us.
    pub async fn validate_reset_token(&self, token: String) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/validate-reset-token", base_url))
            .json(&ValidateResetTokenRequest { token })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(response, "Invalid or expired reset token").await)
        }
    }

    pub async fn reset_password(
        &self,
        token: String,
        new_password: String,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/reset-password", base_url))
            .json(&ResetPasswordRequest {
                token,
                new_password,
            })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error(response, "Failed to reset password").await)
        }
    }
}
