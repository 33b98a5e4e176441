use reqwest::{Client, Response};
use serde_json::Value;

use crate::{api::types::ApiError, config};

pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Decodes a non-2xx response body into an `ApiError`. The auth
    /// service reports `{error, code}`, but some upstream proxies answer
    /// with `{message}` only; anything else falls back to the caller's
    /// generic message.
    pub(crate) async fn decode_error(response: Response, fallback: &str) -> ApiError {
        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(_) => return ApiError::request_failed(fallback),
        };

        let message = body
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        match message {
            Some(error) => ApiError {
                error,
                code: body
                    .get("code")
                    .and_then(Value::as_str)
                    .unwrap_or("REQUEST_FAILED")
                    .to_string(),
                details: body.get("details").cloned(),
            },
            None => ApiError::request_failed(fallback),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
