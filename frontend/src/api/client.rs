use reqwest::{header, Client};
use std::sync::Arc;

use crate::api::types::*;
use crate::config;
use crate::state::tokens::{BrowserTokens, SharedTokens, TokenSlot};

/// HTTP client for the remote API. Holds the token store but never clears
/// tokens itself; auth rejections surface as `ApiError::AuthRejected` and
/// the owning flow decides what to discard.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: SharedTokens,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: Arc::new(BrowserTokens),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            tokens: Arc::new(BrowserTokens),
        }
    }

    pub fn new_with_parts(base_url: impl Into<String>, tokens: SharedTokens) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            tokens,
        }
    }

    pub fn token_store(&self) -> SharedTokens {
        self.tokens.clone()
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn bearer_headers(&self, slot: TokenSlot) -> Result<header::HeaderMap, ApiError> {
        let token = self.tokens.get(slot).ok_or(ApiError::AuthRejected)?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::transport("Invalid token format"))?,
        );
        Ok(headers)
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = test_hooks::find(request.url().as_str()) {
            let mock = responder.respond(&request)?;
            let body = serde_json::to_vec(&mock.body)
                .map_err(|e| ApiError::transport(format!("Failed to encode mock: {}", e)))?;
            return Ok(RawResponse {
                status: mock.status,
                body,
            });
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to read response: {}", e)))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    /// Identity check for the token in `slot`.
    pub async fn get_me(&self, slot: TokenSlot) -> Result<MeResponse, ApiError> {
        let headers = self.bearer_headers(slot)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.get(format!("{}/me", base_url)).headers(headers))
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    /// Credential exchange. A 401 here means bad credentials, not an
    /// expired session, so it surfaces as a server rejection with the
    /// server's message.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.post(format!("{}/login", base_url)).json(request))
            .await?;
        if response.is_success() {
            response.json()
        } else {
            let message = response
                .error_message()
                .unwrap_or_else(|| format!("Login failed ({})", response.status));
            Err(ApiError::ServerRejected {
                status: response.status,
                message,
            })
        }
    }

    pub async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ApplyResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.post(format!("{}/apply", base_url)).json(payload))
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(ApiError::server(response.status, response.error_message()))
        }
    }

    pub async fn list_applications(&self) -> Result<Vec<ApplicationRecord>, ApiError> {
        let headers = self.bearer_headers(TokenSlot::Admin)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .get(format!("{}/admin/applications", base_url))
                    .headers(headers),
            )
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    pub async fn update_application_status(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let headers = self.bearer_headers(TokenSlot::Admin)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .post(format!("{}/admin/applications/{}/status", base_url, id))
                    .headers(headers)
                    .json(&StatusUpdateRequest {
                        status: status.to_string(),
                    }),
            )
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }

    pub async fn fetch_application_detail(&self, id: i64) -> Result<ApplicationRecord, ApiError> {
        let headers = self.bearer_headers(TokenSlot::Admin)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .get(format!("{}/admin/applications/{}/download", base_url, id))
                    .headers(headers),
            )
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    pub async fn get_attendance(&self) -> Result<AttendanceResponse, ApiError> {
        let headers = self.bearer_headers(TokenSlot::Employee)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .get(format!("{}/employee/attendance", base_url))
                    .headers(headers),
            )
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    pub async fn check_in(&self) -> Result<AttendanceResponse, ApiError> {
        let headers = self.bearer_headers(TokenSlot::Employee)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .post(format!("{}/employee/checkin", base_url))
                    .headers(headers)
                    .json(&serde_json::json!({})),
            )
            .await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error())
        }
    }

    pub async fn check_out(&self) -> Result<(), ApiError> {
        let headers = self.bearer_headers(TokenSlot::Employee)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .post(format!("{}/employee/checkout", base_url))
                    .headers(headers)
                    .json(&serde_json::json!({})),
            )
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }
}

struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    }

    fn error_message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message)
    }

    fn into_error(&self) -> ApiError {
        if self.status == 401 || self.status == 403 {
            ApiError::AuthRejected
        } else {
            ApiError::server(self.status, self.error_message())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};
