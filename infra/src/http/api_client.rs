//! HTTP client for the storefront API
//!
//! Every storefront endpoint speaks the same protocol: JSON in, JSON out,
//! responses wrapped in an envelope whose `statusCode` mirrors HTTP
//! semantics. This client owns the protocol handling so gateway code only
//! deals with payloads:
//!
//! - transport failures (DNS, timeout, connection reset) become
//!   [`ClientError::Network`]
//! - HTTP error statuses become [`ClientError::Rejected`], carrying the
//!   envelope message when the body has one
//! - an error `statusCode` inside an HTTP 200 body is a rejection too
//! - a success body that does not parse as an envelope is a network
//!   failure, never a rejection
//!
//! Requests are never retried: the identity endpoints are not idempotent
//! and a retried code submission would spend the user's attempt twice.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use em_core::errors::{ClientError, ClientResult};
use em_shared::config::ApiConfig;
use em_shared::types::{ApiEnvelope, Language};

use crate::InfraError;

/// Thin wrapper around `reqwest::Client` bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// The language selects the `Accept-Language` header so server-issued
    /// messages come back in the user's locale.
    pub fn new(config: &ApiConfig, language: Language) -> Result<Self, InfraError> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(language.locale()) {
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.trimmed_base_url().to_string(),
        })
    }

    /// POST a JSON body and unwrap the response envelope
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body, None).await
    }

    /// POST a JSON body with a bearer token attached
    pub async fn post_json_authorized<B, T>(
        &self,
        path: &str,
        body: &B,
        access_token: &str,
    ) -> ClientResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body, Some(access_token))
            .await
    }

    /// PUT a JSON body and unwrap the response envelope
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body, None).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        access_token: Option<&str>,
    ) -> ClientResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path, "Calling storefront API");

        let mut request = self.client.request(method, &url).json(body);
        if let Some(token) = access_token {
            let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::internal("access token is not a valid header value"))?;
            request = request.header(AUTHORIZATION, bearer);
        }

        let response = request
            .send()
            .await
            .map_err(|error| ClientError::network(error.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| ClientError::network(error.to_string()))?;

        Self::unwrap_envelope(status, &bytes)
    }

    /// Apply the envelope protocol to a raw response
    fn unwrap_envelope<T>(status: StatusCode, bytes: &[u8]) -> ClientResult<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
    {
        if !status.is_success() {
            // Error bodies are parsed only for their message; their data
            // shape is irrelevant.
            let message = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(bytes)
                .ok()
                .and_then(|envelope| envelope.message().map(str::to_string));
            debug!(status = status.as_u16(), "Storefront API refused the request");
            return Err(ClientError::rejected(status.as_u16(), message));
        }

        let envelope = serde_json::from_slice::<ApiEnvelope<T>>(bytes)
            .map_err(|error| ClientError::network(format!("malformed response body: {error}")))?;
        if !envelope.is_success() {
            debug!(
                status = envelope.status_code,
                "Storefront API reported an error inside an HTTP success"
            );
            return Err(ClientError::rejected(
                envelope.status_code,
                envelope.message().map(str::to_string),
            ));
        }
        Ok(envelope)
    }
}
