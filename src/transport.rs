//! HTTP transport adapter for the EmailListChecker API.
//!
//! Owns the configured [`reqwest::Client`] (bearer authentication, content
//! negotiation, client identifier, whole-call timeout) and the single
//! [`Transport::execute`] pipeline that turns one HTTP exchange into either
//! a decoded JSON value or a classified [`ApiError`].

use std::time::Duration;

use reqwest::{header, Client as HttpClient, Method, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ClientConfig;
use crate::error::ApiError;

/// Client identifier sent with every request.
const USER_AGENT: &str = concat!("EmailListChecker-Rust/", env!("CARGO_PKG_VERSION"));

/// One authenticated HTTP exchange per call; no pooling state beyond what
/// `reqwest::Client` manages internally.
#[derive(Debug)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: String,
}

impl Transport {
    /// Build the transport from an immutable client configuration.
    ///
    /// Fails with [`ApiError::Transport`] when the API key is empty or
    /// cannot be encoded as a header value, or when the underlying HTTP
    /// client cannot be constructed.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        if config.api_key.is_empty() {
            return Err(ApiError::Transport("API key must not be empty".to_string()));
        }

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ApiError::Transport(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Perform one authenticated exchange and classify its outcome.
    ///
    /// On 2xx returns the decoded JSON body (`{}` for an empty body, the
    /// raw text as a JSON string when the body is not valid JSON, e.g. a
    /// CSV download). Any non-2xx status becomes the matching [`ApiError`]
    /// variant; a failure before a response is received becomes
    /// [`ApiError::Transport`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, normalize_path(path));
        debug!(%method, %url, "sending API request");

        let mut request = self.http.request(method, &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        debug!(%status, "received API response");

        if !status.is_success() {
            return Err(Self::classify_error(response).await);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            // Non-JSON success payloads (CSV/plain-text batch downloads)
            // pass through as raw text.
            Err(_) => Ok(Value::String(text)),
        }
    }

    /// Map a non-2xx response onto the error taxonomy. An undecodable
    /// error body is treated as absent, never as a failure of its own.
    async fn classify_error(response: Response) -> ApiError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).ok(),
            Err(_) => None,
        };

        warn!(%status, "API request failed");
        ApiError::from_response(status, retry_after, body)
    }
}

/// Normalize an endpoint path to exactly one leading slash.
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
