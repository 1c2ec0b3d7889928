//! EmailListChecker API client facade.
//!
//! One method per remote operation; each builds a typed request body or
//! query, delegates to the transport adapter, unwraps the service's
//! `{"data": ...}` envelope when present, and decodes the payload into the
//! models in [`crate::types`]. No method retries, validates remote business
//! rules locally, or swallows a failure.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Batch, BatchOptions, BatchRequest, BatchStatus, CompanySearchRequest, CompanySearchResult,
    Credits, DomainSearchRequest, DomainSearchResult, EmailFinderResult, FindEmailRequest,
    ListSummary, ResultFilter, ResultFormat, UsageStats, VerificationResult, VerifyOptions,
    VerifyRequest,
};

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://platform.emaillistchecker.io/api/v1";

/// Configuration for the EmailListChecker client.
///
/// Immutable after construction; the client keeps no other long-lived
/// state, so one client may be shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// EmailListChecker API key (required, non-empty).
    pub api_key: String,

    /// API base URL; trailing slashes are stripped at construction.
    pub base_url: String,

    /// Whole-call request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("EMAILLISTCHECKER_API_KEY").unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the EmailListChecker email verification and lead discovery
/// API.
///
/// # Example
/// ```no_run
/// use emaillistchecker::Client;
///
/// # async fn example() -> emaillistchecker::Result<()> {
/// let client = Client::new("your_api_key")?;
/// let result = client.verify("test@example.com").await?;
/// println!("{} is {}", result.email, result.result);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let api_key_scrubbed = match config.api_key.get(..8) {
            Some(prefix) if config.api_key.len() > 8 => format!("{prefix}...[REDACTED]"),
            _ => "[REDACTED]".to_string(),
        };
        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            api_key = %api_key_scrubbed,
            "initializing EmailListChecker client"
        );

        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Verify a single email address with default options (SMTP check on,
    /// service-side default timeout).
    pub async fn verify(&self, email: &str) -> Result<VerificationResult, ApiError> {
        self.verify_with_options(email, &VerifyOptions::default())
            .await
    }

    /// Verify a single email address.
    ///
    /// `options.timeout`, when set, is expected by the service to lie in
    /// 5-60 seconds; out-of-range values surface as
    /// [`ApiError::Validation`].
    pub async fn verify_with_options(
        &self,
        email: &str,
        options: &VerifyOptions,
    ) -> Result<VerificationResult, ApiError> {
        let body = serde_json::to_value(VerifyRequest {
            email: email.to_string(),
            smtp_check: options.smtp_check,
            timeout: options.timeout,
        })?;
        let response = self
            .transport
            .execute(Method::POST, "/verify", None, Some(body))
            .await?;
        decode(unwrap_data(response))
    }

    /// Submit emails for batch verification with default options
    /// (auto-start on, no name, no callback).
    pub async fn verify_batch(&self, emails: Vec<String>) -> Result<Batch, ApiError> {
        self.verify_batch_with_options(emails, &BatchOptions::default())
            .await
    }

    /// Submit emails for batch verification.
    ///
    /// The service enforces the batch size limit (documented as 10,000
    /// addresses); oversized submissions surface as
    /// [`ApiError::Validation`].
    pub async fn verify_batch_with_options(
        &self,
        emails: Vec<String>,
        options: &BatchOptions,
    ) -> Result<Batch, ApiError> {
        let body = serde_json::to_value(BatchRequest {
            emails,
            auto_start: options.auto_start,
            name: options.name.clone(),
            callback_url: options.callback_url.clone(),
        })?;
        let response = self
            .transport
            .execute(Method::POST, "/verify/batch", None, Some(body))
            .await?;
        decode(unwrap_data(response))
    }

    /// Fetch the current progress snapshot of a batch.
    ///
    /// Returns immediately with the current state; polling cadence is
    /// owned by the caller.
    pub async fn get_batch_status(&self, batch_id: u64) -> Result<BatchStatus, ApiError> {
        let response = self
            .transport
            .execute(
                Method::GET,
                &format!("/verify/batch/{batch_id}"),
                None,
                None,
            )
            .await?;
        decode(unwrap_data(response))
    }

    /// Download batch verification results.
    ///
    /// For [`ResultFormat::Json`] the `data` envelope is unwrapped; for
    /// any other format the decoded response is returned unchanged (a
    /// CSV or plain-text payload arrives as a JSON string).
    pub async fn get_batch_results(
        &self,
        batch_id: u64,
        format: ResultFormat,
        filter: ResultFilter,
    ) -> Result<Value, ApiError> {
        let query = [
            ("format", format.as_str().to_string()),
            ("filter", filter.as_str().to_string()),
        ];
        let response = self
            .transport
            .execute(
                Method::GET,
                &format!("/verify/batch/{batch_id}/results"),
                Some(&query),
                None,
            )
            .await?;
        if format == ResultFormat::Json {
            Ok(unwrap_data(response))
        } else {
            Ok(response)
        }
    }

    /// Find the most likely email address for a person at a domain.
    pub async fn find_email(
        &self,
        first_name: &str,
        last_name: &str,
        domain: &str,
    ) -> Result<EmailFinderResult, ApiError> {
        let body = serde_json::to_value(FindEmailRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            domain: domain.to_string(),
        })?;
        let response = self
            .transport
            .execute(Method::POST, "/finder/email", None, Some(body))
            .await?;
        decode(unwrap_data(response))
    }

    /// Find email addresses registered under a domain.
    ///
    /// The service expects `limit` in 1-100; `offset` pages through
    /// results.
    pub async fn find_by_domain(
        &self,
        domain: &str,
        limit: u32,
        offset: u32,
    ) -> Result<DomainSearchResult, ApiError> {
        let body = serde_json::to_value(DomainSearchRequest {
            domain: domain.to_string(),
            limit,
            offset,
        })?;
        let response = self
            .transport
            .execute(Method::POST, "/finder/domain", None, Some(body))
            .await?;
        decode(unwrap_data(response))
    }

    /// Find email addresses and candidate domains for a company name.
    pub async fn find_by_company(
        &self,
        company: &str,
        limit: u32,
    ) -> Result<CompanySearchResult, ApiError> {
        let body = serde_json::to_value(CompanySearchRequest {
            company: company.to_string(),
            limit,
        })?;
        let response = self
            .transport
            .execute(Method::POST, "/finder/company", None, Some(body))
            .await?;
        decode(unwrap_data(response))
    }

    /// Fetch the account credit balance.
    pub async fn get_credits(&self) -> Result<Credits, ApiError> {
        let response = self
            .transport
            .execute(Method::GET, "/credits", None, None)
            .await?;
        decode(unwrap_data(response))
    }

    /// Fetch account API usage counters.
    pub async fn get_usage(&self) -> Result<UsageStats, ApiError> {
        let response = self
            .transport
            .execute(Method::GET, "/usage", None, None)
            .await?;
        decode(unwrap_data(response))
    }

    /// Fetch all verification lists on the account.
    pub async fn get_lists(&self) -> Result<Vec<ListSummary>, ApiError> {
        let response = self
            .transport
            .execute(Method::GET, "/lists", None, None)
            .await?;
        decode(unwrap_data(response))
    }

    /// Delete a verification list.
    ///
    /// Returns the confirmation body unchanged; deletion responses are not
    /// `data`-wrapped.
    pub async fn delete_list(&self, list_id: u64) -> Result<Value, ApiError> {
        self.transport
            .execute(Method::DELETE, &format!("/lists/{list_id}"), None, None)
            .await
    }
}

/// Unwrap the service's `{"data": ...}` envelope when present; any other
/// shape passes through unchanged.
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Decode an unwrapped payload into a typed model. A shape mismatch is an
/// unclassifiable client-side failure, not an API error.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_data_extracts_payload() {
        let value = json!({"data": {"x": 1}});
        assert_eq!(unwrap_data(value), json!({"x": 1}));
    }

    #[test]
    fn test_unwrap_data_passes_through_bare_payload() {
        let value = json!({"x": 1});
        assert_eq!(unwrap_data(value), json!({"x": 1}));
    }

    #[test]
    fn test_unwrap_data_passes_through_non_objects() {
        assert_eq!(unwrap_data(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_data(json!("csv,text")), json!("csv,text"));
        assert_eq!(unwrap_data(Value::Null), Value::Null);
    }

    #[test]
    fn test_unwrap_data_null_data_key_counts_as_present() {
        let value = json!({"data": null});
        assert_eq!(unwrap_data(value), Value::Null);
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_new_rejects_empty_api_key() {
        let error = Client::new("").unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
    }

    #[test]
    fn test_new_accepts_non_empty_api_key() {
        assert!(Client::new("test-api-key").is_ok());
    }

    #[test]
    fn test_decode_shape_mismatch_is_transport_error() {
        let error = decode::<UsageStats>(json!("not an object")).unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
        assert_eq!(error.status_code(), None);
    }
}
