//! Typed errors for the EmailListChecker API client.
//!
//! Every failed operation surfaces as a single [`ApiError`] enum: HTTP
//! statuses the service uses for well-known conditions (401, 402, 422, 429)
//! map to dedicated variants, any other non-2xx status becomes
//! [`ApiError::Api`], and anything that never produced a response (network
//! failure, timeout, undecodable payload) becomes [`ApiError::Transport`].

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Fallback retry delay when a 429 response carries no usable
/// `Retry-After` header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Errors that can occur when interacting with the EmailListChecker API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid or missing API credentials (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Message from the response `error` field, or `"Invalid API key"`.
        message: String,
        /// HTTP status code of the response (always 401).
        status_code: u16,
        /// Decoded error response body, when the body was valid JSON.
        body: Option<Value>,
    },

    /// Account credit balance exhausted (HTTP 402).
    #[error("{message}")]
    InsufficientCredits {
        /// Message from the response `error` field, or `"Insufficient credits"`.
        message: String,
        /// HTTP status code of the response (always 402).
        status_code: u16,
        /// Decoded error response body, when the body was valid JSON.
        body: Option<Value>,
    },

    /// Request throttled by the service (HTTP 429).
    #[error("Rate limit exceeded. Retry after {retry_after_secs} seconds")]
    RateLimit {
        /// Seconds to wait before retrying, from the `Retry-After` response
        /// header, or [`DEFAULT_RETRY_AFTER_SECS`] when absent or
        /// non-numeric.
        retry_after_secs: u64,
        /// HTTP status code of the response (always 429).
        status_code: u16,
        /// Decoded error response body, when the body was valid JSON.
        body: Option<Value>,
    },

    /// Malformed or out-of-range request parameters per the remote rules
    /// (HTTP 422).
    #[error("{message}")]
    Validation {
        /// Message from the response `message` field, or `"Validation error"`.
        message: String,
        /// HTTP status code of the response (always 422).
        status_code: u16,
        /// Decoded error response body, when the body was valid JSON.
        body: Option<Value>,
    },

    /// Any other non-2xx API response.
    #[error("{message}")]
    Api {
        /// Message from the response `error` field, or `"API error: {status}"`.
        message: String,
        /// HTTP status code of the response.
        status_code: u16,
        /// Decoded error response body, when the body was valid JSON.
        body: Option<Value>,
    },

    /// No response was obtained (connection refused, DNS failure, timeout)
    /// or an unclassifiable client-side failure occurred (e.g. a payload
    /// that could not be decoded).
    #[error("Request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classify a non-2xx response into the matching error variant.
    ///
    /// `retry_after` is the parsed `Retry-After` header value, consulted
    /// only for 429 responses. `body` is the decoded JSON error body when
    /// the service sent one; message fields are extracted from it per the
    /// service convention (`error` for most statuses, `message` for 422).
    pub(crate) fn from_response(
        status: StatusCode,
        retry_after: Option<u64>,
        body: Option<Value>,
    ) -> Self {
        let status_code = status.as_u16();
        match status_code {
            429 => Self::RateLimit {
                retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
                status_code,
                body,
            },
            401 => Self::Authentication {
                message: body_field(body.as_ref(), "error")
                    .unwrap_or_else(|| "Invalid API key".to_string()),
                status_code,
                body,
            },
            402 => Self::InsufficientCredits {
                message: body_field(body.as_ref(), "error")
                    .unwrap_or_else(|| "Insufficient credits".to_string()),
                status_code,
                body,
            },
            422 => Self::Validation {
                message: body_field(body.as_ref(), "message")
                    .unwrap_or_else(|| "Validation error".to_string()),
                status_code,
                body,
            },
            _ => Self::Api {
                message: body_field(body.as_ref(), "error")
                    .unwrap_or_else(|| format!("API error: {status_code}")),
                status_code,
                body,
            },
        }
    }

    /// HTTP status code of the failed response, when one was received.
    ///
    /// `None` for [`ApiError::Transport`] failures, which by definition
    /// never saw a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status_code, .. }
            | Self::InsufficientCredits { status_code, .. }
            | Self::RateLimit { status_code, .. }
            | Self::Validation { status_code, .. }
            | Self::Api { status_code, .. } => Some(*status_code),
            Self::Transport(_) => None,
        }
    }

    /// Decoded JSON body of the failed response, when one was received and
    /// was valid JSON.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Self::Authentication { body, .. }
            | Self::InsufficientCredits { body, .. }
            | Self::RateLimit { body, .. }
            | Self::Validation { body, .. }
            | Self::Api { body, .. } => body.as_ref(),
            Self::Transport(_) => None,
        }
    }

    /// Seconds to wait before retrying, for rate-limit failures only.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimit {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        }
    }

    /// Returns true if this error is transient and a later retry may
    /// succeed: rate limiting, server-side errors (5xx), and transport
    /// failures. The client performs no retries itself; callers own the
    /// backoff, using [`ApiError::retry_after_secs`] where available.
    ///
    /// # Examples
    ///
    /// ```
    /// use emaillistchecker::ApiError;
    ///
    /// let error = ApiError::Transport("connection refused".to_string());
    /// assert!(error.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimit { .. } | Self::Transport(_) => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Extract a string field from a decoded error body.
fn body_field(body: Option<&Value>, key: &str) -> Option<String> {
    body?.get(key)?.as_str().map(ToString::to_string)
}
