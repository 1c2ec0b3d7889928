//! # EmailListChecker client
//!
//! Async Rust client for the [EmailListChecker](https://emaillistchecker.io)
//! email verification and lead discovery API: single and batch
//! verification, email discovery by name/domain/company, batch status
//! polling and result download, and account credit/usage introspection.
//!
//! The client is stateless beyond its immutable configuration and is safe
//! to share between concurrent callers; one logical call is one HTTP
//! exchange. There is no built-in retry: failures carry everything a
//! caller needs to back off ([`ApiError::retry_after_secs`],
//! [`ApiError::is_transient`]) and nothing more.
//!
//! # Errors
//!
//! Every operation returns [`Result`]. Well-known HTTP statuses map to
//! dedicated [`ApiError`] variants (authentication, insufficient credits,
//! rate limit with retry hint, validation); any other non-2xx status is
//! [`ApiError::Api`] and anything that never produced a response is
//! [`ApiError::Transport`].
//!
//! # Example
//!
//! ```no_run
//! use emaillistchecker::{ApiError, Client};
//!
//! #[tokio::main]
//! async fn main() -> emaillistchecker::Result<()> {
//!     let client = Client::new("your_api_key")?;
//!
//!     match client.verify("test@example.com").await {
//!         Ok(result) => println!("{}: {} ({:?})", result.email, result.result, result.score),
//!         Err(ApiError::RateLimit {
//!             retry_after_secs, ..
//!         }) => println!("throttled, retry in {retry_after_secs}s"),
//!         Err(err) => return Err(err),
//!     }
//!
//!     let credits = client.get_credits().await?;
//!     println!("{} credits left", credits.balance);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
mod transport;
pub mod types;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, DEFAULT_RETRY_AFTER_SECS};
pub use types::{
    Batch, BatchOptions, BatchStatus, CompanySearchResult, Credits, DiscoveredEmail,
    DomainSearchResult, EmailFinderResult, ListSummary, ResultFilter, ResultFormat, UsageStats,
    VerificationResult, VerifyOptions,
};

/// Result type alias for EmailListChecker operations.
pub type Result<T> = std::result::Result<T, ApiError>;
