//! Request and response types for the EmailListChecker API.
//!
//! Request structs serialize to the wire field names the service expects;
//! optional fields are omitted entirely when unset. Response models keep
//! every non-guaranteed field optional (or defaulted) so that payload
//! additions on the service side never break decoding.

use serde::{Deserialize, Serialize};

/// Options for single email verification.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Verification timeout in seconds. The service accepts 5-60; the
    /// client does not validate the range locally, out-of-range values
    /// come back as a validation failure.
    pub timeout: Option<u32>,

    /// Perform SMTP-level verification (default: true).
    pub smtp_check: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            smtp_check: true,
        }
    }
}

/// Options for batch verification submission.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Display name for this batch.
    pub name: Option<String>,

    /// Webhook URL notified when the batch completes.
    pub callback_url: Option<String>,

    /// Start verification immediately on submission (default: true).
    pub auto_start: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            name: None,
            callback_url: None,
            auto_start: true,
        }
    }
}

/// Output format for batch result downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    /// Structured JSON rows (default).
    #[default]
    Json,
    /// Comma-separated values.
    Csv,
    /// Plain text, one email per line.
    Txt,
}

impl ResultFormat {
    /// Wire name of this format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }
}

/// Result filter for batch result downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFilter {
    /// Every verified address (default).
    #[default]
    All,
    /// Deliverable addresses only.
    Valid,
    /// Undeliverable addresses only.
    Invalid,
    /// Risky addresses only.
    Risky,
    /// Addresses the service could not classify.
    Unknown,
}

impl ResultFilter {
    /// Wire name of this filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Risky => "risky",
            Self::Unknown => "unknown",
        }
    }
}

/// Body of `POST /verify`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VerifyRequest {
    pub email: String,
    pub smtp_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Body of `POST /verify/batch`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchRequest {
    pub emails: Vec<String>,
    pub auto_start: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Body of `POST /finder/email`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FindEmailRequest {
    pub first_name: String,
    pub last_name: String,
    pub domain: String,
}

/// Body of `POST /finder/domain`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DomainSearchRequest {
    pub domain: String,
    pub limit: u32,
    pub offset: u32,
}

/// Body of `POST /finder/company`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CompanySearchRequest {
    pub company: String,
    pub limit: u32,
}

/// Result of a single email verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationResult {
    /// The verified address.
    pub email: String,

    /// Classification: `deliverable`, `undeliverable`, `risky` or `unknown`.
    pub result: String,

    /// Detail behind the classification (e.g. `accepted_email`).
    #[serde(default)]
    pub reason: Option<String>,

    /// Deliverability confidence in `[0, 1]`.
    #[serde(default)]
    pub score: Option<f64>,

    /// Address belongs to a disposable-email provider.
    #[serde(default)]
    pub disposable: bool,

    /// Role-based address (`info@`, `support@`, ...).
    #[serde(default)]
    pub role: bool,

    /// Address is hosted by a free provider.
    #[serde(default)]
    pub free: bool,

    /// SMTP provider detected for the domain.
    #[serde(default)]
    pub smtp_provider: Option<String>,

    /// Domain part of the address.
    #[serde(default)]
    pub domain: Option<String>,

    /// MX records found for the domain.
    #[serde(default)]
    pub mx_records: Option<Vec<String>>,
}

/// Descriptor returned when a batch is created.
#[derive(Debug, Clone, Deserialize)]
pub struct Batch {
    /// Batch identifier, used for status polling and result download.
    pub id: u64,

    /// Current batch state (e.g. `pending`, `processing`).
    pub status: String,

    /// Number of addresses submitted.
    #[serde(default)]
    pub total_emails: Option<u64>,

    /// Display name, when one was given at submission.
    #[serde(default)]
    pub name: Option<String>,
}

/// Progress snapshot of a running or finished batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchStatus {
    /// Batch identifier.
    #[serde(default)]
    pub id: Option<u64>,

    /// Current state: `pending`, `processing`, `completed` or `failed`.
    pub status: String,

    /// Completion percentage in `[0, 100]`.
    #[serde(default)]
    pub progress: Option<f64>,

    /// Addresses processed so far.
    #[serde(default)]
    pub processed_emails: Option<u64>,

    /// Total addresses in the batch.
    #[serde(default)]
    pub total_emails: Option<u64>,

    /// Addresses verified as deliverable.
    #[serde(default)]
    pub valid_emails: Option<u64>,

    /// Addresses verified as undeliverable.
    #[serde(default)]
    pub invalid_emails: Option<u64>,

    /// Addresses classified as risky.
    #[serde(default)]
    pub risky_emails: Option<u64>,

    /// Addresses the service could not classify.
    #[serde(default)]
    pub unknown_emails: Option<u64>,
}

impl BatchStatus {
    /// True once the batch has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.status == "completed" || self.status == "failed"
    }
}

/// Best-guess address for a person at a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailFinderResult {
    /// The discovered address, when one was found.
    #[serde(default)]
    pub email: Option<String>,

    /// Confidence percentage in `[0, 100]`.
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Naming pattern the guess was derived from (e.g. `{first}.{last}`).
    #[serde(default)]
    pub pattern: Option<String>,

    /// The discovered address passed verification.
    #[serde(default)]
    pub verified: bool,

    /// Alternative pattern candidates, most likely first.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// An address discovered by domain or company search.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveredEmail {
    /// The discovered address.
    pub email: String,

    /// Domain the address belongs to.
    #[serde(default)]
    pub domain: Option<String>,

    /// When the address was last verified, as reported by the service.
    #[serde(default)]
    pub last_verified: Option<String>,

    /// Confidence percentage in `[0, 100]`.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Addresses and naming patterns discovered for a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainSearchResult {
    /// The searched domain.
    #[serde(default)]
    pub domain: Option<String>,

    /// Total matches known to the service (may exceed the page returned).
    #[serde(default)]
    pub total_found: Option<u64>,

    /// Common naming patterns inferred for the domain.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Discovered addresses for the requested page.
    #[serde(default)]
    pub emails: Vec<DiscoveredEmail>,
}

/// Addresses and candidate domains discovered for a company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySearchResult {
    /// The searched company name.
    #[serde(default)]
    pub company: Option<String>,

    /// Total matches known to the service.
    #[serde(default)]
    pub total_found: Option<u64>,

    /// Candidate domains for the company.
    #[serde(default)]
    pub possible_domains: Vec<String>,

    /// Discovered addresses.
    #[serde(default)]
    pub emails: Vec<DiscoveredEmail>,
}

/// Account credit balance.
#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    /// Credits currently available.
    pub balance: u64,

    /// Credits consumed in the current month.
    #[serde(default)]
    pub used_this_month: u64,

    /// Subscription plan name.
    #[serde(default)]
    pub plan: Option<String>,
}

/// Account API usage counters.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageStats {
    /// Total API requests issued.
    #[serde(default)]
    pub total_requests: u64,

    /// Requests that completed successfully.
    #[serde(default)]
    pub successful_requests: u64,

    /// Requests that failed.
    #[serde(default)]
    pub failed_requests: u64,
}

impl UsageStats {
    /// Success rate as a percentage, or `None` when no requests were made.
    /// Derived client-side; the service only reports raw counters.
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_requests == 0 {
            return None;
        }
        Some(self.successful_requests as f64 / self.total_requests as f64 * 100.0)
    }
}

/// Summary of a verification list/batch on the account.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSummary {
    /// List identifier.
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Current state of the list.
    #[serde(default)]
    pub status: Option<String>,

    /// Number of addresses in the list.
    #[serde(default)]
    pub total_emails: Option<u64>,

    /// Creation timestamp, as reported by the service.
    #[serde(default)]
    pub created_at: Option<String>,
}
