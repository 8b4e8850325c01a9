//! Error Classifier — decides whether a failed provider call is worth retrying.
//!
//! Classification is a pure function of the error's status code and message
//! text. Quota/credential signals are checked before overload signals:
//! provider quota messages sometimes embed a retry-after duration whose
//! digits would otherwise match the overload patterns.

/// How a failed remote call should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The provider is temporarily overloaded (HTTP 503 or "overloaded").
    /// Retried automatically with backoff.
    ServiceBusy,
    /// Rate limit, exhausted quota, or an invalid API key (HTTP 429,
    /// "quota", "API key"). Never retried — a retry cannot fix the
    /// caller's credential.
    QuotaOrCredential,
    /// Anything else: malformed input, unexpected response shape, network
    /// failure. Never retried.
    Permanent,
}

impl ErrorClass {
    /// Whether the retry loop should attempt this call again.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorClass::ServiceBusy)
    }
}

/// Seam between the retry loop and concrete error types.
/// `ProviderError` implements this via `classify`.
pub trait Classify {
    fn class(&self) -> ErrorClass;
}

/// Classifies an error from its HTTP status (when known) and message text.
///
/// Unrecognized errors are `Permanent` — fail fast rather than retry
/// blindly.
pub fn classify(status: Option<u16>, message: &str) -> ErrorClass {
    let message = message.to_lowercase();

    if status == Some(429)
        || message.contains("429")
        || message.contains("quota")
        || message.contains("api key")
    {
        return ErrorClass::QuotaOrCredential;
    }

    if status == Some(503) || message.contains("503") || message.contains("overloaded") {
        return ErrorClass::ServiceBusy;
    }

    ErrorClass::Permanent
}
