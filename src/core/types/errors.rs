//! Provider error taxonomy.
//!
//! Every transport or HTTP failure from the geocoding/routing provider is
//! classified into one of these variants; the pipeline keys its retry and
//! fail-record decisions off [`ProviderError::is_retryable`] and
//! [`ProviderError::is_fatal`].

/// Convenience result alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Classified failure from the geocoding/routing provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// No API key configured; raised before any network call is attempted
    #[error("credentials missing")]
    CredentialsMissing,

    /// HTTP 401 from the provider
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// HTTP 403 from the provider
    #[error("access disallowed: {message}")]
    AccessDenied { message: String },

    /// HTTP 429; the only retryable classification
    #[error("quota exceeded: {message}")]
    RateLimit {
        message: String,
        /// Provider-suggested wait in seconds, informational only — the
        /// pipeline always waits its own fixed delay
        retry_after: Option<u64>,
    },

    /// Any other non-2xx response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body could not be decoded
    #[error("response parsing error: {message}")]
    Parsing { message: String },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create access denied error
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create generic API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create parsing error
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing {
            message: message.into(),
        }
    }

    /// Whether a later identical attempt may succeed. Only throttling
    /// qualifies; everything else is deterministic for the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }

    /// Credential-class failures. These propagate out of the pipeline and
    /// are written onto the record verbatim by the scheduler instead of
    /// going through the generic truncated-message path.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CredentialsMissing | Self::Authentication { .. } | Self::AccessDenied { .. }
        )
    }

    /// Short operator-facing text written onto a record that failed with a
    /// fatal error.
    pub fn record_message(&self) -> String {
        match self {
            Self::CredentialsMissing => "credentials missing".to_string(),
            Self::Authentication { .. } => "authentication failed (401)".to_string(),
            Self::AccessDenied { .. } => "access disallowed (403)".to_string(),
            other => other.to_string(),
        }
    }
}
