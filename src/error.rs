//! Error types for chat model operations.
//!
//! Every failure a [`ChatModel`](crate::ChatModel) can raise is an [`LlmError`].
//! Nothing in this crate recovers from these errors locally: the adapter
//! surfaces them, the application entry point passes them through, and the
//! binary exits non-zero.
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use quip::{LlmError, error::ErrorCategory};
//!
//! fn report(err: &LlmError) {
//!     match err.category() {
//!         ErrorCategory::Client => eprintln!("Fix your setup: {}", err.user_message()),
//!         ErrorCategory::Transient => eprintln!("Try again later: {}", err.user_message()),
//!         ErrorCategory::External => eprintln!("Provider problem: {err}"),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (provider outage, network issues, bad payloads).
    External,

    /// Client errors (missing credentials, rejected credentials).
    ///
    /// The caller made a mistake that they can fix.
    Client,

    /// Temporary failures such as rate limiting.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

/// Convenient result type for chat model operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while configuring or invoking a chat model.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use quip::LlmError;
///
/// let err = LlmError::configuration_error("Missing API key");
/// let err = LlmError::rate_limit_exceeded(60);
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `AuthenticationFailed` | Client |
/// | `RequestFailed` | External |
/// | `ResponseParsingError` | External |
/// | `RateLimitExceeded` | Transient |
#[derive(Error, Debug)]
pub enum LlmError {
    /// Provider configuration is invalid or incomplete.
    ///
    /// Most commonly the API credential is not set.
    #[error("Provider configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the provider failed, or the provider answered
    /// with a non-success status.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider returned a body that couldn't be read or parsed.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// Provider rate limit exceeded.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Wait time the provider asked for.
        retry_after_seconds: u64,
    },

    /// The provider rejected the credential.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },
}

impl LlmError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::RateLimitExceeded { .. } => ErrorSeverity::Warning,
        }
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// ```rust
    /// use quip::LlmError;
    ///
    /// let err = LlmError::rate_limit_exceeded(60);
    /// assert_eq!(
    ///     err.user_message(),
    ///     "Service is busy. Please wait 60 seconds and try again"
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::AuthenticationFailed { .. } => {
                "Authentication failed. Please check your credentials".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to communicate with AI service. Please try again".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from AI service".to_string()
            }
            Self::RateLimitExceeded {
                retry_after_seconds,
            } => {
                format!("Service is busy. Please wait {retry_after_seconds} seconds and try again")
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "LLM configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "LLM request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "LLM response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "LLM provider rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "LLM provider authentication failed"
        );
        Self::AuthenticationFailed { message }
    }
}
