//! Error types for the Stripe cashier

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cashier operations
pub type Result<T> = std::result::Result<T, CashierError>;

/// Errors that can occur while talking to Stripe
#[derive(Debug, Error)]
pub enum CashierError {
    /// A required identifier or query was empty
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// An argument was present but unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stripe answered with a non-success status
    #[error("Stripe API error ({status}): {error}")]
    Api {
        /// HTTP status returned by Stripe
        status: StatusCode,
        /// Error object from the response body
        error: ApiError,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CashierError {
    /// Create a missing argument error
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error was raised before any request was sent because an argument was empty
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }

    /// HTTP status reported by Stripe, if the failure came from the API
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Stripe error object, if the failure came from the API
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Error object returned by Stripe under the `error` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category, e.g. `invalid_request_error` or `card_error`
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Short machine-readable code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Parameter the error relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Decline code for card errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    /// Link to the Stripe documentation for this error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// Dashboard link for the failed request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_log_url: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// Envelope Stripe wraps error objects in
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiError,
}
