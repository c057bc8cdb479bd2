//! Error types for the clinic API client.

use thiserror::Error;

use crate::resource::FailureMessages;

/// Result type for clinic client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Clinic API errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A value the request depends on (role, session) is not available yet.
    /// No request was sent.
    #[error("{0}")]
    MissingKey(String),

    /// The server answered 2xx but with `success: false`.
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Non-2xx response. `message` is taken from the JSON error body if present.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    /// Network error (connection refused, DNS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The string shown to the user for this failure.
    ///
    /// Rejections always map to the fixed `rejected` text, even when the server
    /// sent a message. HTTP failures surface the server message when there is
    /// one; everything else falls back to the generic text.
    pub fn display_message(&self, messages: &FailureMessages) -> String {
        match self {
            ApiError::MissingKey(reason) => reason.clone(),
            ApiError::Rejected { .. } => messages.rejected.clone(),
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Http { .. } | ApiError::Network(_) | ApiError::Parse(_) => {
                messages.fallback.clone()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
