//! Core error type shared by the image model interface and providers.

use thiserror::Error;

/// Errors produced while generating images.
///
/// Transport failures, vendor error responses and schema violations are raised by the
/// HTTP execution layer; `MissingImageData` is raised by provider adapters when a
/// successful response does not carry the image payload they asked for.
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    /// Network-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The request was aborted through its cancel handle.
    #[error("Request cancelled")]
    Cancelled,

    /// Non-success response from the provider API.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Response body did not match the expected schema.
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    /// A response item did not contain the requested image payload.
    #[error("Image data missing in response item {index}")]
    MissingImageData { index: usize },

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ImageError {
    /// Create an API error without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an API error carrying the raw provider payload.
    pub fn api_error_with_details(
        code: u16,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// HTTP status associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::AuthenticationError(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::RateLimitError(_) => Some(429),
            _ => None,
        }
    }

    /// Whether a caller-side retry could reasonably succeed.
    ///
    /// Informational only: nothing in this workspace retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::RateLimitError(_) => true,
            Self::ApiError { code, .. } => *code >= 500,
            _ => false,
        }
    }
}
