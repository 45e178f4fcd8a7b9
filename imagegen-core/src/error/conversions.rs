//! Type Conversions for ImageError
//!
//! From trait implementations for converting common error types into ImageError.

use super::types::ImageError;

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ImageError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
