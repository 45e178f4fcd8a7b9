//! Ark error envelope handling
//!
//! Ark reports failures as `{"error": {"code", "message", "param"?, "type"?}}`.
//! When the body matches, the vendor message is surfaced; otherwise the generic
//! status classification applies.

use imagegen_core::error::ImageError;
use imagegen_core::execution::http::{
    FailedResponseHandler, HttpTransportResponse, canonical_reason, classify_http_error,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ArkErrorEnvelope {
    error: ArkErrorBody,
}

#[derive(Debug, Deserialize)]
struct ArkErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Failure handler for Ark endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteDanceFailedResponseHandler;

impl FailedResponseHandler for ByteDanceFailedResponseHandler {
    fn handle(&self, provider_id: &str, response: &HttpTransportResponse) -> ImageError {
        let body_text = response.text();
        let Ok(envelope) = serde_json::from_str::<ArkErrorEnvelope>(&body_text) else {
            return classify_http_error(
                provider_id,
                response.status,
                &body_text,
                &response.headers,
                canonical_reason(response.status),
            );
        };

        let message = envelope.error.message;
        match response.status {
            401 | 403 => ImageError::AuthenticationError(message),
            404 => ImageError::NotFound(message),
            429 => ImageError::RateLimitError(message),
            status => {
                let details = serde_json::json!({
                    "provider": provider_id,
                    "code": envelope.error.code,
                    "response": serde_json::from_str::<serde_json::Value>(&body_text)
                        .unwrap_or(serde_json::Value::Null),
                });
                ImageError::api_error_with_details(status, message, details)
            }
        }
    }
}
