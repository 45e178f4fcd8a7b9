//! HTTP failure handling
//!
//! Turns non-success responses into structured `ImageError`s. Providers that know
//! their vendor's error envelope implement `FailedResponseHandler`; everything else
//! goes through `classify_http_error`.

use super::transport::HttpTransportResponse;
use crate::error::ImageError;
use reqwest::header::HeaderMap;

/// Converts a non-success transport response into an error.
pub trait FailedResponseHandler: Send + Sync {
    fn handle(&self, provider_id: &str, response: &HttpTransportResponse) -> ImageError;
}

impl<F> FailedResponseHandler for F
where
    F: Fn(&str, &HttpTransportResponse) -> ImageError + Send + Sync,
{
    fn handle(&self, provider_id: &str, response: &HttpTransportResponse) -> ImageError {
        self(provider_id, response)
    }
}

/// Status-based classification with no knowledge of the vendor's error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFailedResponseHandler;

impl FailedResponseHandler for DefaultFailedResponseHandler {
    fn handle(&self, provider_id: &str, response: &HttpTransportResponse) -> ImageError {
        classify_http_error(
            provider_id,
            response.status,
            &response.text(),
            &response.headers,
            canonical_reason(response.status),
        )
    }
}

/// Canonical reason phrase for a status code, e.g. `"Bad Gateway"` for 502.
pub fn canonical_reason(status: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
}

/// Classify an HTTP failure into a more specific error type.
///
/// Inspects the status code, body and headers to derive a typed error
/// (RateLimit / Authentication / NotFound / InvalidInput) rather than a generic ApiError.
pub fn classify_http_error(
    provider_id: &str,
    status: u16,
    body_text: &str,
    headers: &HeaderMap,
    fallback_message: Option<&str>,
) -> ImageError {
    fn header_val(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    }
    let id_keys = ["x-request-id", "x-tt-logid", "x-trace-id", "traceparent"];
    let request_ids_vec: Vec<String> = id_keys
        .iter()
        .filter_map(|k| header_val(headers, k).map(|v| format!("{}={}", k, v)))
        .collect();
    let ids_suffix = if request_ids_vec.is_empty() {
        String::new()
    } else {
        format!(" ids=[{}]", request_ids_vec.join(","))
    };
    // Keep samples short; bodies can echo prompts back.
    let body_sample = body_text.chars().take(200).collect::<String>();

    match status {
        429 => {
            let retry_after = headers
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            return ImageError::RateLimitError(format!(
                "provider={} http=429 retry_after={}{} body_sample={}",
                provider_id, retry_after, ids_suffix, body_sample
            ));
        }
        401 => {
            return ImageError::AuthenticationError(format!(
                "provider={} unauthorized{} body_sample={}",
                provider_id, ids_suffix, body_sample
            ));
        }
        404 => {
            return ImageError::NotFound(format!(
                "provider={} http=404{} body_sample={}",
                provider_id, ids_suffix, body_sample
            ));
        }
        413 => {
            return ImageError::InvalidInput(format!(
                "provider={} http=413 payload too large{} body_sample={}",
                provider_id, ids_suffix, body_sample
            ));
        }
        415 => {
            return ImageError::InvalidInput(format!(
                "provider={} http=415 unsupported media type{} body_sample={}",
                provider_id, ids_suffix, body_sample
            ));
        }
        _ => {}
    }

    let msg = if let Some(fallback) = fallback_message {
        fallback.to_string()
    } else if body_text.trim().is_empty() {
        "api error".to_string()
    } else {
        body_sample
    };
    let details = match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json) => serde_json::json!({
            "status": status,
            "provider": provider_id,
            "response": json,
            "request_ids": request_ids_vec,
        }),
        Err(_) => serde_json::json!({
            "status": status,
            "provider": provider_id,
            "raw": body_text,
            "request_ids": request_ids_vec,
        }),
    };
    ImageError::api_error_with_details(status, msg, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(status: u16, body: &str) -> HttpTransportResponse {
        HttpTransportResponse {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn classify_http_error_uses_fallback_message_for_non_json_body() {
        let err = classify_http_error(
            "bytedance",
            502,
            "<html>bad gateway</html>",
            &HeaderMap::new(),
            Some("Bad Gateway"),
        );
        match err {
            ImageError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
                assert_eq!(details.unwrap()["raw"], "<html>bad gateway</html>");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_carries_retry_after_and_request_ids() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("7"));
        headers.insert("x-request-id", HeaderValue::from_static("r-1"));
        match classify_http_error("p", 429, "slow down", &headers, None) {
            ImageError::RateLimitError(msg) => {
                assert!(msg.contains("retry_after=7"));
                assert!(msg.contains("x-request-id=r-1"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn default_handler_maps_status_classes() {
        let handler = DefaultFailedResponseHandler;
        assert!(matches!(
            handler.handle("p", &response(401, "")),
            ImageError::AuthenticationError(_)
        ));
        assert!(matches!(
            handler.handle("p", &response(404, "")),
            ImageError::NotFound(_)
        ));
        assert!(matches!(
            handler.handle("p", &response(413, "")),
            ImageError::InvalidInput(_)
        ));
        match handler.handle("p", &response(400, "{\"error\":\"bad\"}")) {
            ImageError::ApiError { code, details, .. } => {
                assert_eq!(code, 400);
                assert_eq!(details.unwrap()["response"]["error"], "bad");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn closures_are_failure_handlers() {
        let handler = |provider: &str, resp: &HttpTransportResponse| {
            ImageError::api_error(resp.status, format!("{provider} failed"))
        };
        let err = handler.handle("p", &response(418, ""));
        assert_eq!(err.to_string(), "API error 418: p failed");
    }
}
