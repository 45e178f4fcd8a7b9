//! JSON POST entry point
//!
//! One request, no retries: the injected transport (or a `reqwest` default) performs
//! the call, non-success responses go through the failure handler, and successful
//! bodies are decoded as JSON for the provider's schema validation.

use super::errors::FailedResponseHandler;
use super::transport::{
    HttpRequestContext, HttpTransport, HttpTransportRequest, ReqwestTransport,
};
use crate::error::ImageError;
use crate::utils::cancel::CancelHandle;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Everything needed to issue one JSON POST.
pub struct PostJsonRequest<'a> {
    pub provider_id: &'a str,
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
    pub cancel: Option<CancelHandle>,
    /// Custom transport; `None` uses `http_client` directly.
    pub transport: Option<Arc<dyn HttpTransport>>,
    pub http_client: &'a reqwest::Client,
    pub failed_response_handler: &'a dyn FailedResponseHandler,
}

/// Successful JSON response.
#[derive(Debug, Clone)]
pub struct JsonApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub value: serde_json::Value,
}

/// Send `request` and decode the successful body as JSON.
pub async fn post_json_to_api(request: PostJsonRequest<'_>) -> Result<JsonApiResponse, ImageError> {
    let PostJsonRequest {
        provider_id,
        url,
        headers,
        body,
        cancel,
        transport,
        http_client,
        failed_response_handler,
    } = request;

    let transport: Arc<dyn HttpTransport> =
        transport.unwrap_or_else(|| Arc::new(ReqwestTransport::new(http_client.clone())));

    let response = transport
        .execute_json(HttpTransportRequest {
            ctx: HttpRequestContext::new(provider_id),
            url,
            headers,
            body,
            cancel,
        })
        .await?;

    if !response.is_success() {
        return Err(failed_response_handler.handle(provider_id, &response));
    }

    let value = serde_json::from_slice(&response.body).map_err(|e| {
        ImageError::ParseError(format!("Invalid JSON response from {provider_id}: {e}"))
    })?;

    Ok(JsonApiResponse {
        status: response.status,
        headers: response.headers,
        value,
    })
}

/// Validate a JSON value against the schema `T`.
pub fn parse_json_response<T: DeserializeOwned>(
    provider_id: &str,
    value: serde_json::Value,
) -> Result<T, ImageError> {
    serde_json::from_value(value)
        .map_err(|e| ImageError::ParseError(format!("Invalid {provider_id} response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::http::errors::DefaultFailedResponseHandler;
    use crate::execution::http::transport::HttpTransportResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<HttpTransportRequest>>,
    }

    impl FixedTransport {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn execute_json(
            &self,
            request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, ImageError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpTransportResponse {
                status: self.status,
                headers: HeaderMap::new(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn post<'a>(
        transport: Arc<FixedTransport>,
        client: &'a reqwest::Client,
    ) -> PostJsonRequest<'a> {
        PostJsonRequest {
            provider_id: "test",
            url: "https://example.invalid/gen".to_string(),
            headers: HeaderMap::new(),
            body: serde_json::json!({ "prompt": "p" }),
            cancel: None,
            transport: Some(transport),
            http_client: client,
            failed_response_handler: &DefaultFailedResponseHandler,
        }
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let client = reqwest::Client::new();
        let transport = FixedTransport::new(200, "{\"data\":[]}");
        let resp = post_json_to_api(post(transport.clone(), &client))
            .await
            .unwrap();

        assert_eq!(resp.value, serde_json::json!({ "data": [] }));
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "https://example.invalid/gen");
        assert_eq!(seen[0].ctx.provider_id, "test");
    }

    #[tokio::test]
    async fn failure_goes_through_handler() {
        let client = reqwest::Client::new();
        let transport = FixedTransport::new(401, "nope");
        let err = post_json_to_api(post(transport, &client)).await.unwrap_err();
        assert!(matches!(err, ImageError::AuthenticationError(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let client = reqwest::Client::new();
        let transport = FixedTransport::new(200, "not json");
        let err = post_json_to_api(post(transport, &client)).await.unwrap_err();
        assert!(matches!(err, ImageError::ParseError(_)));
    }

    #[test]
    fn schema_violation_is_parse_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Shape {
            #[allow(dead_code)]
            data: Vec<String>,
        }
        let err = parse_json_response::<Shape>("test", serde_json::json!({ "data": 1 }))
            .unwrap_err();
        match err {
            ImageError::ParseError(msg) => assert!(msg.starts_with("Invalid test response")),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
