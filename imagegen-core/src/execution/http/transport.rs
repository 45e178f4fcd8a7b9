//! HTTP transport abstraction.
//!
//! Providers accept a "custom fetch" implementation: an injectable transport that
//! observes the final URL/headers/body and returns a response without necessarily
//! going through `reqwest`. `ReqwestTransport` is the default.

use crate::error::ImageError;
use crate::utils::cancel::{CancelHandle, run_cancellable};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Per-request context used for log correlation.
#[derive(Debug, Clone)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub provider_id: String,
}

impl HttpRequestContext {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            request_id: generate_request_id(),
            provider_id: provider_id.into(),
        }
    }
}

/// Generate a unique request id.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
    /// Forwarded unchanged from the caller; transports should abort when it fires.
    pub cancel: Option<CancelHandle>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Custom HTTP transport for JSON requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ImageError>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ImageError> {
        let HttpTransportRequest {
            ctx,
            url,
            headers,
            body,
            cancel,
        } = request;

        tracing::debug!(
            request_id = %ctx.request_id,
            provider = %ctx.provider_id,
            url = %url,
            "sending JSON request"
        );

        let send = self.client.post(&url).headers(headers).json(&body).send();
        let result = async {
            let resp = run_cancellable(cancel.as_ref(), send)
                .await?
                .map_err(|e| ImageError::HttpError(e.to_string()))?;
            let status = resp.status().as_u16();
            let headers = resp.headers().clone();
            let body = run_cancellable(cancel.as_ref(), resp.bytes())
                .await?
                .map_err(|e| ImageError::HttpError(e.to_string()))?;
            Ok::<_, ImageError>(HttpTransportResponse {
                status,
                headers,
                body: body.to_vec(),
            })
        }
        .await;

        match &result {
            Ok(resp) => tracing::debug!(
                request_id = %ctx.request_id,
                provider = %ctx.provider_id,
                status = resp.status,
                bytes = resp.body.len(),
                "received response"
            ),
            Err(ImageError::Cancelled) => tracing::debug!(
                request_id = %ctx.request_id,
                provider = %ctx.provider_id,
                "request cancelled"
            ),
            Err(e) => tracing::debug!(
                request_id = %ctx.request_id,
                provider = %ctx.provider_id,
                error = %e,
                "transport error"
            ),
        }

        result
    }
}
