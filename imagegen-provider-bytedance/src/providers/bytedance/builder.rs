//! ByteDance Builder Implementation

use super::config::{ByteDanceConfig, normalize_base_url, resolve_api_key};
use super::provider::ByteDanceProvider;
use imagegen_core::error::ImageError;
use imagegen_core::execution::http::{
    HeadersProvider, HttpHeaderBuilder, HttpTransport, build_http_client, overlay_headers,
};
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;

/// ByteDance Provider Builder
///
/// The API key falls back to the `ARK_API_KEY` environment variable.
#[derive(Clone, Default)]
pub struct ByteDanceBuilder {
    config: ByteDanceConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    headers_provider: Option<HeadersProvider>,
}

impl ByteDanceBuilder {
    /// Create a new ByteDance builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.config.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the base URL (e.g. a regional endpoint or a proxy)
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Add a header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(key.into(), value.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Set a proxy URL for all requests
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Use a preconfigured HTTP client (timeouts/proxy settings are then ignored)
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Send requests through a custom transport instead of `reqwest`
    pub fn fetch(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the built-in bearer authentication.
    ///
    /// The function runs before every request, so it may hand out refreshed credentials.
    /// No API key is required when one is installed.
    pub fn headers_provider(mut self, provider: HeadersProvider) -> Self {
        self.headers_provider = Some(provider);
        self
    }

    /// Build the provider
    pub fn build(self) -> Result<ByteDanceProvider, ImageError> {
        let mut config = self.config;
        config.validate()?;

        let auth: HeadersProvider = match self.headers_provider {
            Some(custom) => custom,
            None => {
                let api_key = resolve_api_key(&config.api_key, |name| std::env::var(name).ok())
                    .ok_or_else(|| {
                        ImageError::MissingApiKey(format!(
                            "ByteDance API key not provided; pass it to the builder or set {}",
                            ByteDanceConfig::API_KEY_ENV_VAR
                        ))
                    })?;
                config.api_key = api_key.clone();
                Arc::new(move || -> Result<HeaderMap, ImageError> {
                    Ok(HttpHeaderBuilder::new()
                        .with_bearer_auth(api_key.expose_secret())?
                        .with_json_content_type()
                        .build())
                })
            }
        };

        // Static headers are validated here so a typo fails at build time, not per call.
        // Auth headers are laid over them so a refreshing provider always wins.
        let static_headers = HttpHeaderBuilder::new()
            .with_custom_headers(&config.http_config.headers)?
            .build();
        let headers: HeadersProvider = Arc::new(move || -> Result<HeaderMap, ImageError> {
            Ok(overlay_headers(static_headers.clone(), &auth()?))
        });

        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client(&config.http_config)?,
        };

        tracing::debug!(
            base_url = %config.base_url,
            custom_transport = self.transport.is_some(),
            "bytedance provider built"
        );

        Ok(ByteDanceProvider::new(
            config,
            headers,
            http_client,
            self.transport,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue};

    #[test]
    fn test_builder_configuration() {
        let builder = ByteDanceBuilder::new()
            .api_key("test-key")
            .base_url("https://proxy.local/v3/")
            .timeout(Duration::from_secs(90))
            .header("X-Tenant", "t1");

        assert_eq!(builder.config.api_key.expose_secret(), "test-key");
        assert_eq!(builder.config.base_url, "https://proxy.local/v3");
        assert_eq!(
            builder.config.http_config.timeout,
            Some(Duration::from_secs(90))
        );
        assert_eq!(
            builder.config.http_config.headers.get("X-Tenant").map(String::as_str),
            Some("t1")
        );
    }

    #[test]
    fn built_headers_carry_bearer_and_static_headers() {
        let provider = ByteDanceBuilder::new()
            .api_key("test-key")
            .header("X-Tenant", "t1")
            .build()
            .expect("build ok");

        let headers = provider.headers().expect("headers ok");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
        assert_eq!(headers.get("x-tenant").unwrap(), "t1");
    }

    #[test]
    fn custom_headers_provider_needs_no_api_key() {
        let provider = ByteDanceBuilder::new()
            .headers_provider(Arc::new(|| {
                let mut h = HeaderMap::new();
                h.insert(AUTHORIZATION, HeaderValue::from_static("Bearer rotated"));
                Ok::<_, ImageError>(h)
            }))
            .build()
            .expect("build ok");

        let headers = provider.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer rotated");
    }

    #[test]
    fn headers_provider_wins_over_static_authorization() {
        let provider = ByteDanceBuilder::new()
            .header("Authorization", "Bearer static")
            .header("X-Tenant", "t1")
            .headers_provider(Arc::new(|| {
                let mut h = HeaderMap::new();
                h.insert(AUTHORIZATION, HeaderValue::from_static("Bearer rotated"));
                Ok::<_, ImageError>(h)
            }))
            .build()
            .expect("build ok");

        let headers = provider.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer rotated");
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers.get("x-tenant").unwrap(), "t1");
    }

    #[test]
    fn invalid_static_header_fails_at_build() {
        let result = ByteDanceBuilder::new()
            .api_key("k")
            .header("bad header", "v")
            .build();
        assert!(matches!(result, Err(ImageError::ConfigurationError(_))));
    }

    #[test]
    fn invalid_base_url_fails_at_build() {
        let result = ByteDanceBuilder::new().api_key("k").base_url("ftp://x").build();
        assert!(matches!(result, Err(ImageError::ConfigurationError(_))));
    }
}
