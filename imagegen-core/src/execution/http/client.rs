//! HTTP client construction from `HttpConfig`.

use crate::error::ImageError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` honoring timeouts, proxy and user agent from `config`.
///
/// Default headers in `config.headers` are not baked into the client; providers merge
/// them per request so that per-call headers can override them.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, ImageError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| ImageError::ConfigurationError(format!("Invalid proxy '{proxy}': {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ImageError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(build_http_client(&HttpConfig::default()).is_ok());
    }
}
