//! ByteDance configuration

use imagegen_core::error::ImageError;
use imagegen_core::types::HttpConfig;
use secrecy::{ExposeSecret, SecretString};

/// ByteDance provider configuration
#[derive(Debug, Clone)]
pub struct ByteDanceConfig {
    /// Ark API key
    pub api_key: SecretString,
    /// Base URL, without trailing slash
    pub base_url: String,
    /// HTTP settings; `http_config.headers` are sent with every request
    pub http_config: HttpConfig,
}

impl ByteDanceConfig {
    /// Ark mainland endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://ark.cn-beijing.volces.com/api/v3";

    /// Provider name reported by image models
    pub const PROVIDER_NAME: &'static str = "bytedance.image";

    /// Key under which callers pass provider options
    pub const PROVIDER_OPTIONS_KEY: &'static str = "bytedance";

    /// Environment variable consulted when no API key is configured
    pub const API_KEY_ENV_VAR: &'static str = "ARK_API_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    pub fn validate(&self) -> Result<(), ImageError> {
        if self.base_url.is_empty() {
            return Err(ImageError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ImageError::ConfigurationError(format!(
                "Base URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ByteDanceConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            http_config: HttpConfig::default(),
        }
    }
}

pub(crate) fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Pick the explicit key, falling back to `lookup(ARK_API_KEY)`.
pub(crate) fn resolve_api_key(
    explicit: &SecretString,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<SecretString> {
    if !explicit.expose_secret().is_empty() {
        return Some(explicit.clone());
    }
    lookup(ByteDanceConfig::API_KEY_ENV_VAR)
        .filter(|k| !k.trim().is_empty())
        .map(SecretString::from)
}
