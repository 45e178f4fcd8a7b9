//! HTTP Headers Utility
//!
//! Common utilities for building and merging HTTP headers across providers.

use crate::error::ImageError;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Header-producing function invoked once per request.
///
/// Returning fresh values on each call is allowed (e.g. rotating tokens).
pub type HeadersProvider = Arc<dyn Fn() -> Result<HeaderMap, ImageError> + Send + Sync>;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, ImageError> {
        let auth_value = format!("Bearer {token}");
        self.headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| {
                ImageError::ConfigurationError(format!("Invalid API key format: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ImageError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| ImageError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ImageError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ImageError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                ImageError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, ImageError> {
        for (key, value) in custom_headers {
            self = self.with_header(key, value)?;
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge caller-supplied headers into base headers.
///
/// Extra headers override base headers with the same (case-insensitive) name.
/// An invalid name or value, or two extra entries that differ only in case, is
/// rejected with `InvalidInput` instead of being dropped.
pub fn merge_headers(
    mut base: HeaderMap,
    extra: &HashMap<String, String>,
) -> Result<HeaderMap, ImageError> {
    let mut seen = HashSet::new();
    for (k, v) in extra {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| ImageError::InvalidInput(format!("Invalid header name '{k}': {e}")))?;
        let value = HeaderValue::from_str(v).map_err(|e| {
            ImageError::InvalidInput(format!("Invalid header value for '{k}': {e}"))
        })?;
        if !seen.insert(name.clone()) {
            return Err(ImageError::InvalidInput(format!(
                "Header '{name}' given more than once with different casing"
            )));
        }
        base.insert(name, value);
    }
    Ok(base)
}

/// Lay `overlay` on top of `base`: every name present in `overlay` replaces all of
/// its values in `base`.
pub fn overlay_headers(mut base: HeaderMap, overlay: &HeaderMap) -> HeaderMap {
    for name in overlay.keys() {
        base.remove(name);
    }
    for (name, value) in overlay {
        base.append(name.clone(), value.clone());
    }
    base
}

/// Convert a HeaderMap to HashMap<String, String> with lowercased keys.
///
/// Header values that are not valid UTF-8 are dropped.
pub fn headermap_to_hashmap(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|v_str| (k.as_str().to_string(), v_str.to_string()))
        })
        .collect()
}
