//! ByteDance provider: the factory for image models

use super::builder::ByteDanceBuilder;
use super::config::ByteDanceConfig;
use super::image::{ByteDanceImageModel, ByteDanceImageModelConfig};
use imagegen_core::error::ImageError;
use imagegen_core::execution::http::{HeadersProvider, HttpTransport};
use reqwest::header::HeaderMap;
use std::sync::Arc;

/// ByteDance provider
///
/// Cheap to clone; every image model it creates shares the HTTP client and
/// header source.
#[derive(Clone)]
pub struct ByteDanceProvider {
    config: ByteDanceConfig,
    headers: HeadersProvider,
    http_client: reqwest::Client,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ByteDanceProvider {
    pub fn builder() -> ByteDanceBuilder {
        ByteDanceBuilder::new()
    }

    pub(crate) fn new(
        config: ByteDanceConfig,
        headers: HeadersProvider,
        http_client: reqwest::Client,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> Self {
        Self {
            config,
            headers,
            http_client,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Headers the next request would be sent with (before per-call headers).
    pub fn headers(&self) -> Result<HeaderMap, ImageError> {
        (self.headers)()
    }

    /// Create an image model. Unknown ids are passed to the API unchanged.
    pub fn image_model(&self, model_id: impl Into<String>) -> ByteDanceImageModel {
        ByteDanceImageModel::new(
            model_id,
            ByteDanceImageModelConfig {
                provider: ByteDanceConfig::PROVIDER_NAME.to_string(),
                base_url: self.config.base_url.clone(),
                headers: self.headers.clone(),
                transport: self.transport.clone(),
                http_client: self.http_client.clone(),
            },
        )
    }
}

impl std::fmt::Debug for ByteDanceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteDanceProvider")
            .field("base_url", &self.config.base_url)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use imagegen_core::ImageModel;

    #[test]
    fn image_models_inherit_provider_settings() {
        let provider = ByteDanceProvider::builder()
            .api_key("k")
            .base_url("https://proxy.local/api/v3")
            .build()
            .unwrap();

        for id in models::all_models() {
            let model = provider.image_model(id);
            assert_eq!(model.provider(), "bytedance.image");
            assert_eq!(model.model_id(), id);
        }
        assert_eq!(
            models::all_models(),
            vec!["seedream-4-0-250828", "seedream-3-0-t2i-250415"]
        );

        let custom = provider.image_model("my-fine-tune-001");
        assert_eq!(custom.model_id(), "my-fine-tune-001");
        assert_eq!(provider.base_url(), "https://proxy.local/api/v3");
    }
}
