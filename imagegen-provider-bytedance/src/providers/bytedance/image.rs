//! ByteDance image model
//!
//! Maps the provider-agnostic image request onto Ark's `/images/generations`
//! endpoint and maps the response back. Output is always requested as base64.

use super::config::ByteDanceConfig;
use super::error::ByteDanceFailedResponseHandler;
use async_trait::async_trait;
use imagegen_core::error::ImageError;
use imagegen_core::execution::http::{
    HeadersProvider, HttpTransport, PostJsonRequest, headermap_to_hashmap, merge_headers,
    parse_json_response, post_json_to_api,
};
use imagegen_core::traits::ImageModel;
use imagegen_core::types::{
    HttpResponseInfo, ImageGenerationRequest, ImageGenerationResponse, ImageUsage, Warning,
};
use imagegen_core::utils::{join_url, reference_file_to_data_url};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Size sent when the request does not specify one
pub const DEFAULT_IMAGE_SIZE: &str = "2048x2048";

/// The only response format this adapter requests
pub const RESPONSE_FORMAT_B64_JSON: &str = "b64_json";

const MAX_IMAGES_PER_CALL: u32 = 1;
const GENERATIONS_PATH: &str = "/images/generations";

/// Construction-time settings for [`ByteDanceImageModel`].
#[derive(Clone)]
pub struct ByteDanceImageModelConfig {
    /// Provider name, e.g. `"bytedance.image"`
    pub provider: String,
    pub base_url: String,
    /// Invoked once per call
    pub headers: HeadersProvider,
    /// Custom fetch; `None` sends through `http_client`
    pub transport: Option<Arc<dyn HttpTransport>>,
    pub http_client: reqwest::Client,
}

impl std::fmt::Debug for ByteDanceImageModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteDanceImageModelConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

/// Ark image generation response schema
#[derive(Debug, Deserialize)]
struct ByteDanceImageResponse {
    #[serde(default)]
    model: Option<String>,
    data: Vec<ByteDanceImageData>,
    #[serde(default)]
    usage: Option<ByteDanceUsage>,
}

#[derive(Debug, Deserialize)]
struct ByteDanceImageData {
    #[serde(default)]
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ByteDanceUsage {
    output_tokens: u64,
    total_tokens: u64,
}

/// Image model for ByteDance Seedream
#[derive(Debug, Clone)]
pub struct ByteDanceImageModel {
    model_id: String,
    config: ByteDanceImageModelConfig,
}

impl ByteDanceImageModel {
    pub fn new(model_id: impl Into<String>, config: ByteDanceImageModelConfig) -> Self {
        Self {
            model_id: model_id.into(),
            config,
        }
    }

    /// Build the Ark request body and the warnings for settings Ark ignores.
    ///
    /// Provider options may override `model`, `prompt` and `size`, but never
    /// `response_format`, which is always `b64_json`.
    pub fn build_request_body(&self, request: &ImageGenerationRequest) -> (Value, Vec<Warning>) {
        let mut warnings = Vec::new();
        if request.aspect_ratio.is_some() {
            warnings.push(Warning::unsupported_setting("aspectRatio", None::<String>));
        }
        if request.seed.is_some() {
            warnings.push(Warning::unsupported_setting("seed", None::<String>));
        }

        let passthrough = request
            .provider_options_map
            .get_object(ByteDanceConfig::PROVIDER_OPTIONS_KEY)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|(key, _)| key != "response_format");

        let mut body = Map::new();
        body.insert("model".into(), Value::String(self.model_id.clone()));
        body.insert("prompt".into(), Value::String(request.prompt.clone()));
        body.insert(
            "size".into(),
            Value::String(
                request
                    .size
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string()),
            ),
        );
        body.extend(passthrough);
        body.insert(
            "response_format".into(),
            Value::String(RESPONSE_FORMAT_B64_JSON.into()),
        );

        if let Some(files) = request.files.as_deref().filter(|f| !f.is_empty()) {
            let mut images: Vec<Value> = files
                .iter()
                .map(|f| Value::String(reference_file_to_data_url(f)))
                .collect();
            let image = if images.len() == 1 {
                images.remove(0)
            } else {
                Value::Array(images)
            };
            body.insert("image".into(), image);
        }

        (Value::Object(body), warnings)
    }
}

#[async_trait]
impl ImageModel for ByteDanceImageModel {
    fn provider(&self) -> &str {
        &self.config.provider
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn max_images_per_call(&self) -> u32 {
        MAX_IMAGES_PER_CALL
    }

    async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ImageError> {
        let (body, warnings) = self.build_request_body(&request);

        let mut headers = (self.config.headers)()?;
        if let Some(extra) = &request.headers {
            headers = merge_headers(headers, extra)?;
        }

        let response = post_json_to_api(PostJsonRequest {
            provider_id: &self.config.provider,
            url: join_url(&self.config.base_url, GENERATIONS_PATH),
            headers,
            body,
            cancel: request.cancel.clone(),
            transport: self.config.transport.clone(),
            http_client: &self.config.http_client,
            failed_response_handler: &ByteDanceFailedResponseHandler,
        })
        .await?;

        let parsed: ByteDanceImageResponse =
            parse_json_response(&self.config.provider, response.value)?;

        let images = parsed
            .data
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.b64_json.ok_or(ImageError::MissingImageData { index }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ImageGenerationResponse {
            images,
            warnings,
            response: HttpResponseInfo {
                timestamp: chrono::Utc::now(),
                model_id: Some(parsed.model.unwrap_or_else(|| self.model_id.clone())),
                headers: headermap_to_hashmap(&response.headers),
            },
            usage: parsed.usage.map(|u| ImageUsage {
                input_tokens: None,
                output_tokens: Some(u.output_tokens),
                total_tokens: Some(u.total_tokens),
            }),
        })
    }
}
