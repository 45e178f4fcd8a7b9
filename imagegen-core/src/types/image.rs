//! Image generation types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{HttpResponseInfo, ProviderOptionsMap, Warning};
use crate::utils::cancel::CancelHandle;

/// Payload of an inline reference file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileData {
    /// Base64-encoded data, used verbatim
    Base64(String),
    /// Raw bytes (base64-encoded when sent)
    Bytes(Vec<u8>),
}

/// Input image for image-to-image generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReferenceFile {
    /// Remote image, forwarded as-is
    Url { url: String },
    /// Inline image data
    File {
        data: FileData,
        #[serde(rename = "mediaType")]
        media_type: String,
    },
}

impl ReferenceFile {
    /// Create from URL string
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Create from a base64 string
    pub fn base64(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self::File {
            data: FileData::Base64(data.into()),
            media_type: media_type.into(),
        }
    }

    /// Create from raw bytes
    pub fn bytes(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self::File {
            data: FileData::Bytes(data),
            media_type: media_type.into(),
        }
    }

    /// Create from raw bytes, detecting the media type from magic numbers.
    ///
    /// Falls back to `application/octet-stream` when the format is not recognized.
    pub fn bytes_with_sniffed_media_type(data: Vec<u8>) -> Self {
        let media_type = crate::utils::mime::guess_mime_from_bytes(&data)
            .unwrap_or_else(|| crate::utils::mime::OCTET_STREAM.to_string());
        Self::bytes(data, media_type)
    }

    /// Media type of inline data, `None` for URLs
    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Url { .. } => None,
            Self::File { media_type, .. } => Some(media_type),
        }
    }
}

/// Image generation request
#[derive(Debug, Clone, Default)]
pub struct ImageGenerationRequest {
    /// Text prompt describing the image
    pub prompt: String,
    /// Reference images for image-to-image generation
    pub files: Option<Vec<ReferenceFile>>,
    /// Image size (e.g., "1024x1024")
    pub size: Option<String>,
    /// Aspect ratio (e.g., "16:9")
    pub aspect_ratio: Option<String>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Open provider options map
    pub provider_options_map: ProviderOptionsMap,
    /// Per-request headers; these win over provider headers on conflict
    pub headers: Option<HashMap<String, String>>,
    /// Cancellation signal forwarded to the transport
    pub cancel: Option<CancelHandle>,
}

impl ImageGenerationRequest {
    /// Create a request for `prompt` with everything else unset
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append a reference file (input order is preserved)
    pub fn with_file(mut self, file: ReferenceFile) -> Self {
        self.files.get_or_insert_with(Vec::new).push(file);
        self
    }

    /// Set options for `provider_id`, replacing previous ones
    pub fn with_provider_options(
        mut self,
        provider_id: impl AsRef<str>,
        options: serde_json::Value,
    ) -> Self {
        self.provider_options_map.insert(provider_id, options);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_cancel(mut self, cancel: CancelHandle) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Token accounting reported for an image generation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUsage {
    #[serde(rename = "inputTokens")]
    pub input_tokens: Option<u64>,
    #[serde(rename = "outputTokens")]
    pub output_tokens: Option<u64>,
    #[serde(rename = "totalTokens")]
    pub total_tokens: Option<u64>,
}

/// Image generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    /// Base64-encoded images, in provider response order
    pub images: Vec<String>,
    /// Settings the provider accepted but ignored
    pub warnings: Vec<Warning>,
    /// Response metadata
    pub response: HttpResponseInfo,
    /// Present only when the provider reported usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ImageUsage>,
}
