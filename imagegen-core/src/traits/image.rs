//! Image model trait

use crate::error::ImageError;
use crate::types::{ImageGenerationRequest, ImageGenerationResponse};
use async_trait::async_trait;

/// A provider-specific image model behind a provider-agnostic surface.
///
/// Each vendor adapter is its own implementing type; callers hold it as
/// `Arc<dyn ImageModel>` and never need to know the wire format.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Provider name, e.g. `"bytedance.image"`
    fn provider(&self) -> &str;

    /// Model id sent to the provider
    fn model_id(&self) -> &str;

    /// Maximum number of images a caller may request through one `generate` call.
    fn max_images_per_call(&self) -> u32;

    /// Generate images for `request` with exactly one provider round trip.
    async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ImageError>;
}
