//! imagegen-provider-bytedance
//!
//! ByteDance Ark (Seedream) image generation behind the `imagegen-core` `ImageModel` trait.
//!
//! ```rust,ignore
//! use imagegen_core::{ImageModel, types::ImageGenerationRequest};
//! use imagegen_provider_bytedance::{ByteDanceProvider, models};
//!
//! let provider = ByteDanceProvider::builder().api_key("ark-...").build()?;
//! let model = provider.image_model(models::SEEDREAM_4_0);
//! let out = model.generate(ImageGenerationRequest::new("a lighthouse at dusk")).await?;
//! ```

pub mod providers;

pub use providers::bytedance::*;
