//! Core Data Type Definitions
//!
//! ## Module Organization
//!
//! - **`common`** - Warnings shared across providers
//! - **`http`** - HTTP configuration (`HttpConfig` and builder) and response metadata
//! - **`image`** - Image generation request/response types
//! - **`provider_options_map`** - Provider-id keyed pass-through options
//!
//! Everything is re-exported at the module root:
//!
//! ```rust,ignore
//! use imagegen_core::types::{ImageGenerationRequest, ReferenceFile, Warning};
//! ```

pub mod common;
pub mod http;
pub mod image;
pub mod provider_options_map;

pub use common::*;
pub use http::*;
pub use image::*;
pub use provider_options_map::*;
