//! Core Trait Definitions
//!
//! - **`image`** - Image generation (`ImageModel`)

pub mod image;

pub use image::*;
