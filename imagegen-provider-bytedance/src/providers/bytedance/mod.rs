//! ByteDance Provider Module
//!
//! - `config` - API key, base URL and HTTP settings
//! - `builder` - `ByteDanceBuilder`
//! - `provider` - `ByteDanceProvider`, the image model factory
//! - `image` - `ByteDanceImageModel`, request/response mapping for `/images/generations`
//! - `error` - Ark error envelope handling
//! - `models` - Known model ids

pub mod builder;
pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod provider;

pub use builder::ByteDanceBuilder;
pub use config::ByteDanceConfig;
pub use error::ByteDanceFailedResponseHandler;
pub use image::{ByteDanceImageModel, ByteDanceImageModelConfig};
pub use provider::ByteDanceProvider;
