//! imagegen-core
//!
//! Provider-agnostic image model interface, types, and shared HTTP execution primitives.
#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod execution;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::ImageError;
pub use traits::ImageModel;
