//! Utility helpers shared by providers

pub mod cancel;
pub mod data_url;
pub mod mime;
pub mod url;

pub use cancel::*;
pub use data_url::*;
pub use mime::*;
pub use url::*;
