//! HTTP Utilities
//!
//! - HTTP client construction
//! - Header management
//! - Pluggable transports
//! - Failure classification
//! - The JSON POST entry point providers call

pub mod client;
pub mod errors;
pub mod headers;
pub mod request;
pub mod transport;

pub use client::*;
pub use errors::*;
pub use headers::*;
pub use request::*;
pub use transport::*;
