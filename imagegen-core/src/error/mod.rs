//! Error Handling Module
//!
//! - Core error type (`ImageError`)
//! - Conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use imagegen_core::error::ImageError;
//!
//! let error = ImageError::api_error(500, "Internal error");
//! assert_eq!(error.status_code(), Some(500));
//! assert!(error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;
