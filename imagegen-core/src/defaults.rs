//! Default Configuration Values
//!
//! Centralizes the default values shared by providers built on this crate.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// Image generation at 2K resolution routinely takes 20-40 seconds, so the
    /// default leaves headroom for slow vendor queues.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("imagegen/", env!("CARGO_PKG_VERSION"));
}
