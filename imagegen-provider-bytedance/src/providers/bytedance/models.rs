//! ByteDance image model ids
//!
//! Any other id is passed through unchanged, so newer models work without a release.

/// Seedream 4.0 (text-to-image and multi-reference image-to-image)
pub const SEEDREAM_4_0: &str = "seedream-4-0-250828";

/// Seedream 3.0 text-to-image
pub const SEEDREAM_3_0_T2I: &str = "seedream-3-0-t2i-250415";

/// All model ids known at build time.
pub fn all_models() -> Vec<&'static str> {
    vec![SEEDREAM_4_0, SEEDREAM_3_0_T2I]
}
