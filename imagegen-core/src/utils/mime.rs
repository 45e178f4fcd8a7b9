//! MIME Type Detection Utilities
//!
//! Magic number detection via the `infer` crate, used when callers hand over raw
//! image bytes without a media type.

/// Fallback media type for unrecognized content
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}
