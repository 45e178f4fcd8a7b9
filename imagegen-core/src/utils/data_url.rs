//! Data URL conversion for reference files

use crate::types::{FileData, ReferenceFile};
use base64::Engine;

/// Convert a reference file into the single string form image APIs accept.
///
/// URLs pass through untouched; inline data becomes `data:<mediaType>;base64,<payload>`.
/// Base64 strings are used verbatim, raw bytes are encoded with the standard alphabet.
pub fn reference_file_to_data_url(file: &ReferenceFile) -> String {
    match file {
        ReferenceFile::Url { url } => url.clone(),
        ReferenceFile::File { data, media_type } => {
            let payload = match data {
                FileData::Base64(b64) => b64.clone(),
                FileData::Bytes(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
            };
            format!("data:{media_type};base64,{payload}")
        }
    }
}
