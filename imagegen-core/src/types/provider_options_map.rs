//! Open provider options map
//!
//! A provider-id keyed JSON map used as a pass-through channel for provider-specific
//! configuration. It avoids a closed enum so that new providers and new provider
//! knobs do not require changes in `imagegen-core`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider-id keyed JSON map.
///
/// - Key: provider id (e.g. `"bytedance"`)
/// - Value: provider-specific JSON object (recommended), but any JSON value is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderOptionsMap(pub BTreeMap<String, serde_json::Value>);

impl ProviderOptionsMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert provider options under `provider_id`.
    ///
    /// Provider ids are normalized to lowercase for consistency.
    pub fn insert(&mut self, provider_id: impl AsRef<str>, value: serde_json::Value) {
        self.0
            .insert(provider_id.as_ref().to_ascii_lowercase(), value);
    }

    /// Get provider options for `provider_id`.
    pub fn get(&self, provider_id: impl AsRef<str>) -> Option<&serde_json::Value> {
        self.0.get(&provider_id.as_ref().to_ascii_lowercase())
    }

    /// Get provider options for `provider_id` as a JSON object.
    pub fn get_object(
        &self,
        provider_id: impl AsRef<str>,
    ) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.get(provider_id)?.as_object()
    }
}
