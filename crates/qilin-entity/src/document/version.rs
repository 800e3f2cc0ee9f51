//! Document version records.

use serde::{Deserialize, Serialize};

/// One entry of a document's `document_versions` list.
///
/// Versions are a separate backend resource that this SDK does not model;
/// the record is kept as the raw JSON the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(serde_json::Value);

impl DocumentVersion {
    /// Wrap a raw version record.
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    /// The raw record.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume the wrapper and return the raw record.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}
