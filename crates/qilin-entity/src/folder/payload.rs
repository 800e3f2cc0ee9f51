//! Folder request and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qilin_core::types::ResourceId;
use qilin_core::types::timestamp;

use crate::document::DocumentResponse;

/// A serialized folder as returned by the Qilin Engine.
///
/// `parent` and `children` are folder-shaped themselves; `documents` are
/// document-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderResponse {
    /// Backend id.
    pub id: ResourceId,
    /// Folder name.
    pub name: String,
    /// When the folder was created.
    #[serde(with = "timestamp::format")]
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    #[serde(with = "timestamp::format")]
    pub updated_at: DateTime<Utc>,
    /// The containing folder, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<FolderResponse>>,
    /// Direct subfolders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FolderResponse>>,
    /// Documents stored directly in this folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentResponse>>,
}

/// Editable folder attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderAttrs {
    pub name: String,
}

/// A reference to a child folder inside a save payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChildRef {
    /// Attach an existing folder by id.
    Existing { id: ResourceId },
    /// Create a new folder with this name under `parent`.
    New { name: String, parent: ResourceId },
}

/// Body sent when creating or updating a folder.
///
/// Every section is optional and omitted from the JSON when `None`.
/// `parent: Some(None)` serializes as `null`, which moves the folder to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<FolderAttrs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Option<ResourceId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChildRef>>,
}
