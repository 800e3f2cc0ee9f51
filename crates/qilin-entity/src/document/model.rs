//! Document entity model.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qilin_client::{Persistable, QilinClient, Resource};
use qilin_core::result::AppResult;
use qilin_core::types::timestamp;
use qilin_core::types::{ApiResponse, ResourceId};

use super::version::DocumentVersion;

/// Collection path for documents.
pub const DOCUMENTS_PATH: &str = "documents";

/// A serialized document as returned by the Qilin Engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Backend id.
    pub id: ResourceId,
    /// When the document was created.
    #[serde(with = "timestamp::format")]
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    #[serde(with = "timestamp::format")]
    pub updated_at: DateTime<Utc>,
    /// Version records, oldest first.
    #[serde(default)]
    pub document_versions: Vec<DocumentVersion>,
}

/// Body sent when creating or updating a document. The backend currently
/// takes no document attributes, so this serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPayload {}

/// A document stored in the Qilin Engine.
#[derive(Debug, Clone)]
pub struct Document {
    resource: Resource,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    versions: Vec<DocumentVersion>,
}

impl Document {
    /// A fresh, unpersisted document stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            resource: Resource::new(DOCUMENTS_PATH, None),
            created_at: now,
            updated_at: now,
            versions: Vec::new(),
        }
    }

    /// Hydrate a document from a backend response.
    pub fn from_response(response: DocumentResponse, client: Option<Arc<QilinClient>>) -> Self {
        let mut resource = Resource::new(DOCUMENTS_PATH, client);
        resource.set_id(Some(response.id));
        Self {
            resource,
            created_at: response.created_at,
            updated_at: response.updated_at,
            versions: response.document_versions,
        }
    }

    /// Attach a client, consuming and returning the document.
    pub fn with_client(mut self, client: Arc<QilinClient>) -> Self {
        self.resource.set_client(Some(client));
        self
    }

    /// Re-apply a backend response, keeping the attached client.
    pub fn hydrate(&mut self, response: DocumentResponse) {
        let client = self.resource.client().cloned();
        *self = Self::from_response(response, client);
    }

    pub fn id(&self) -> Option<ResourceId> {
        self.resource.id()
    }

    pub fn set_id(&mut self, id: Option<ResourceId>) {
        self.resource.set_id(id);
    }

    pub fn path(&self) -> &'static str {
        self.resource.path()
    }

    pub fn client(&self) -> Option<&Arc<QilinClient>> {
        self.resource.client()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Version records in backend order.
    pub fn versions(&self) -> &[DocumentVersion] {
        &self.versions
    }

    pub fn versions_mut(&mut self) -> &mut Vec<DocumentVersion> {
        &mut self.versions
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Persistable for Document {
    type Response = DocumentResponse;

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }

    async fn save(&self) -> AppResult<ApiResponse<DocumentResponse>> {
        self.resource.save_raw(&DocumentPayload::default()).await
    }

    async fn destroy(&self) -> AppResult<ApiResponse<Option<DocumentResponse>>> {
        self.resource.destroy_raw().await
    }
}
