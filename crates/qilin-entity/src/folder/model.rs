//! Folder entity model.
//!
//! The backend stores folders as a materialized-path tree (each folder
//! carries an ancestry such as `/1/4/9/`). The client never rebuilds that
//! path; it mirrors whatever neighbourhood a response includes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use qilin_client::{Persistable, QilinClient, Resource};
use qilin_core::result::AppResult;
use qilin_core::types::{ApiResponse, ResourceId};

use super::payload::{ChildRef, FolderAttrs, FolderPayload, FolderResponse};
use crate::document::Document;

/// Collection path for folders.
pub const FOLDERS_PATH: &str = "folders";

/// A folder in the Qilin Engine hierarchy.
#[derive(Debug, Clone)]
pub struct Folder {
    resource: Resource,
    name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    parent: Option<Box<Folder>>,
    children: Vec<Folder>,
    documents: Vec<Document>,
}

impl Folder {
    /// A fresh, unpersisted folder stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self::blank(None, now, now, None)
    }

    fn blank(
        name: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        client: Option<Arc<QilinClient>>,
    ) -> Self {
        Self {
            resource: Resource::new(FOLDERS_PATH, client),
            name,
            created_at,
            updated_at,
            parent: None,
            children: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Hydrate a folder and its immediate neighbourhood from a response.
    ///
    /// Reconstruction is one level deep: `parent` and each entry of
    /// `children` keep only their own id, name and timestamps, so a
    /// grandparent or grandchild present in the payload is dropped.
    /// `documents` are hydrated in full. Nested objects are not given the
    /// client; attach one before saving them.
    pub fn from_response(response: FolderResponse, client: Option<Arc<QilinClient>>) -> Self {
        let FolderResponse {
            id,
            name,
            created_at,
            updated_at,
            parent,
            children,
            documents,
        } = response;

        let mut folder = Self::blank(Some(name), created_at, updated_at, client);
        folder.resource.set_id(Some(id));
        folder.parent = parent.map(|p| Box::new(Self::direct_fields(*p)));
        folder.children = children
            .unwrap_or_default()
            .into_iter()
            .map(Self::direct_fields)
            .collect();
        folder.documents = documents
            .unwrap_or_default()
            .into_iter()
            .map(|d| Document::from_response(d, None))
            .collect();
        folder
    }

    /// Build a neighbour folder from its own fields only.
    fn direct_fields(response: FolderResponse) -> Self {
        let nested = response.parent.is_some()
            || response.children.as_ref().is_some_and(|c| !c.is_empty())
            || response.documents.as_ref().is_some_and(|d| !d.is_empty());
        if nested {
            debug!(folder_id = %response.id, "Dropping nested relations beyond one level");
        }

        let mut folder = Self::blank(
            Some(response.name),
            response.created_at,
            response.updated_at,
            None,
        );
        folder.resource.set_id(Some(response.id));
        folder
    }

    /// Attach a client, consuming and returning the folder.
    pub fn with_client(mut self, client: Arc<QilinClient>) -> Self {
        self.resource.set_client(Some(client));
        self
    }

    /// Re-apply a backend response, keeping the attached client.
    pub fn hydrate(&mut self, response: FolderResponse) {
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

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
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

    pub fn parent(&self) -> Option<&Folder> {
        self.parent.as_deref()
    }

    pub fn set_parent(&mut self, parent: Option<Folder>) {
        self.parent = parent.map(Box::new);
    }

    pub fn children(&self) -> &[Folder] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Folder> {
        &mut self.children
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Vec<Document> {
        &mut self.documents
    }

    /// Whether the folder has no known parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Build the save body from local state.
    ///
    /// - `attrs` carries the name when one is set.
    /// - `parent` carries the parent's id when the parent is persisted.
    /// - each child is referenced by id when persisted, or created by name
    ///   under this folder when this folder is persisted. Children with
    ///   neither are skipped.
    pub fn save_payload(&self) -> FolderPayload {
        let attrs = self.name.clone().map(|name| FolderAttrs { name });
        let parent = self.parent.as_ref().and_then(|p| p.id()).map(Some);

        let children: Vec<ChildRef> = self
            .children
            .iter()
            .filter_map(|child| match (child.id(), child.name(), self.id()) {
                (Some(id), _, _) => Some(ChildRef::Existing { id }),
                (None, Some(name), Some(parent)) => Some(ChildRef::New {
                    name: name.to_string(),
                    parent,
                }),
                _ => {
                    debug!("Skipping child folder with no id and no persisted parent");
                    None
                }
            })
            .collect();

        FolderPayload {
            attrs,
            parent,
            children: (!children.is_empty()).then_some(children),
        }
    }

    /// Create or update the folder with an explicit payload.
    pub async fn save_with(&self, payload: &FolderPayload) -> AppResult<ApiResponse<FolderResponse>> {
        self.resource.save_raw(payload).await
    }
}

impl Default for Folder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Persistable for Folder {
    type Response = FolderResponse;

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }

    async fn save(&self) -> AppResult<ApiResponse<FolderResponse>> {
        let payload = self.save_payload();
        self.resource.save_raw(&payload).await
    }

    async fn destroy(&self) -> AppResult<ApiResponse<Option<FolderResponse>>> {
        self.resource.destroy_raw().await
    }
}
