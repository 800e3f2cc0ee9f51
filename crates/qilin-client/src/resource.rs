//! The shared resource core and the persistence capability trait.
//!
//! Every modeled entity embeds a [`Resource`] and implements
//! [`Persistable`] by handing its own payload and response types to
//! [`Resource::save_raw`] and [`Resource::destroy_raw`].
//!
//! | Operation | Method | URL |
//! |-----------|--------|-----|
//! | create    | POST   | `{endpoint}/{path}` |
//! | update    | PUT    | `{endpoint}/{path}/{id}` |
//! | delete    | DELETE | `{endpoint}/{path}/{id}` |

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use qilin_core::error::AppError;
use qilin_core::result::AppResult;
use qilin_core::types::{ApiResponse, HttpMethod, RequestConfig, ResourceId};

use crate::client::QilinClient;

/// Network identity of a modeled entity: its collection path, its
/// backend id (once persisted) and the client it talks through.
#[derive(Debug, Clone)]
pub struct Resource {
    path: &'static str,
    id: Option<ResourceId>,
    client: Option<Arc<QilinClient>>,
}

impl Resource {
    /// Create an unpersisted resource under `path`.
    pub fn new(path: &'static str, client: Option<Arc<QilinClient>>) -> Self {
        Self {
            path,
            id: None,
            client,
        }
    }

    /// The collection path, e.g. `"folders"`.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The backend id, if the resource has been persisted or hydrated.
    pub fn id(&self) -> Option<ResourceId> {
        self.id
    }

    /// Set the id when hydrating from a known response.
    pub fn set_id(&mut self, id: Option<ResourceId>) {
        self.id = id;
    }

    /// The attached client, if any.
    pub fn client(&self) -> Option<&Arc<QilinClient>> {
        self.client.as_ref()
    }

    /// Attach or detach a client.
    pub fn set_client(&mut self, client: Option<Arc<QilinClient>>) {
        self.client = client;
    }

    /// Whether the resource reflects backend-assigned state.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    fn require_client(&self) -> AppResult<&Arc<QilinClient>> {
        self.client.as_ref().ok_or_else(AppError::undefined_client)
    }

    /// Resolve `{endpoint}/{path}` plus `/{id}` when the id is defined.
    /// A trailing slash on the endpoint does not produce an empty segment.
    pub fn resolve_url(&self) -> AppResult<Url> {
        let client = self.require_client()?;
        if self.path.is_empty() {
            return Err(AppError::configuration("Resource path is empty"));
        }

        let mut url = client.endpoint();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::configuration("The client endpoint cannot be used as a base URL")
            })?;
            segments.pop_if_empty().push(self.path);
            if let Some(id) = self.id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    /// Build the create-or-update request without sending it.
    ///
    /// Fails with a configuration error when no client is attached.
    pub fn save_request<T>(&self, payload: &T) -> AppResult<RequestConfig>
    where
        T: Serialize + ?Sized,
    {
        let client = self.require_client()?;
        let url = self.resolve_url()?;
        let method = if self.id.is_some() {
            HttpMethod::Put
        } else {
            HttpMethod::Post
        };
        let data = serde_json::to_value(payload)?;

        Ok(RequestConfig::new(client.xhr_config(), method, url.as_str())
            .with_data(data)
            .with_default_header("Accept", "application/json")
            .with_default_header("Content-Type", "application/json"))
    }

    /// Build the delete request without sending it.
    ///
    /// Fails with a configuration error when no client is attached and with
    /// a state error when the resource was never persisted.
    pub fn destroy_request(&self) -> AppResult<RequestConfig> {
        let client = self.require_client()?;
        if !self.is_persisted() {
            return Err(AppError::not_persisted());
        }
        let url = self.resolve_url()?;

        Ok(
            RequestConfig::new(client.xhr_config(), HttpMethod::Delete, url.as_str())
                .with_default_header("Accept", "application/json"),
        )
    }

    /// POST or PUT `payload` and decode the reply as `K`.
    ///
    /// Issues exactly one request. Local id and timestamps are left alone;
    /// applying the reply is up to the caller.
    pub async fn save_raw<T, K>(&self, payload: &T) -> AppResult<ApiResponse<K>>
    where
        T: Serialize + Sync + ?Sized,
        K: DeserializeOwned,
    {
        let request = self.save_request(payload)?;
        let client = self.require_client()?;
        let response = client.send(request).await?;
        ApiResponse::from_transport(response)
    }

    /// DELETE the resource and decode the reply as `K`.
    ///
    /// The local id is kept, so the object becomes stale rather than fresh.
    pub async fn destroy_raw<K>(&self) -> AppResult<ApiResponse<K>>
    where
        K: DeserializeOwned,
    {
        let request = self.destroy_request()?;
        let client = self.require_client()?;
        let response = client.send(request).await?;
        ApiResponse::from_transport(response)
    }

    /// Identity comparison: the same instance, or the same collection with
    /// equal defined ids. Unpersisted resources only equal themselves.
    pub fn same_as(&self, other: &Resource) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self.id, other.id) {
            (Some(a), Some(b)) => self.path == other.path && a == b,
            _ => false,
        }
    }
}

/// A modeled entity that can be created, updated and destroyed remotely.
#[async_trait]
pub trait Persistable: Send + Sync {
    /// The backend's reply shape for this entity.
    type Response: DeserializeOwned + Send + 'static;

    /// The embedded resource core.
    fn resource(&self) -> &Resource;

    /// Mutable access to the embedded resource core.
    fn resource_mut(&mut self) -> &mut Resource;

    /// Create the entity (no id) or update it (id defined).
    async fn save(&self) -> AppResult<ApiResponse<Self::Response>>;

    /// Delete the entity. Empty replies decode as `None`.
    async fn destroy(&self) -> AppResult<ApiResponse<Option<Self::Response>>>;

    /// Identity comparison across any two persistable entities.
    fn equals<R>(&self, other: &R) -> bool
    where
        Self: Sized,
        R: Persistable + ?Sized,
    {
        self.resource().same_as(other.resource())
    }
}
