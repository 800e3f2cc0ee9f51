//! # qilin-sdk
//!
//! Typed client for the Qilin Engine. Folders and documents are modeled as
//! local objects whose `save()` and `destroy()` map onto REST calls.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use qilin_sdk::{Folder, Persistable, QilinClient};
//!
//! # async fn demo() -> qilin_sdk::AppResult<()> {
//! let client = Arc::new(QilinClient::new("http://localhost:3000/api")?);
//!
//! let mut folder = Folder::new().with_client(client);
//! folder.set_name("Reports");
//! let created = folder.save().await?;
//! folder.hydrate(created.data);
//! # Ok(())
//! # }
//! ```

pub use qilin_client;
pub use qilin_core;
pub use qilin_entity;

pub use qilin_client::{ApiKey, BearerToken, FnAuth, NoAuth, Persistable, QilinClient, Resource};
pub use qilin_core::types::{ApiResponse, ResourceId};
pub use qilin_core::{AppError, AppResult, ErrorKind};
pub use qilin_entity::{Document, DocumentVersion, Folder, FolderPayload, FolderResponse};
