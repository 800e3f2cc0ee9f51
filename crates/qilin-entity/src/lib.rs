//! # qilin-entity
//!
//! Resource models for the Qilin Engine. Each entity embeds a
//! [`Resource`](qilin_client::Resource) core, can be built fresh or
//! hydrated from a backend response, and implements
//! [`Persistable`](qilin_client::Persistable).

pub mod document;
pub mod folder;

pub use document::{Document, DocumentPayload, DocumentResponse, DocumentVersion};
pub use folder::{ChildRef, Folder, FolderAttrs, FolderPayload, FolderResponse};
