//! Folder resource.

pub mod model;
pub mod payload;

pub use model::Folder;
pub use payload::{ChildRef, FolderAttrs, FolderPayload, FolderResponse};
