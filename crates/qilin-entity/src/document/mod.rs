//! Document resource.

pub mod model;
pub mod version;

pub use model::{Document, DocumentPayload, DocumentResponse};
pub use version::DocumentVersion;
