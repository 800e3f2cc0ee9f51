//! Core type definitions used across the Qilin workspace.

pub mod id;
pub mod request;
pub mod response;
pub mod timestamp;

pub use id::ResourceId;
pub use request::{AuthConfig, HttpMethod, RequestConfig};
pub use response::{ApiResponse, TransportResponse};
