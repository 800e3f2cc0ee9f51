//! # qilin-client
//!
//! Connects modeled resources to the Qilin Engine. [`QilinClient`] holds the
//! endpoint, the authentication strategy and the transport; [`Resource`] is
//! the shared core every entity embeds to resolve its URL, pick between
//! create and update, and dispatch exactly one request per call.

pub mod auth;
pub mod client;
pub mod resource;
pub mod transport;

pub use auth::{ApiKey, BearerToken, FnAuth, NoAuth};
pub use client::{QilinClient, QilinClientBuilder};
pub use resource::{Persistable, Resource};
pub use transport::ReqwestTransport;
