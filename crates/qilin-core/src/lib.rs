//! # qilin-core
//!
//! Core crate for the Qilin SDK. Contains the transport and authentication
//! seam traits, configuration schemas, typed identifiers, the request model
//! shared by every transport, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Qilin crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
