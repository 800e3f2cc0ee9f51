//! Convenience result type alias for the Qilin SDK.

use crate::error::AppError;

/// A specialized `Result` type for Qilin operations.
pub type AppResult<T> = Result<T, AppError>;
