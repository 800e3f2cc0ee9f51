//! Seam traits defined in `qilin-core` and implemented by other crates.

pub mod auth;
pub mod transport;

pub use auth::AuthStrategy;
pub use transport::Transport;
