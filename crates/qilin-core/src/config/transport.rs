//! HTTP transport configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTTP transport that carries resource requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Per-request timeout in seconds (0 disables the timeout).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("qilin-sdk/{}", env!("CARGO_PKG_VERSION"))
}
