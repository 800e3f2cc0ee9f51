//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Which authentication scheme the client applies to outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// No credentials are attached.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    Bearer,
    /// A static key sent in a configurable header.
    ApiKey,
}

/// Credential settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// The scheme to use.
    #[serde(default)]
    pub scheme: AuthScheme,
    /// Bearer token or API key, depending on `scheme`.
    #[serde(default)]
    pub token: Option<String>,
    /// Header carrying the API key when `scheme = "api_key"`.
    #[serde(default = "default_api_key_header")]
    pub header: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            scheme: AuthScheme::None,
            token: None,
            header: default_api_key_header(),
        }
    }
}

fn default_api_key_header() -> String {
    "X-Api-Key".to_string()
}
