//! Outgoing request model shared by every transport.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP verbs used by the resource layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request authentication settings produced by an auth strategy.
///
/// Header names are stored lowercase so merging is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Headers to attach to the request.
    pub headers: BTreeMap<String, String>,
}

impl AuthConfig {
    /// A configuration that adds nothing to a request.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Whether this configuration carries no credentials.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// A fully resolved request: auth configuration merged with the call's
/// URL, method and body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Absolute request URL.
    pub url: String,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Headers, lowercase names.
    pub headers: BTreeMap<String, String>,
    /// JSON body, if any.
    pub data: Option<serde_json::Value>,
}

impl RequestConfig {
    /// Start a request from the auth configuration so credentials take
    /// precedence over anything the call adds later.
    ///
    /// Auth header names are lowercased here as well, since strategies may
    /// fill `AuthConfig::headers` directly.
    pub fn new(auth: AuthConfig, method: HttpMethod, url: impl Into<String>) -> Self {
        let headers = auth
            .headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        Self {
            url: url.into(),
            method,
            headers,
            data: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Add a header unless one with the same name is already present.
    pub fn with_default_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_insert_with(|| value.into());
        self
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
