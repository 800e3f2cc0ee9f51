//! Response types returned by transports and the resource layer.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// What a transport hands back for a settled request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Raw response body.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. An empty body decodes as JSON `null`, so
    /// `Option<T>` targets accept `204 No Content` replies.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        let body = self.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        Ok(serde_json::from_str(body)?)
    }
}

/// A typed response from a resource call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Decoded body.
    pub data: T,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a transport response into a typed response.
    pub fn from_transport(response: TransportResponse) -> AppResult<Self> {
        let data = response.decode()?;
        Ok(Self {
            status: response.status,
            headers: response.headers,
            data,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Discard status and headers.
    pub fn into_data(self) -> T {
        self.data
    }
}
