//! Transport trait for pluggable HTTP backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::request::RequestConfig;
use crate::types::response::TransportResponse;

/// Carries one resolved request to the backend.
///
/// The reqwest implementation lives in `qilin-client`. Implementations must
/// map connection failures and non-2xx statuses to
/// [`ErrorKind::Transport`](crate::error::ErrorKind::Transport) errors and
/// must not retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug + 'static {
    /// Return the transport name (e.g., "reqwest").
    fn transport_type(&self) -> &str;

    /// Issue exactly one request and wait for it to settle.
    async fn send(&self, request: RequestConfig) -> AppResult<TransportResponse>;
}
