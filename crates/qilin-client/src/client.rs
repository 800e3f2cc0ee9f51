//! The Qilin Engine client.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use url::Url;

use qilin_core::config::ClientConfig;
use qilin_core::config::transport::TransportConfig;
use qilin_core::error::AppError;
use qilin_core::result::AppResult;
use qilin_core::traits::{AuthStrategy, Transport};
use qilin_core::types::{AuthConfig, RequestConfig, TransportResponse};

use crate::auth::{NoAuth, strategy_from_settings};
use crate::transport::ReqwestTransport;

/// Connection to a Qilin Engine backend.
///
/// Resources hold it through an `Arc` and never own it exclusively; one
/// client is typically shared by every resource in a program. The endpoint
/// can be re-pointed at runtime and every sharing resource sees the change.
#[derive(Debug)]
pub struct QilinClient {
    endpoint: RwLock<Url>,
    auth: Arc<dyn AuthStrategy>,
    transport: Arc<dyn Transport>,
}

impl QilinClient {
    /// Create a client with no authentication and the default HTTP transport.
    pub fn new(endpoint: &str) -> AppResult<Self> {
        Self::builder(endpoint).build()
    }

    /// Start building a client for the given endpoint.
    pub fn builder(endpoint: &str) -> QilinClientBuilder {
        QilinClientBuilder {
            endpoint: endpoint.to_string(),
            auth: None,
            transport: None,
            transport_config: TransportConfig::default(),
        }
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Self::builder(&config.endpoint)
            .auth_arc(strategy_from_settings(&config.auth)?)
            .transport_config(config.transport.clone())
            .build()
    }

    /// The current base URL.
    pub fn endpoint(&self) -> Url {
        self.endpoint.read().clone()
    }

    /// Replace the base URL.
    pub fn set_endpoint(&self, endpoint: Url) -> AppResult<()> {
        let endpoint = validate_endpoint(endpoint)?;
        *self.endpoint.write() = endpoint;
        Ok(())
    }

    /// Authentication settings to merge into the next request.
    pub fn xhr_config(&self) -> AuthConfig {
        self.auth.auth_config()
    }

    /// The configured authentication strategy.
    pub fn auth(&self) -> &Arc<dyn AuthStrategy> {
        &self.auth
    }

    /// The configured transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Issue one request through the transport.
    pub async fn send(&self, request: RequestConfig) -> AppResult<TransportResponse> {
        debug!(
            method = %request.method,
            url = %request.url,
            transport = self.transport.transport_type(),
            auth = self.auth.scheme(),
            "Dispatching resource request"
        );
        self.transport.send(request).await
    }
}

/// Builder for [`QilinClient`].
#[derive(Debug)]
pub struct QilinClientBuilder {
    endpoint: String,
    auth: Option<Arc<dyn AuthStrategy>>,
    transport: Option<Arc<dyn Transport>>,
    transport_config: TransportConfig,
}

impl QilinClientBuilder {
    /// Use the given authentication strategy.
    pub fn auth(self, auth: impl AuthStrategy) -> Self {
        self.auth_arc(Arc::new(auth))
    }

    /// Use an already shared authentication strategy.
    pub fn auth_arc(mut self, auth: Arc<dyn AuthStrategy>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Use a custom transport instead of the reqwest default.
    pub fn transport(mut self, transport: impl Transport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use an already shared transport.
    pub fn transport_arc(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Settings for the default reqwest transport. Ignored when a custom
    /// transport is supplied.
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    /// Validate the endpoint and assemble the client.
    pub fn build(self) -> AppResult<QilinClient> {
        let endpoint = validate_endpoint(Url::parse(&self.endpoint)?)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.transport_config)?),
        };

        Ok(QilinClient {
            endpoint: RwLock::new(endpoint),
            auth: self.auth.unwrap_or_else(|| Arc::new(NoAuth)),
            transport,
        })
    }
}

fn validate_endpoint(endpoint: Url) -> AppResult<Url> {
    if endpoint.cannot_be_a_base() {
        return Err(AppError::configuration(format!(
            "Endpoint '{endpoint}' cannot be used as a base URL"
        )));
    }
    Ok(endpoint)
}
