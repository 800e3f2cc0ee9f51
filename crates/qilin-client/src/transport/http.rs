//! reqwest-backed HTTP transport.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use qilin_core::config::transport::TransportConfig;
use qilin_core::error::{AppError, ErrorKind};
use qilin_core::result::AppResult;
use qilin_core::traits::Transport;
use qilin_core::types::{HttpMethod, RequestConfig, TransportResponse};

/// Sends requests with a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from configuration.
    pub fn new(config: &TransportConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        let client = builder.build().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            )
        })?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Longest slice of a rejected response body kept in the error message.
const MAX_ERROR_BODY: usize = 512;

fn rejection_message(method: HttpMethod, url: &str, status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("{method} {url} returned {status}");
    }
    let mut excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
    if excerpt.len() < body.len() {
        excerpt.push_str("...");
    }
    format!("{method} {url} returned {status}: {excerpt}")
}

fn transport_error(context: &str, err: reqwest::Error) -> AppError {
    let status = err.status().map(|s| s.as_u16());
    let error = AppError::with_source(ErrorKind::Transport, format!("{context}: {err}"), err);
    match status {
        Some(status) => error.with_status(status),
        None => error,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn transport_type(&self) -> &str {
        "reqwest"
    }

    async fn send(&self, request: RequestConfig) -> AppResult<TransportResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %request.method, url = %request.url, "Request failed: {}", e);
            transport_error("Request failed", e)
        })?;

        let status = response.status();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("Failed to read response body", e))?;

        debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            "Request settled"
        );

        if !status.is_success() {
            warn!(method = %request.method, url = %request.url, status = status.as_u16(), "Backend rejected request");
            return Err(AppError::transport(rejection_message(
                request.method,
                &request.url,
                status.as_u16(),
                &body,
            ))
            .with_status(status.as_u16()));
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
