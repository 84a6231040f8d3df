//! Transport abstraction and the reqwest-backed HTTP transport.
//!
//! The transport layer knows nothing about resources: it turns an
//! endpoint path into a decoded JSON body or a [`TransportError`]. The
//! typed layer above ([`crate::ResourceClient`]) owns the mapping into
//! the fixed fetch error messages.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::error::TransportError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for Atelier.
const USER_AGENT: &str = concat!("atelier/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Transport Trait
// ============================================================================

/// A transport that can resolve `GET {path}` into a JSON body.
///
/// Implemented by [`HttpTransport`] for real deployments and by
/// [`InMemoryTransport`](crate::InMemoryTransport) for tests and demos.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Performs a GET request for the given endpoint path and decodes
    /// the response body as JSON.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Status`] on any non-2xx response
    /// - [`TransportError::Network`] when the request never completes
    /// - [`TransportError::Body`] when a 2xx body is not valid JSON
    async fn get_json(&self, path: &str) -> Result<Value, TransportError>;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// HTTP transport backed by reqwest, with request/response tracing.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    config: ApiConfig,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built. This should only occur
    /// if the system's TLS configuration is fundamentally broken, making
    /// network operations impossible. This is considered unrecoverable
    /// at runtime.
    pub fn with_timeout(config: ApiConfig, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to create HTTP client: {e}. \
                    This usually indicates a broken TLS/SSL configuration."
                )
            });

        Self {
            inner: client,
            config,
        }
    }

    /// Returns the API configuration this transport resolves paths against.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    #[instrument(skip(self), fields(path = %path))]
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.config.url_for(path);
        debug!("GET request");

        let response = self.inner.get(&url).send().await?;
        debug!(status = %response.status(), "Response received");

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
