//! High-level client: `TourClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::Credentials;
use crate::domain::area::client::Areas;
use crate::domain::detail::client::Details;
use crate::domain::listing::client::Listings;
use crate::error::TourApiError;
use crate::http::{QueryDefaults, RetryConfig, TourHttp, Transport};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::area::client::Areas as AreasClient;
pub use crate::domain::detail::client::Details as DetailsClient;
pub use crate::domain::listing::client::Listings as ListingsClient;

/// The primary entry point for the tourism gateway.
///
/// Provides nested sub-client accessors for each domain:
/// `client.areas()`, `client.listings()`, `client.details()`.
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Debug, Clone)]
pub struct TourClient {
    pub(crate) http: TourHttp,
}

impl TourClient {
    pub fn builder() -> TourClientBuilder {
        TourClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn areas(&self) -> Areas<'_> {
        Areas { client: self }
    }

    pub fn listings(&self) -> Listings<'_> {
        Listings { client: self }
    }

    pub fn details(&self) -> Details<'_> {
        Details { client: self }
    }

    /// Low-level HTTP client, for endpoints not wrapped by a sub-client.
    pub fn http(&self) -> &TourHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TourClientBuilder {
    base_url: String,
    credentials: Credentials,
    defaults: QueryDefaults,
    retry: RetryConfig,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for TourClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credentials: Credentials::default(),
            defaults: QueryDefaults::default(),
            retry: RetryConfig::default(),
            timeout: None,
            transport: None,
        }
    }
}

impl TourClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Use a fixed service key instead of reading the environment per call.
    pub fn service_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Credentials::service_key(key);
        self
    }

    pub fn mobile_os(mut self, os: impl Into<String>) -> Self {
        self.defaults.mobile_os = os.into();
        self
    }

    pub fn mobile_app(mut self, app: impl Into<String>) -> Self {
        self.defaults.mobile_app = app.into();
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Per-attempt timeout for the default transport. Ignored when a custom
    /// transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<TourClient, TourApiError> {
        if self.base_url.trim().is_empty() {
            return Err(TourApiError::Configuration("base URL is empty".to_string()));
        }
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout)?,
        };
        Ok(TourClient {
            http: TourHttp::new(
                &self.base_url,
                self.defaults,
                self.credentials,
                self.retry,
                transport,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Option<Duration>) -> Result<Arc<dyn Transport>, TourApiError> {
    let transport = crate::http::ReqwestTransport::new(timeout).map_err(|e| {
        TourApiError::Configuration(format!("failed to build HTTP transport: {}", e))
    })?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Option<Duration>) -> Result<Arc<dyn Transport>, TourApiError> {
    Err(TourApiError::Configuration(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::error::TransportError;
    use crate::http::{Endpoint, QueryParams, RawResponse};
    use async_trait::async_trait;

    struct Unused;

    #[async_trait]
    impl Transport for Unused {
        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            Err(TransportError::Other("unused".to_string()))
        }
    }

    fn client() -> TourClientBuilder {
        TourClient::builder().transport(Arc::new(Unused))
    }

    #[test]
    fn test_builder_defaults() {
        let client = client().build().unwrap();
        assert_eq!(client.http().base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.http().retry_config(), &RetryConfig::default());
    }

    #[test]
    fn test_builder_identity_overrides() {
        let client = client()
            .base_url("http://localhost:8080/KorService2/")
            .service_key("k")
            .mobile_os("AND")
            .mobile_app("Trips")
            .build()
            .unwrap();
        let url = client
            .http()
            .url_for(Endpoint::AreaCode, &QueryParams::new())
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/KorService2/areaCode2?MobileOS=AND&MobileApp=Trips&_type=json&serviceKey=k"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = client().base_url(" ").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
