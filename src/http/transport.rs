//! Pluggable GET transport.
//!
//! The executor only needs "send a GET, give me status + body". Keeping that
//! behind a trait lets tests script upstream behavior without a network.

use crate::error::TransportError;
use async_trait::async_trait;

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status)
    }
}

/// Performs a single GET request.
///
/// Returning `Err` means no response was obtained at all; the executor treats
/// that as transient.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::{RawResponse, Transport};
    use crate::error::TransportError;
    use async_trait::async_trait;
    use reqwest::Client;
    use std::time::Duration;

    /// `reqwest`-backed transport.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// Build a transport. `timeout` bounds each individual attempt.
        pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
            let mut builder = Client::builder().pool_max_idle_per_host(10);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            Ok(Self {
                client: builder.build()?,
            })
        }

        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    fn fault(e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Reqwest(e)
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
            let resp = self
                .client
                .get(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .send()
                .await
                .map_err(fault)?;
            let status = resp.status().as_u16();
            let body = resp.text().await.map_err(fault)?;
            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_class() {
        assert!(RawResponse::new(500, "").is_server_error());
        assert!(RawResponse::new(503, "").is_server_error());
        assert!(!RawResponse::new(404, "").is_server_error());
        assert!(!RawResponse::new(200, "").is_server_error());
    }

    /// Headers arrive promptly but the body never does.
    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_stalled_body_maps_to_timeout() {
        use std::time::Duration;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = ReqwestTransport::new(Some(Duration::from_millis(200))).unwrap();
        let err = transport
            .get(&format!("http://{}/areaCode2", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Timeout), "{err:?}");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_invalid_url_is_not_a_timeout() {
        let transport = ReqwestTransport::new(None).unwrap();
        let err = transport.get("not a url").await.unwrap_err();
        assert!(matches!(err, TransportError::Reqwest(_)), "{err:?}");
    }
}
