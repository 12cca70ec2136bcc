//! Low-level HTTP client: `TourHttp`.
//!
//! Build query → execute with retry → parse envelope. Returns normalized pages
//! of wire records; validation, defaults and result shaping happen in the
//! domain sub-clients.

use crate::auth::Credentials;
use crate::error::TourApiError;
use crate::http::envelope::{parse_envelope, Page};
use crate::http::query::{build_query, Endpoint, QueryDefaults, QueryParams};
use crate::http::retry::RetryConfig;
use crate::http::transport::{RawResponse, Transport};

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Low-level client for the KorService2 REST API.
#[derive(Clone)]
pub struct TourHttp {
    base_url: String,
    defaults: QueryDefaults,
    credentials: Credentials,
    retry: RetryConfig,
    transport: Arc<dyn Transport>,
}

impl TourHttp {
    pub fn new(
        base_url: &str,
        defaults: QueryDefaults,
        credentials: Credentials,
        retry: RetryConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            defaults,
            credentials,
            retry,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Full request URL for one call. Resolves the service key, so it fails
    /// with a configuration error before anything is sent.
    pub fn url_for(&self, endpoint: Endpoint, params: &QueryParams) -> Result<String, TourApiError> {
        let service_key = self.credentials.resolve()?;
        let query = build_query(&self.defaults, &service_key, params);
        Ok(format!("{}/{}?{}", self.base_url, endpoint.path(), query))
    }

    /// Call one endpoint and return its normalized records.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Page<T>, TourApiError> {
        let url = self.url_for(endpoint, params)?;
        let resp = self.execute(endpoint, &url).await?;

        parse_envelope(resp.status, &resp.body).inspect_err(|e| {
            if let TourApiError::Semantic { code, message } = e {
                tracing::warn!(%endpoint, code = %code, "Upstream rejected request: {}", message);
            }
        })
    }

    /// Send a GET, retrying transport faults and 5xx responses.
    ///
    /// After the budget is spent, a transport fault becomes
    /// [`TourApiError::Transport`] while a 5xx response is returned as-is for
    /// the envelope parser to deal with.
    pub async fn execute(&self, endpoint: Endpoint, url: &str) -> Result<RawResponse, TourApiError> {
        let config = &self.retry;
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(%endpoint, attempt = attempt + 1, "Dispatching request");

            let reason = match self.transport.get(url).await {
                Ok(resp) if resp.is_server_error() && attempt < config.max_retries => {
                    format!("HTTP {}", resp.status)
                }
                Ok(resp) => {
                    if resp.is_server_error() {
                        tracing::warn!(
                            %endpoint,
                            status = resp.status,
                            retries = attempt,
                            "Retries exhausted; returning server error response"
                        );
                    }
                    return Ok(resp);
                }
                Err(fault) if attempt < config.max_retries => fault.to_string(),
                Err(fault) => {
                    tracing::warn!(%endpoint, retries = attempt, "Retries exhausted: {}", fault);
                    return Err(TourApiError::Transport {
                        message: fault.to_string(),
                        retries: attempt,
                    });
                }
            };

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                %endpoint,
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying after {}",
                reason
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }
}

impl std::fmt::Debug for TourHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourHttp")
            .field("base_url", &self.base_url)
            .field("defaults", &self.defaults)
            .field("credentials", &self.credentials)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TransportError};
    use crate::network::DEFAULT_API_URL;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Replays scripted outcomes and records when each call happened.
    struct Scripted {
        outcomes: Mutex<VecDeque<Result<RawResponse, String>>>,
        calls: AtomicU32,
        call_times: Mutex<Vec<Instant>>,
    }

    impl Scripted {
        fn new(outcomes: Vec<Result<RawResponse, String>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicU32::new(0),
                call_times: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.call_times.lock().unwrap().push(Instant::now());
            let next = self.outcomes.lock().unwrap().pop_front();
            match next {
                Some(Ok(resp)) => Ok(resp),
                Some(Err(msg)) => Err(TransportError::Other(msg)),
                None => Err(TransportError::Other("script exhausted".to_string())),
            }
        }
    }

    const OK_BODY: &str =
        r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},"body":{"items":""}}}"#;

    fn http(transport: Arc<Scripted>, initial_delay_ms: u64) -> TourHttp {
        TourHttp::new(
            DEFAULT_API_URL,
            QueryDefaults::default(),
            Credentials::service_key("test-key"),
            RetryConfig::default().with_initial_delay(Duration::from_millis(initial_delay_ms)),
            transport,
        )
    }

    #[tokio::test]
    async fn test_success_is_not_retried() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(200, OK_BODY))]);
        let client = http(transport.clone(), 1);
        let resp = client.execute(Endpoint::AreaCode, "http://x").await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(404, "missing"))]);
        let client = http(transport.clone(), 1);
        let resp = client.execute(Endpoint::AreaCode, "http://x").await.unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_on_third_attempt_with_doubled_delay() {
        let transport = Scripted::new(vec![
            Err("connection reset".to_string()),
            Ok(RawResponse::new(503, "busy")),
            Ok(RawResponse::new(200, OK_BODY)),
        ]);
        let client = http(transport.clone(), 40);
        let resp = client.execute(Endpoint::AreaCode, "http://x").await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);

        let times = transport.call_times.lock().unwrap().clone();
        let first_gap = times[1] - times[0];
        let second_gap = times[2] - times[1];
        assert!(first_gap >= Duration::from_millis(40));
        assert!(second_gap >= Duration::from_millis(80));
        assert_eq!(client.retry_config().delay_for_attempt(1), Duration::from_millis(80));
    }

    #[tokio::test]
    async fn test_exhausted_transport_faults_raise_with_retry_count() {
        let transport = Scripted::new(vec![]);
        let client = http(transport.clone(), 1);
        let err = client.execute(Endpoint::AreaCode, "http://x").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.retries(), Some(3));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_exhausted_server_errors_return_last_response() {
        let transport = Scripted::new(vec![
            Ok(RawResponse::new(500, "a")),
            Ok(RawResponse::new(502, "b")),
            Ok(RawResponse::new(503, "c")),
            Ok(RawResponse::new(504, "d")),
        ]);
        let client = http(transport.clone(), 1);
        let resp = client.execute(Endpoint::AreaCode, "http://x").await.unwrap();
        assert_eq!(resp, RawResponse::new(504, "d"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_final_server_error_surfaces_as_decode_error() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(500, "<html>oops</html>"))]);
        let client = TourHttp::new(
            DEFAULT_API_URL,
            QueryDefaults::default(),
            Credentials::service_key("test-key"),
            RetryConfig::none(),
            transport.clone(),
        );
        let err = client
            .fetch::<serde_json::Value>(Endpoint::AreaCode, &QueryParams::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_dispatch() {
        let transport = Scripted::new(vec![Ok(RawResponse::new(200, OK_BODY))]);
        let client = TourHttp::new(
            DEFAULT_API_URL,
            QueryDefaults::default(),
            Credentials::service_key(""),
            RetryConfig::default(),
            transport.clone(),
        );
        let err = client
            .fetch::<serde_json::Value>(Endpoint::AreaCode, &QueryParams::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_url_for_joins_base_path_and_query() {
        let client = http(Scripted::new(vec![]), 1);
        let url = client
            .url_for(Endpoint::DetailPetTour, &QueryParams::new().with("contentId", "999"))
            .unwrap();
        assert_eq!(
            url,
            "https://apis.data.go.kr/B551011/KorService2/detailPetTour2?MobileOS=ETC&MobileApp=MyTrip&_type=json&serviceKey=test-key&contentId=999"
        );
    }
}
