use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use tracing::{debug, trace};

use crate::error::{ClientError, TransportError};

use super::super::{NodeRequest, Transport};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// NIS transport over HTTP(S).
///
/// Timeouts are enforced by the underlying reqwest client and surface as
/// [`TransportError::Timeout`]. Non-2xx responses become
/// [`TransportError::Status`] carrying the node's error body.
pub struct HttpTransport {
    client: reqwest::Client,
    limiter: Option<DirectRateLimiter>,
}

impl HttpTransport {
    /// If `requests_per_second` is set, every outbound request waits for the
    /// limiter before it is sent.
    pub fn new(
        connect_timeout: Duration,
        request_timeout: Duration,
        requests_per_second: Option<u32>,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ClientError::Configuration(format!("build http client: {e}")))?;

        let limiter = match requests_per_second {
            None => None,
            Some(limit) => {
                let limit = NonZeroU32::new(limit).ok_or_else(|| {
                    ClientError::Configuration("requests_per_second must be at least 1".to_owned())
                })?;
                Some(RateLimiter::direct(Quota::per_second(limit)))
            }
        };

        Ok(Self { client, limiter })
    }

    async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &NodeRequest) -> Result<Vec<u8>, TransportError> {
        self.wait_for_rate_limit().await;
        debug!(
            http.method = %request.method,
            http.path = request.url.path(),
            http.query_pairs = request.url.query_pairs().count(),
            "node request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::from_reqwest)?;
        debug!(http.path = request.url.path(), %status, body_len = body.len(), "node response");
        trace!(
            http.path = request.url.path(),
            body = %String::from_utf8_lossy(&body),
            "node response body"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}
