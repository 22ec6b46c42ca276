use std::time::Duration;

use serde::Deserialize;

use crate::error::ClientError;

pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:7890";
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

/// Settings for [`NodeClient::new`](crate::NodeClient::new).
///
/// Deserializable so callers can embed it in their own config files; every
/// field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// NIS base URL. Only scheme, host and port are used.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Outbound request cap. `None` disables rate limiting.
    pub requests_per_second: Option<u32>,
    /// Maximum in-flight lookups per batch call.
    pub batch_concurrency: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NODE_URL.to_owned(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            requests_per_second: None,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.batch_concurrency == 0 {
            return Err(ClientError::Configuration(
                "batch_concurrency must be at least 1".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "connect_timeout_secs must be at least 1".to_owned(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "request_timeout_secs must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
