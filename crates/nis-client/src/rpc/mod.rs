//! Node transport abstraction layer.
//!
//! Defines the [`Transport`] trait, the [`NodeRequest`] descriptor it sends,
//! and the request builder. [`HttpTransport`] is the reqwest-backed
//! implementation; tests use `mock::MockTransport`.

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod request;

pub use http_adapter::HttpTransport;
pub(crate) use http_adapter::parse_base_url;
pub use request::{build_request, form_headers, json_headers, NodeRequest, Query, RequestBody};

use async_trait::async_trait;

use crate::error::TransportError;

/// Sends a fully built request and hands back the raw response body.
///
/// Implementations own timeouts, TLS, and connection reuse. A timeout or
/// cancellation must come back as a `TransportError`, never a hang.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &NodeRequest) -> Result<Vec<u8>, TransportError>;
}
