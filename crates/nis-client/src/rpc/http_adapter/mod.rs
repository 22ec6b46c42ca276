//! reqwest-backed [`Transport`](super::Transport) for NIS HTTP endpoints.
//!
//! Handles connect/request timeouts, optional outbound rate limiting, and
//! validation of the node base URL.

mod client;
mod connection;

pub use client::HttpTransport;
pub(crate) use connection::parse_base_url;
