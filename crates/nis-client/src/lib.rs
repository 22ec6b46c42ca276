//! Async client for the read-only HTTP/JSON API of a NEM NIS node.
//!
//! Requests are built by [`rpc::build_request`], sent through a pluggable
//! [`rpc::Transport`], and decoded into the records in [`types`].

mod batch;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;

pub use client::NodeClient;
pub use config::ClientConfig;
pub use error::{ClientError, DecodeError, TransportError};
pub use types::{AccountId, AccountMetadataPair, Block};
