#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// First failing item of a batch lookup. `index` is the item's position
    /// in the caller's input list.
    #[error("batch item {index} ({identifier}) failed: {source}")]
    Batch {
        index: usize,
        identifier: String,
        #[source]
        source: Box<ClientError>,
    },
}

/// Failures below the decoding layer. The client forwards these as-is.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("node returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("node unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Classify a reqwest failure, keeping timeouts distinguishable.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// A wire payload did not match the shape expected for `field`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{field}`: {reason}")]
pub struct DecodeError {
    pub field: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::new(field, "missing")
    }

    pub(crate) fn wrong_type(field: &str) -> Self {
        Self::new(field, "wrong type")
    }
}
