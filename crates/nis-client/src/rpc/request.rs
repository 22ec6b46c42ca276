use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Method, Url};

/// Query parameters. A map, so every key is sent exactly once and in a
/// stable order.
pub type Query = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(Vec<u8>),
    Form(Vec<u8>),
}

impl RequestBody {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Json(bytes) | Self::Form(bytes) => bytes,
        }
    }
}

/// A transport-ready request.
#[derive(Debug, Clone)]
pub struct NodeRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl NodeRequest {
    /// Path plus query, e.g. `/account/get?address=T...`.
    pub fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{query}", self.url.path()),
            None => self.url.path().to_owned(),
        }
    }
}

/// Resolve `path` against `base` and attach query and body.
///
/// `base` has been validated at client construction, so this cannot fail.
/// Body headers are only attached when there is a non-empty body.
pub fn build_request(
    base: &Url,
    path: &str,
    query: &Query,
    body: Option<RequestBody>,
    method: Method,
) -> NodeRequest {
    let mut url = base.clone();
    url.set_path(path);
    url.set_query(None);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    let body = body.filter(|body| !body.bytes().is_empty());
    let (headers, body) = match body {
        None => (HeaderMap::new(), None),
        Some(RequestBody::Json(bytes)) => (json_headers(bytes.len()), Some(bytes)),
        Some(RequestBody::Form(bytes)) => (form_headers(bytes.len()), Some(bytes)),
    };

    NodeRequest {
        method,
        url,
        headers,
        body,
    }
}

pub fn json_headers(content_length: usize) -> HeaderMap {
    body_headers("application/json", content_length)
}

pub fn form_headers(content_length: usize) -> HeaderMap {
    body_headers("application/x-www-form-urlencoded", content_length)
}

fn body_headers(content_type: &'static str, content_length: usize) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(content_length as u64));
    headers
}
