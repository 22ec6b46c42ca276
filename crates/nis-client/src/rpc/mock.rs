use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

use super::{NodeRequest, Transport};

#[derive(Clone)]
enum Reply {
    Body(Vec<u8>),
    Fail(String),
}

/// A mock node for testing. Returns canned bodies keyed by path-and-query,
/// falling back to the bare path, and records every request it sees.
pub struct MockTransport {
    routes: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    seen: Mutex<Vec<NodeRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            routes: HashMap::new(),
            delays: HashMap::new(),
        }
    }

    pub fn requests(&self) -> Vec<NodeRequest> {
        self.seen.lock().expect("mock request log poisoned").clone()
    }

    fn lookup<'a, T>(map: &'a HashMap<String, T>, request: &NodeRequest) -> Option<&'a T> {
        map.get(&request.path_and_query())
            .or_else(|| map.get(request.url.path()))
    }
}

pub struct MockTransportBuilder {
    routes: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
}

impl MockTransportBuilder {
    pub fn with_response(mut self, route: &str, body: &str) -> Self {
        self.routes
            .insert(route.to_owned(), Reply::Body(body.as_bytes().to_vec()));
        self
    }

    pub fn with_failure(mut self, route: &str, message: &str) -> Self {
        self.routes
            .insert(route.to_owned(), Reply::Fail(message.to_owned()));
        self
    }

    /// Hold the reply for `route` back by `delay`.
    pub fn with_delay(mut self, route: &str, delay: Duration) -> Self {
        self.delays.insert(route.to_owned(), delay);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            routes: self.routes,
            delays: self.delays,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &NodeRequest) -> Result<Vec<u8>, TransportError> {
        self.seen
            .lock()
            .expect("mock request log poisoned")
            .push(request.clone());

        if let Some(delay) = Self::lookup(&self.delays, request) {
            tokio::time::sleep(*delay).await;
        }

        match Self::lookup(&self.routes, request) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(message)) => Err(TransportError::Unavailable(message.clone())),
            None => Err(TransportError::Unavailable(format!(
                "no mock route for {}",
                request.path_and_query()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{build_request, Query};

    fn get(path: &str, query: &[(&str, &str)]) -> NodeRequest {
        let base = reqwest::Url::parse("http://mock.node:7890").expect("static url must parse");
        let query: Query = query
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        build_request(&base, path, &query, None, reqwest::Method::GET)
    }

    #[tokio::test]
    async fn exact_route_wins_over_bare_path() {
        let mock = MockTransport::builder()
            .with_response("/account/get", "generic")
            .with_response("/account/get?address=TBOB", "bob")
            .build();

        let bob = mock.send(&get("/account/get", &[("address", "TBOB")])).await;
        assert_eq!(bob.expect("route must match"), b"bob");
        let other = mock.send(&get("/account/get", &[("address", "TEVE")])).await;
        assert_eq!(other.expect("fallback must match"), b"generic");
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn unknown_route_fails() {
        let mock = MockTransport::builder().build();
        let err = mock
            .send(&get("/chain/height", &[]))
            .await
            .expect_err("no route configured");
        assert!(err.to_string().contains("/chain/height"));
    }
}
