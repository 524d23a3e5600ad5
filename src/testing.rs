//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::LinodeClient;
use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::{ApiToken, LinodeConfig};

type FixtureKey = (HttpMethod, String, Option<u32>);

/// Canned responses keyed by method, path and optional page number.
///
/// A request for page `n` matches a page-specific fixture first and falls
/// back to the fixture without a page. Unmatched requests get a 404.
#[derive(Clone, Debug, Default)]
pub(crate) struct FixtureTransport {
    fixtures: Arc<Mutex<HashMap<FixtureKey, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FixtureTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_json(self, path: &str, body: Value) -> Self {
        self.insert((HttpMethod::Get, path.to_string(), None), 200, body)
    }

    pub(crate) fn with_response(
        self,
        method: HttpMethod,
        path: &str,
        status: u16,
        body: Value,
    ) -> Self {
        self.insert((method, path.to_string(), None), status, body)
    }

    pub(crate) fn with_page(self, path: &str, page: u32, body: Value) -> Self {
        self.insert((HttpMethod::Get, path.to_string(), Some(page)), 200, body)
    }

    pub(crate) fn with_page_response(self, path: &str, page: u32, status: u16, body: Value) -> Self {
        self.insert((HttpMethod::Get, path.to_string(), Some(page)), status, body)
    }

    fn insert(self, key: FixtureKey, status: u16, body: Value) -> Self {
        self.fixtures
            .lock()
            .expect("fixture lock poisoned")
            .insert(key, (status, body));
        self
    }

    /// A client with page size 100 backed by this transport.
    pub(crate) fn client(&self) -> LinodeClient {
        let config = LinodeConfig::builder()
            .token(ApiToken::new("test-token").expect("valid token"))
            .build()
            .expect("valid config");
        LinodeClient::with_transport(config, Arc::new(self.clone()))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().expect("request lock poisoned").len()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request lock poisoned").clone()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.requests
            .lock()
            .expect("request lock poisoned")
            .push(request.clone());

        let page = request.query_value("page").and_then(|p| p.parse().ok());
        let fixtures = self.fixtures.lock().expect("fixture lock poisoned");
        let matched = page
            .and_then(|page| {
                fixtures.get(&(request.http_method, request.path.clone(), Some(page)))
            })
            .or_else(|| fixtures.get(&(request.http_method, request.path.clone(), None)));

        let (status, body) = matched.cloned().unwrap_or_else(|| {
            (404, json!({"errors": [{"reason": "Not found"}]}))
        });
        Ok(HttpResponse::new(status, HashMap::new(), body))
    }
}
