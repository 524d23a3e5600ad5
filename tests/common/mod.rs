//! Shared helpers for the integration tests: fixture loading and a client
//! pointed at a wiremock server.

#![allow(dead_code)]

use linode_api::{ApiToken, BaseUrl, LinodeClient, LinodeConfig};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Loads `tests/fixtures/<name>.json`.
pub fn fixture(name: &str) -> Value {
    let file = format!("{}/tests/fixtures/{name}.json", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&file).unwrap_or_else(|e| panic!("reading {file}: {e}"));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("parsing {file}: {e}"))
}

pub fn config_for(server: &MockServer) -> LinodeConfig {
    LinodeConfig::builder()
        .token(ApiToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

pub fn client_for(server: &MockServer) -> LinodeClient {
    LinodeClient::new(&config_for(server)).unwrap()
}

/// Serves a fixture for `GET /v4/<api_path>`.
pub async fn mount_get(server: &MockServer, api_path: &str, fixture_name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v4/{api_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(fixture_name)))
        .mount(server)
        .await;
}

/// Serves `body` for `POST /v4/<api_path>`.
pub async fn mount_post(server: &MockServer, api_path: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v4/{api_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Returns the JSON body of the only request sent to `api_path`.
pub async fn sent_body(server: &MockServer, api_path: &str) -> Value {
    let expected = format!("/v4/{api_path}");
    let requests = server.received_requests().await.unwrap();
    let matching: Vec<_> = requests
        .iter()
        .filter(|request| request.url.path() == expected)
        .collect();
    assert_eq!(matching.len(), 1, "expected one request to {expected}");
    matching[0].body_json().unwrap()
}
