//! reqwest-backed transport for the Linode API.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RAW_BODY_KEY};
use crate::clients::transport::Transport;
use crate::config::LinodeConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Linode API.
///
/// The client handles:
/// - URL construction from the configured base URL and API version
/// - Default headers including `Authorization` and `User-Agent`
/// - JSON body encoding and response decoding
///
/// `HttpClient` is `Send + Sync` and implements [`Transport`].
///
/// # Example
///
/// ```rust,ignore
/// use linode_api::{ApiToken, LinodeConfig};
/// use linode_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
///
/// let config = LinodeConfig::builder()
///     .token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "regions").build()?;
/// let response = client.send(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.linode.com`).
    base_uri: String,
    /// Base path (e.g., `/v4`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &LinodeConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}linode-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri: config.base_url().to_string(),
            base_path: config.api_version().base_path(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the absolute URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn parse_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::json!({ RAW_BODY_KEY: body_text }))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(&body_text);

        let response = HttpResponse::new(code, res_headers, body);
        if !response.is_ok() {
            tracing::debug!(
                status = code,
                path = %request.path,
                request_id = response.request_id().unwrap_or("-"),
                "received error response"
            );
        }

        Ok(response)
    }
}
