//! HTTP response type for the Linode API client.

use std::collections::HashMap;

/// Key under which a body that is not JSON is kept verbatim.
pub const RAW_BODY_KEY: &str = "raw_body";

/// An HTTP response from the Linode API.
///
/// Header names are stored lowercased; a header can carry several values.
///
/// # Example
///
/// ```rust
/// use linode_api::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"id": 123}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["id"], 123);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. An empty body is `{}`; text that is not
    /// JSON is kept as `{"raw_body": text}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the undecoded text when the body was not JSON.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self.body.as_object() {
            Some(map) if map.len() == 1 => {
                map.get(RAW_BODY_KEY).and_then(serde_json::Value::as_str)
            }
            _ => None,
        }
    }

    /// Returns the first value of the named header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
