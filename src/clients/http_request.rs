//! HTTP request types for the Linode API client.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Linode REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource or a page of a collection.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent through a [`Transport`](crate::clients::Transport).
///
/// `path` is relative to the versioned API root (`linode/instances`, not
/// `/v4/linode/instances`). Query parameters keep their insertion order so
/// the wire format is deterministic.
///
/// # Example
///
/// ```rust
/// use linode_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "regions")
///     .query_param("page", "1")
///     .build()
///     .unwrap();
/// assert!(list.body.is_none());
///
/// let create = HttpRequest::builder(HttpMethod::Post, "tags")
///     .body(json!({"label": "nothing"}))
///     .build()
///     .unwrap();
/// assert_eq!(create.body, Some(json!({"label": "nothing"})));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the versioned API root.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body and [`InvalidHttpRequestError::BodyNotAllowed`] for a
    /// GET or DELETE with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, self.body.is_some()) {
            (HttpMethod::Post | HttpMethod::Put, false) => {
                Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                })
            }
            (HttpMethod::Get | HttpMethod::Delete, true) => {
                Err(InvalidHttpRequestError::BodyNotAllowed {
                    method: self.http_method.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns the value of the first query parameter named `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends query parameters.
    #[must_use]
    pub fn query<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
