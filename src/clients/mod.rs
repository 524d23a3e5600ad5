//! HTTP transport layer for the Linode API.
//!
//! # Overview
//!
//! - [`Transport`]: the async `send(request) -> response` seam
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//!
//! The transport never interprets status codes. A 404 comes back as an
//! `Ok(HttpResponse)` with `code == 404`; mapping it to
//! [`LinodeError::NotFound`](crate::LinodeError::NotFound) happens in the
//! object layer.
//!
//! There is no retry logic. Each request is attempted exactly once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RAW_BODY_KEY};
pub use transport::Transport;
