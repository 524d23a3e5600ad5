//! The transport seam between the object layer and the network.

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends one request and returns the response.
///
/// Implementations own connections, headers and authentication. Every
/// non-2xx status must come back as an `Ok` response; only failures to
/// complete the round trip are errors.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests inject an in-memory transport through
/// [`LinodeClient::with_transport`](crate::LinodeClient::with_transport).
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends `request`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails
    /// validation and [`HttpError::Network`] if the round trip fails.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
