//! HTTP-specific error types for the Linode API client.
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for the transport layer
//!
//! Non-2xx statuses are not errors at this layer. They come back as
//! [`HttpResponse`](crate::clients::HttpResponse) values and are mapped to
//! [`LinodeError`](crate::LinodeError) by the object layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use linode_api::clients::{HttpError, Transport};
//!
//! match transport.send(request).await {
//!     Ok(response) => println!("{}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use linode_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request carried a body.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
