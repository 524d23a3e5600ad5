//! Error types for resource operations.
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **404**: [`LinodeError::NotFound`]
//! - **Other non-2xx**: [`LinodeError::Api`], carrying the reasons the API
//!   reported
//!
//! Decoding failures surface as [`FormatError`], wrapped in
//! [`LinodeError::Format`].
//!
//! # Example
//!
//! ```rust,ignore
//! use linode_api::LinodeError;
//!
//! match client.load(&INSTANCE, 123).await {
//!     Ok(instance) => println!("Found {:?}", instance.id()),
//!     Err(LinodeError::NotFound { resource, id }) => {
//!         println!("{resource} {id} does not exist");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// One entry of the `errors` array the Linode API returns on failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorReason {
    /// Human-readable explanation.
    pub reason: String,
    /// The request field the reason refers to, if any.
    #[serde(default)]
    pub field: Option<String>,
}

impl std::fmt::Display for ApiErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

/// A response body could not be decoded into the declared schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A required field was absent.
    #[error("{resource} response is missing required field '{field}'")]
    MissingField {
        /// The resource being decoded.
        resource: &'static str,
        /// The missing field.
        field: String,
    },

    /// A field had the wrong JSON type.
    #[error("Field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        /// The field being decoded.
        field: String,
        /// The expected JSON type.
        expected: &'static str,
        /// The JSON type that was found.
        found: &'static str,
    },

    /// A timestamp string did not match the API's date-time format.
    #[error("Field '{field}' has invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// The field being decoded.
        field: String,
        /// The offending value.
        value: String,
    },

    /// An enum field had a value outside its declared set.
    #[error("Field '{field}' has unknown value '{value}'")]
    UnknownVariant {
        /// The field being decoded.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A successful response body was not JSON.
    #[error("{resource} response body is not JSON: {body}")]
    NotJson {
        /// The resource being decoded.
        resource: &'static str,
        /// The undecoded body text.
        body: String,
    },

    /// A list response had no `data` array.
    #[error("List response from {endpoint} has no 'data' array")]
    MissingData {
        /// The list endpoint.
        endpoint: String,
    },
}

/// Error type for all resource operations.
#[derive(Debug, Error)]
pub enum LinodeError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type (e.g. `"Instance"`).
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// The API answered with a non-2xx status other than 404.
    #[error("API error {status}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The reasons joined into one message.
        message: String,
        /// The individual reasons.
        reasons: Vec<ApiErrorReason>,
    },

    /// The caller passed an unrecognized or invalid argument.
    ///
    /// Always raised before any request is sent.
    #[error("Invalid parameter for {operation}: {message}")]
    InvalidParameter {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong.
        message: String,
    },

    /// The response could not be decoded.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A list index was out of bounds.
    #[error("Index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length.
        len: usize,
    },

    /// A list's totals changed between page fetches.
    #[error("List at {endpoint} changed while it was being paged")]
    ListChanged {
        /// The list endpoint.
        endpoint: String,
    },

    /// The request could not be completed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl LinodeError {
    /// Creates a `LinodeError` from a non-2xx response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linode_api::LinodeError;
    /// use serde_json::json;
    ///
    /// let error = LinodeError::from_http_response(
    ///     404,
    ///     &json!({"errors": [{"reason": "Not found"}]}),
    ///     "Instance",
    ///     Some("123"),
    /// );
    /// assert!(matches!(error, LinodeError::NotFound { .. }));
    /// assert_eq!(error.status(), Some(404));
    /// ```
    #[must_use]
    pub fn from_http_response(
        status: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        if status == 404 {
            return Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            };
        }

        let reasons = parse_reasons(body);
        let message = if reasons.is_empty() {
            body.get("raw_body")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("HTTP {status}"), ToString::to_string)
        } else {
            reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        Self::Api {
            status,
            message,
            reasons,
        }
    }

    /// Returns the HTTP status for errors that came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            operation,
            message: message.into(),
        }
    }
}

impl From<InvalidHttpRequestError> for LinodeError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

/// Parses Linode's `{"errors": [{"reason": ..., "field": ...}]}` shape.
fn parse_reasons(body: &serde_json::Value) -> Vec<ApiErrorReason> {
    body.get("errors")
        .and_then(|errors| Vec::<ApiErrorReason>::deserialize(errors).ok())
        .unwrap_or_default()
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinodeError>();
};
