//! Configuration error types for the Linode API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected at construction time, before any request is built.
//!
//! # Example
//!
//! ```rust
//! use linode_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Linode personal access token.")]
    EmptyToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'https://api.linode.com'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v4', 'v4beta' or another non-empty path segment.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Page size is outside the range the API accepts.
    #[error("Invalid page size {page_size}. The API accepts page sizes between 25 and 500.")]
    InvalidPageSize {
        /// The rejected page size.
        page_size: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
