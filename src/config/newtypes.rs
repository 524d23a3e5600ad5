//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! [`LinodeConfig`](crate::LinodeConfig) can only ever hold usable values.

use crate::error::ConfigError;
use std::fmt;

/// A validated Linode personal access token.
///
/// The token is sent as a bearer credential on every request. Its `Debug`
/// implementation masks the value so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use linode_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty or only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must be absolute with an `http` or `https` scheme and a non-empty
/// host. Any trailing slash is removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use linode_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.linode.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.linode.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.linode.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public Linode API endpoint.
    pub const DEFAULT: &'static str = "https://api.linode.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not an absolute
    /// http(s) URL or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let host_start = "https://".len();
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: "https".len(),
            host_start,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
