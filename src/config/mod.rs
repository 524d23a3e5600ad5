//! Configuration types for the Linode API client.
//!
//! # Overview
//!
//! - [`LinodeConfig`]: all settings needed to talk to the API
//! - [`LinodeConfigBuilder`]: builder for [`LinodeConfig`]
//! - [`ApiToken`]: validated personal access token with masked debug output
//! - [`BaseUrl`]: validated API base URL
//! - [`ApiVersion`]: the API version path segment
//!
//! # Example
//!
//! ```rust
//! use linode_api::{ApiToken, ApiVersion, LinodeConfig};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V4)
//!     .page_size(200)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 200);
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ApiToken, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Smallest page size the API accepts.
pub const MIN_PAGE_SIZE: u32 = 25;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`LinodeClient`](crate::LinodeClient).
///
/// `LinodeConfig` is `Clone`, `Send` and `Sync`; one configuration can back
/// any number of clients.
#[derive(Clone, Debug)]
pub struct LinodeConfig {
    token: ApiToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    page_size: u32,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl LinodeConfig {
    /// Creates a new builder for constructing a `LinodeConfig`.
    #[must_use]
    pub fn builder() -> LinodeConfigBuilder {
        LinodeConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the page size used for list requests.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinodeConfig>();
};

/// Builder for [`LinodeConfig`].
///
/// Only `token` is required.
///
/// # Defaults
///
/// - `base_url`: `https://api.linode.com`
/// - `api_version`: [`ApiVersion::V4`]
/// - `page_size`: 100
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct LinodeConfigBuilder {
    token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    page_size: Option<u32>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl LinodeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the page size for list requests.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`LinodeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no token was set, and
    /// [`ConfigError::InvalidPageSize`] if the page size is outside 25..=500.
    pub fn build(self) -> Result<LinodeConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::InvalidPageSize { page_size });
        }

        Ok(LinodeConfig {
            token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            page_size,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
