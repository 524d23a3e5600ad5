//! # Linode API Rust client
//!
//! An async client for the Linode v4 REST API, built around lazily
//! populated resource objects and paginated lists.
//!
//! ## Overview
//!
//! - [`LinodeConfig`] / [`LinodeConfigBuilder`]: validated configuration
//! - [`LinodeClient`]: the entry point, with generic operations (`list`,
//!   `load`, `create`, `save`, `delete`) and resource groups
//!   ([`linode()`](LinodeClient::linode), [`account()`](LinodeClient::account),
//!   [`longview()`](LinodeClient::longview), [`profile()`](LinodeClient::profile))
//! - [`objects::ApiObject`]: one resource, fetched in full on first access to
//!   a field the list view did not include
//! - [`objects::PaginatedList`]: a list endpoint whose pages are fetched on
//!   demand
//! - [`clients::Transport`]: the network seam; [`clients::HttpClient`] is the
//!   reqwest implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use linode_api::{ApiToken, LinodeConfig};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("your-personal-access-token").unwrap())
//!     .page_size(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 50);
//! ```
//!
//! ## Listing and lazy loading
//!
//! ```rust,ignore
//! use linode_api::{LinodeClient, LinodeConfig};
//! use linode_api::objects::FieldValue;
//!
//! let client = LinodeClient::new(&config)?;
//!
//! let mut instances = client.linode().instances(&[("label", "web-1")]).await?;
//! println!("{} instances", instances.len());
//!
//! // List elements are summaries; reading a field the list did not return
//! // fetches the detail view once.
//! let mut instance = instances.first(&client).await?.clone();
//! if let FieldValue::List(addresses) = instance.get(&client, "ipv4").await? {
//!     println!("{addresses:?}");
//! }
//!
//! instance.set("label", "web-2")?;
//! client.save(&mut instance).await?;
//! ```
//!
//! ## Creating resources
//!
//! ```rust,ignore
//! use linode_api::objects::resources::{InstanceCreateOptions, TagCreate, TaggableKind};
//!
//! let (instance, root_pass) = client
//!     .linode()
//!     .instance_create(
//!         "g5-standard-1",
//!         "us-east",
//!         InstanceCreateOptions {
//!             image: Some("linode/debian9".to_string()),
//!             authorized_keys: vec!["~/.ssh/id_ed25519.pub".to_string()],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! client
//!     .tag_create(TagCreate::new("web").entity(instance).id(TaggableKind::Volume, 7))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is passed explicitly to every call that
//!   may touch the network
//! - **Fail-fast validation**: configuration newtypes and request arguments
//!   are checked before any request is sent
//! - **Thread-safe**: `LinodeClient` and `LinodeConfig` are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime
//! - **No retries**: every request is attempted once and failures propagate

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod groups;
pub mod objects;

#[cfg(test)]
pub(crate) mod testing;

pub use client::LinodeClient;
pub use config::{ApiToken, ApiVersion, BaseUrl, LinodeConfig, LinodeConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Transport,
};

pub use objects::{
    ApiErrorReason, ApiObject, FieldKind, FieldValue, FormatError, LinodeError, ObjectId,
    PaginatedList, ResourceSchema,
};
