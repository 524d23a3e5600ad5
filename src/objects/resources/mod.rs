//! Resource descriptions for the Linode v4 API.
//!
//! Each module declares one or more `static` [`ResourceSchema`]s plus any
//! creation options the resource needs.
//!
//! [`ResourceSchema`]: crate::objects::ResourceSchema

pub mod account;
pub mod domain;
pub mod image;
pub mod linode;
pub mod longview;
pub mod nodebalancer;
pub mod profile;
pub mod region;
pub mod tag;
pub mod volume;

pub use account::{ACCOUNT, ACCOUNT_SETTINGS};
pub use domain::{DomainCreateOptions, DOMAIN, DOMAIN_RECORD};
pub use image::IMAGE;
pub use linode::{InstanceCreateOptions, INSTANCE, INSTANCE_TYPE};
pub use longview::{LONGVIEW_CLIENT, LONGVIEW_SUBSCRIPTION};
pub use nodebalancer::NODEBALANCER;
pub use profile::SSH_KEY;
pub use region::REGION;
pub use tag::{TagCreate, TagTarget, TaggableKind, TAG};
pub use volume::{VolumeCreateOptions, VOLUME};
