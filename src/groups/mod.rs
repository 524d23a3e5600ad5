//! Resource groups: thin views over a [`LinodeClient`](crate::LinodeClient)
//! that bundle the calls for one area of the API.
//!
//! Groups borrow the client and hold no state of their own.

mod account;
mod linode;
mod longview;
mod profile;

pub use account::AccountGroup;
pub use linode::{generate_root_password, LinodeGroup, ROOT_PASSWORD_LENGTH};
pub use longview::LongviewGroup;
pub use profile::{load_public_key, ProfileGroup, SSH_KEY_PREFIXES};
