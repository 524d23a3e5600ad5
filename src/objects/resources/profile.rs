//! Profile-level resources.

use crate::objects::field::FieldKind;
use crate::objects::schema::{Property, ResourceSchema};

/// A public SSH key stored on the profile.
pub static SSH_KEY: ResourceSchema = ResourceSchema {
    name: "SSHKey",
    endpoint: "profile/sshkeys",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("ssh_key", FieldKind::String).required(),
        Property::new("created", FieldKind::Timestamp),
    ],
};
