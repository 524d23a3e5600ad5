//! Disk images, public and private.

use crate::objects::field::FieldKind;
use crate::objects::schema::{Property, ResourceSchema};

/// An image. Ids are composite strings such as `linode/debian9` or
/// `private/123`.
pub static IMAGE: ResourceSchema = ResourceSchema {
    name: "Image",
    endpoint: "images",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("description", FieldKind::String).mutable(),
        Property::new("created", FieldKind::Timestamp),
        Property::new("created_by", FieldKind::String),
        Property::new("deprecated", FieldKind::Boolean),
        Property::new("is_public", FieldKind::Boolean),
        Property::new("size", FieldKind::Integer),
        Property::new("type", FieldKind::Enum(&["manual", "automatic"])),
        Property::new("vendor", FieldKind::String),
        Property::new("status", FieldKind::String),
        Property::new("expiry", FieldKind::Timestamp),
    ],
};
