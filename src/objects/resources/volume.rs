//! Block storage volumes.

use serde::{Deserialize, Serialize};

use crate::objects::field::FieldKind;
use crate::objects::resources::region::REGION;
use crate::objects::schema::{Property, ResourceSchema};

/// A block storage volume.
pub static VOLUME: ResourceSchema = ResourceSchema {
    name: "Volume",
    endpoint: "volumes",
    id_attribute: "id",
    tag_key: Some("volumes"),
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("size", FieldKind::Integer),
        Property::new("status", FieldKind::String),
        Property::new("region", FieldKind::Reference(&REGION)),
        Property::new("linode_id", FieldKind::Integer),
        Property::new("filesystem_path", FieldKind::String),
        Property::new("created", FieldKind::Timestamp),
        Property::new("updated", FieldKind::Timestamp),
        Property::new("tags", FieldKind::List(&FieldKind::String)).mutable(),
    ],
};

/// Optional fields for creating a volume.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VolumeCreateOptions {
    /// Region to create the volume in. Required unless `linode_id` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Instance to attach the volume to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linode_id: Option<u64>,

    /// Size in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Tags to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
