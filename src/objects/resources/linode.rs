//! Compute instances and instance types.

use serde::{Deserialize, Serialize};

use crate::objects::field::FieldKind;
use crate::objects::resources::image::IMAGE;
use crate::objects::resources::region::REGION;
use crate::objects::schema::{Property, ResourceSchema};

/// An instance type (plan) such as `g5-standard-1`.
pub static INSTANCE_TYPE: ResourceSchema = ResourceSchema {
    name: "Type",
    endpoint: "linode/types",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String),
        Property::new("class", FieldKind::String),
        Property::new("disk", FieldKind::Integer),
        Property::new("memory", FieldKind::Integer),
        Property::new("vcpus", FieldKind::Integer),
        Property::new("transfer", FieldKind::Integer),
        Property::new("network_out", FieldKind::Integer),
        Property::new("price", FieldKind::Raw),
        Property::new("addons", FieldKind::Raw),
        Property::new("successor", FieldKind::String),
    ],
};

/// A compute instance.
pub static INSTANCE: ResourceSchema = ResourceSchema {
    name: "Instance",
    endpoint: "linode/instances",
    id_attribute: "id",
    tag_key: Some("linodes"),
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("group", FieldKind::String).mutable(),
        Property::new("status", FieldKind::String),
        Property::new("created", FieldKind::Timestamp),
        Property::new("updated", FieldKind::Timestamp),
        Property::new("region", FieldKind::Reference(&REGION)),
        Property::new("type", FieldKind::Reference(&INSTANCE_TYPE)),
        Property::new("image", FieldKind::Reference(&IMAGE)),
        Property::new("ipv4", FieldKind::List(&FieldKind::String)),
        Property::new("ipv6", FieldKind::String),
        Property::new("hypervisor", FieldKind::String),
        Property::new("specs", FieldKind::Raw),
        Property::new("alerts", FieldKind::Raw).mutable(),
        Property::new("backups", FieldKind::Raw),
        Property::new("watchdog_enabled", FieldKind::Boolean).mutable(),
        Property::new("tags", FieldKind::List(&FieldKind::String)).mutable(),
    ],
};

/// Optional fields for creating an instance.
///
/// `authorized_keys` entries may be public keys or paths to public key
/// files; paths are read before the request is sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InstanceCreateOptions {
    /// Image to deploy, e.g. `linode/debian9`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Root password. Generated when an image is given without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_pass: Option<String>,

    /// Instance label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Display group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Public keys or key file paths for the root user.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authorized_keys: Vec<String>,

    /// Whether to boot after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booted: Option<bool>,

    /// Whether to enroll in the backup service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups_enabled: Option<bool>,

    /// Whether to add a private IPv4 address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<bool>,

    /// Restore from this backup instead of an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<u64>,

    /// StackScript to run on first boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackscript_id: Option<u64>,

    /// User-defined fields for the StackScript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackscript_data: Option<serde_json::Value>,

    /// Swap disk size in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_size: Option<u64>,

    /// Tags to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
