//! DNS domains and their records.

use serde::{Deserialize, Serialize};

use crate::objects::field::FieldKind;
use crate::objects::schema::{Property, ResourceSchema};

/// A DNS zone managed by the DNS manager.
pub static DOMAIN: ResourceSchema = ResourceSchema {
    name: "Domain",
    endpoint: "domains",
    id_attribute: "id",
    tag_key: Some("domains"),
    singleton: false,
    properties: &[
        Property::new("domain", FieldKind::String).mutable().required(),
        Property::new("type", FieldKind::Enum(&["master", "slave"])).mutable(),
        Property::new(
            "status",
            FieldKind::Enum(&["active", "disabled", "edit_mode", "has_errors"]),
        )
        .mutable(),
        Property::new("soa_email", FieldKind::String).mutable(),
        Property::new("description", FieldKind::String).mutable(),
        Property::new("group", FieldKind::String).mutable(),
        Property::new("retry_sec", FieldKind::Integer).mutable(),
        Property::new("expire_sec", FieldKind::Integer).mutable(),
        Property::new("refresh_sec", FieldKind::Integer).mutable(),
        Property::new("ttl_sec", FieldKind::Integer).mutable(),
        Property::new("master_ips", FieldKind::List(&FieldKind::String)).mutable(),
        Property::new("axfr_ips", FieldKind::List(&FieldKind::String)).mutable(),
        Property::new("tags", FieldKind::List(&FieldKind::String)).mutable(),
    ],
};

/// A record inside a domain, nested under `domains/{id}/records`.
pub static DOMAIN_RECORD: ResourceSchema = ResourceSchema {
    name: "DomainRecord",
    endpoint: "domains/{parent_id}/records",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new(
            "type",
            FieldKind::Enum(&["A", "AAAA", "NS", "MX", "CNAME", "TXT", "SRV", "PTR", "CAA"]),
        ),
        Property::new("name", FieldKind::String).mutable(),
        Property::new("target", FieldKind::String).mutable(),
        Property::new("priority", FieldKind::Integer).mutable(),
        Property::new("weight", FieldKind::Integer).mutable(),
        Property::new("port", FieldKind::Integer).mutable(),
        Property::new("service", FieldKind::String).mutable(),
        Property::new("protocol", FieldKind::String).mutable(),
        Property::new("ttl_sec", FieldKind::Integer).mutable(),
        Property::new("tag", FieldKind::String).mutable(),
    ],
};

/// Optional fields for creating a domain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DomainCreateOptions {
    /// Start of authority email. Required by the API for master zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_email: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Default TTL in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_sec: Option<u32>,

    /// SOA refresh interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_sec: Option<u32>,

    /// SOA retry interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_sec: Option<u32>,

    /// SOA expiry in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_sec: Option<u32>,

    /// Masters to pull from (slave zones).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub master_ips: Vec<String>,

    /// Addresses allowed to AXFR the zone.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub axfr_ips: Vec<String>,

    /// Tags to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
