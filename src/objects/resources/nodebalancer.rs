//! NodeBalancers.

use crate::objects::field::FieldKind;
use crate::objects::resources::region::REGION;
use crate::objects::schema::{Property, ResourceSchema};

/// A managed load balancer.
pub static NODEBALANCER: ResourceSchema = ResourceSchema {
    name: "NodeBalancer",
    endpoint: "nodebalancers",
    id_attribute: "id",
    tag_key: Some("nodebalancers"),
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("hostname", FieldKind::String),
        Property::new("client_conn_throttle", FieldKind::Integer).mutable(),
        Property::new("region", FieldKind::Reference(&REGION)),
        Property::new("ipv4", FieldKind::String),
        Property::new("ipv6", FieldKind::String),
        Property::new("created", FieldKind::Timestamp),
        Property::new("updated", FieldKind::Timestamp),
        Property::new("transfer", FieldKind::Raw),
        Property::new("tags", FieldKind::List(&FieldKind::String)).mutable(),
    ],
};
