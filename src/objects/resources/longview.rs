//! Longview monitoring clients and subscription plans.

use crate::objects::field::FieldKind;
use crate::objects::schema::{Property, ResourceSchema};

/// A Longview client installed on a host.
pub static LONGVIEW_CLIENT: ResourceSchema = ResourceSchema {
    name: "LongviewClient",
    endpoint: "longview/clients",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String).mutable(),
        Property::new("api_key", FieldKind::String),
        Property::new("install_code", FieldKind::String),
        Property::new("apps", FieldKind::Raw),
        Property::new("created", FieldKind::Timestamp),
        Property::new("updated", FieldKind::Timestamp),
    ],
};

/// A Longview Pro plan such as `longview-10`.
pub static LONGVIEW_SUBSCRIPTION: ResourceSchema = ResourceSchema {
    name: "LongviewSubscription",
    endpoint: "longview/subscriptions",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("label", FieldKind::String),
        Property::new("clients_included", FieldKind::Integer),
        Property::new("price", FieldKind::Raw),
    ],
};
