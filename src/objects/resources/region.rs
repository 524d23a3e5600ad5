//! Regions: the data centers resources are deployed to.

use crate::objects::field::FieldKind;
use crate::objects::schema::{Property, ResourceSchema};

/// A region such as `us-east`.
pub static REGION: ResourceSchema = ResourceSchema {
    name: "Region",
    endpoint: "regions",
    id_attribute: "id",
    tag_key: None,
    singleton: false,
    properties: &[
        Property::new("country", FieldKind::String),
        Property::new("label", FieldKind::String),
        Property::new("capabilities", FieldKind::List(&FieldKind::String)),
        Property::new("status", FieldKind::String),
        Property::new("resolvers", FieldKind::Raw),
    ],
};
