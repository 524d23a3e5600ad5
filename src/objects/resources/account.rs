//! The account and its settings. Both are singletons.

use crate::objects::field::FieldKind;
use crate::objects::resources::longview::LONGVIEW_SUBSCRIPTION;
use crate::objects::schema::{Property, ResourceSchema};

/// The account owning the token.
pub static ACCOUNT: ResourceSchema = ResourceSchema {
    name: "Account",
    endpoint: "account",
    id_attribute: "id",
    tag_key: None,
    singleton: true,
    properties: &[
        Property::new("first_name", FieldKind::String).mutable(),
        Property::new("last_name", FieldKind::String).mutable(),
        Property::new("email", FieldKind::String).mutable(),
        Property::new("phone", FieldKind::String).mutable(),
        Property::new("company", FieldKind::String).mutable(),
        Property::new("address_1", FieldKind::String).mutable(),
        Property::new("address_2", FieldKind::String).mutable(),
        Property::new("city", FieldKind::String).mutable(),
        Property::new("state", FieldKind::String).mutable(),
        Property::new("country", FieldKind::String).mutable(),
        Property::new("zip", FieldKind::String).mutable(),
        Property::new("tax_id", FieldKind::String).mutable(),
        Property::new("balance", FieldKind::Float),
        Property::new("credit_card", FieldKind::Raw),
    ],
};

/// Account-wide settings.
pub static ACCOUNT_SETTINGS: ResourceSchema = ResourceSchema {
    name: "AccountSettings",
    endpoint: "account/settings",
    id_attribute: "id",
    tag_key: None,
    singleton: true,
    properties: &[
        Property::new("network_helper", FieldKind::Boolean).mutable(),
        Property::new("managed", FieldKind::Boolean),
        Property::new("backups_enabled", FieldKind::Boolean).mutable(),
        Property::new(
            "longview_subscription",
            FieldKind::Reference(&LONGVIEW_SUBSCRIPTION),
        )
        .mutable(),
    ],
};
