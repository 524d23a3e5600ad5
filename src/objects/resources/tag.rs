//! Tags and the tag-creation body.
//!
//! Tags are not a plain REST collection: a tag is identified by its label,
//! and creating one can attach it to resources of several types in the same
//! request. The body carries one id list per resource type:
//!
//! ```json
//! {"label": "pytest", "linodes": [123], "domains": [12345], "volumes": [1]}
//! ```
//!
//! Targets can be given as loaded objects or as raw ids; both forms go
//! through [`TagCreate::to_body`] and produce identical bodies for the same
//! resources.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::objects::errors::LinodeError;
use crate::objects::field::FieldKind;
use crate::objects::object::ApiObject;
use crate::objects::resources::domain::DOMAIN;
use crate::objects::resources::linode::INSTANCE;
use crate::objects::resources::nodebalancer::NODEBALANCER;
use crate::objects::resources::volume::VOLUME;
use crate::objects::schema::{ObjectId, Property, ResourceSchema};

/// A tag, identified by its label.
pub static TAG: ResourceSchema = ResourceSchema {
    name: "Tag",
    endpoint: "tags",
    id_attribute: "label",
    tag_key: None,
    singleton: false,
    properties: &[Property::new("label", FieldKind::String).required()],
};

/// Resource types a tag can be attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaggableKind {
    /// Compute instances (`linodes`).
    Linode,
    /// Domains (`domains`).
    Domain,
    /// NodeBalancers (`nodebalancers`).
    NodeBalancer,
    /// Volumes (`volumes`).
    Volume,
}

impl TaggableKind {
    /// Returns the schema of this resource type.
    #[must_use]
    pub fn schema(self) -> &'static ResourceSchema {
        match self {
            Self::Linode => &INSTANCE,
            Self::Domain => &DOMAIN,
            Self::NodeBalancer => &NODEBALANCER,
            Self::Volume => &VOLUME,
        }
    }

    /// Returns the key this type's ids go under in a tag body.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linode => "linodes",
            Self::Domain => "domains",
            Self::NodeBalancer => "nodebalancers",
            Self::Volume => "volumes",
        }
    }
}

/// Something to attach a new tag to.
#[derive(Clone, Debug)]
pub enum TagTarget {
    /// A loaded object; its schema decides the id list.
    Entity(ApiObject),
    /// A raw id of the given type.
    Id(TaggableKind, ObjectId),
}

/// Request to create a tag.
///
/// # Example
///
/// ```rust
/// use linode_api::objects::resources::{TagCreate, TaggableKind};
/// use serde_json::json;
///
/// let request = TagCreate::new("pytest")
///     .id(TaggableKind::Linode, 123)
///     .id(TaggableKind::Volume, 1);
///
/// assert_eq!(
///     request.to_body().unwrap(),
///     json!({"label": "pytest", "linodes": [123], "volumes": [1]})
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TagCreate {
    /// The tag label.
    pub label: String,
    /// Resources to attach the tag to.
    pub targets: Vec<TagTarget>,
}

impl TagCreate {
    /// Creates a request for a tag with no targets.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            targets: Vec::new(),
        }
    }

    /// Adds a loaded object as a target.
    #[must_use]
    pub fn entity(mut self, object: ApiObject) -> Self {
        self.targets.push(TagTarget::Entity(object));
        self
    }

    /// Adds several loaded objects as targets.
    #[must_use]
    pub fn entities(mut self, objects: impl IntoIterator<Item = ApiObject>) -> Self {
        self.targets
            .extend(objects.into_iter().map(TagTarget::Entity));
        self
    }

    /// Adds a raw id as a target.
    #[must_use]
    pub fn id(mut self, kind: TaggableKind, id: impl Into<ObjectId>) -> Self {
        self.targets.push(TagTarget::Id(kind, id.into()));
        self
    }

    /// Builds the request body.
    ///
    /// Targets are sorted into per-type id lists in the order given. Empty
    /// lists are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] if the label is empty or
    /// an entity's type cannot be tagged.
    pub fn to_body(&self) -> Result<Value, LinodeError> {
        if self.label.trim().is_empty() {
            return Err(LinodeError::invalid("tag_create", "label cannot be empty"));
        }

        let mut lists: BTreeMap<&'static str, Vec<Value>> = BTreeMap::new();
        for target in &self.targets {
            let (key, id) = normalize_target(target)?;
            lists.entry(key).or_default().push(id.to_json());
        }

        let mut body = Map::new();
        body.insert("label".to_string(), Value::from(self.label.as_str()));
        for (key, ids) in lists {
            body.insert(key.to_string(), Value::Array(ids));
        }
        Ok(Value::Object(body))
    }
}

fn normalize_target(target: &TagTarget) -> Result<(&'static str, &ObjectId), LinodeError> {
    match target {
        TagTarget::Id(kind, id) => Ok((kind.key(), id)),
        TagTarget::Entity(object) => {
            let schema = object.schema();
            let key = schema.tag_key.ok_or_else(|| {
                LinodeError::invalid("tag_create", format!("{} cannot be tagged", schema.name))
            })?;
            let id = object.id().ok_or_else(|| {
                LinodeError::invalid("tag_create", format!("{} has no id", schema.name))
            })?;
            Ok((key, id))
        }
    }
}
