//! Static resource descriptions.
//!
//! Every resource type is described once by a `static` [`ResourceSchema`]:
//! where its collection lives, which JSON key carries its id, and the
//! declared type of each property. Objects, lists and the client facade are
//! all driven from these descriptions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::objects::errors::LinodeError;
use crate::objects::field::FieldKind;
use crate::objects::path::{build_path, has_placeholders};

/// Identifier of a resource.
///
/// Most resources use integer ids. Regions, images, instance types and
/// Longview subscriptions use strings, some of them composite
/// (`"private/123"`). Tags are identified by their label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    /// A numeric id.
    Int(u64),
    /// A string id.
    Str(String),
}

impl ObjectId {
    /// Reads an id from a JSON number or string.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(Self::Int),
            serde_json::Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// Converts the id back to its JSON form.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(id) => serde_json::Value::from(*id),
            Self::Str(id) => serde_json::Value::from(id.as_str()),
        }
    }

    /// Returns the numeric id, if this is one.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Str(_) => None,
        }
    }

    /// Returns the string id, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(id) => Some(id),
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// One declared property of a resource.
#[derive(Clone, Copy, Debug)]
pub struct Property {
    /// The JSON key.
    pub name: &'static str,
    /// How the raw JSON value is coerced.
    pub kind: FieldKind,
    /// Whether callers may change the value through `set`/`save`.
    pub mutable: bool,
    /// Whether a detail response must contain the key.
    pub required: bool,
}

impl Property {
    /// Declares a read-only, optional property.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            mutable: false,
            required: false,
        }
    }

    /// Marks the property as mutable.
    #[must_use]
    pub const fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Marks the property as required in detail responses.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Static description of a resource type.
///
/// # Example
///
/// ```rust
/// use linode_api::objects::{FieldKind, Property, ResourceSchema};
///
/// static WIDGET: ResourceSchema = ResourceSchema {
///     name: "Widget",
///     endpoint: "widgets",
///     id_attribute: "id",
///     tag_key: None,
///     singleton: false,
///     properties: &[
///         Property::new("label", FieldKind::String).mutable(),
///         Property::new("created", FieldKind::Timestamp),
///     ],
/// };
///
/// assert!(WIDGET.property("label").unwrap().mutable);
/// assert!(WIDGET.property("nope").is_none());
/// ```
pub struct ResourceSchema {
    /// Display name used in errors and logs.
    pub name: &'static str,
    /// Collection path template, relative to the API root.
    pub endpoint: &'static str,
    /// The JSON key carrying the id.
    pub id_attribute: &'static str,
    /// The key this resource's ids go under when creating a tag.
    pub tag_key: Option<&'static str>,
    /// The resource lives at the collection path itself.
    pub singleton: bool,
    /// Declared properties, excluding the id attribute.
    pub properties: &'static [Property],
}

impl ResourceSchema {
    /// Looks up a declared property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns `true` if the endpoint needs a parent id.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        has_placeholders(self.endpoint)
    }

    /// Resolves the collection path, substituting the parent id.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] when the endpoint needs a
    /// parent id and none was given.
    pub fn collection_path(&self, parent_id: Option<&ObjectId>) -> Result<String, LinodeError> {
        let mut ids = HashMap::new();
        if let Some(parent_id) = parent_id {
            ids.insert("parent_id", parent_id);
        }
        let path = build_path(self.endpoint, &ids);
        if has_placeholders(&path) {
            return Err(LinodeError::invalid(
                "path",
                format!("{} requires a parent id", self.name),
            ));
        }
        Ok(path)
    }
}

impl fmt::Debug for ResourceSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSchema")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static RECORD: ResourceSchema = ResourceSchema {
        name: "Record",
        endpoint: "zones/{parent_id}/records",
        id_attribute: "id",
        tag_key: None,
        singleton: false,
        properties: &[
            Property::new("name", FieldKind::String).mutable(),
            Property::new("target", FieldKind::String).required(),
        ],
    };

    #[test]
    fn test_object_id_from_json() {
        assert_eq!(ObjectId::from_json(&json!(123)), Some(ObjectId::Int(123)));
        assert_eq!(
            ObjectId::from_json(&json!("private/123")),
            Some(ObjectId::Str("private/123".to_string()))
        );
        assert_eq!(ObjectId::from_json(&json!(null)), None);
        assert_eq!(ObjectId::from_json(&json!(-1)), None);
    }

    #[test]
    fn test_object_id_json_round_trip() {
        for id in [ObjectId::from(22), ObjectId::from("us-east-1a")] {
            assert_eq!(ObjectId::from_json(&id.to_json()), Some(id));
        }
    }

    #[test]
    fn test_object_id_display_and_accessors() {
        assert_eq!(ObjectId::from(5678).to_string(), "5678");
        assert_eq!(ObjectId::from("longview-100").to_string(), "longview-100");
        assert_eq!(ObjectId::from(1).as_u64(), Some(1));
        assert_eq!(ObjectId::from("x").as_str(), Some("x"));
        assert_eq!(ObjectId::from("x").as_u64(), None);
    }

    #[test]
    fn test_property_builders() {
        let name = RECORD.property("name").unwrap();
        assert!(name.mutable);
        assert!(!name.required);

        let target = RECORD.property("target").unwrap();
        assert!(!target.mutable);
        assert!(target.required);
    }

    #[test]
    fn test_collection_path_requires_parent_for_nested() {
        assert!(RECORD.is_nested());
        assert!(matches!(
            RECORD.collection_path(None),
            Err(LinodeError::InvalidParameter { .. })
        ));
        assert_eq!(
            RECORD.collection_path(Some(&ObjectId::from(7))).unwrap(),
            "zones/7/records"
        );
    }

    #[test]
    fn test_debug_is_shallow() {
        let debug = format!("{RECORD:?}");
        assert!(debug.contains("Record"));
        assert!(!debug.contains("target"));
    }
}
