//! Lazily populated model objects.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::client::LinodeClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::objects::errors::{FormatError, LinodeError};
use crate::objects::field::{coerce, FieldValue};
use crate::objects::path::encode_path_segments;
use crate::objects::schema::{ObjectId, ResourceSchema};

static NULL_VALUE: FieldValue = FieldValue::Null;

/// One instance of a resource.
///
/// An object built from a list response is a *summary*: only the fields the
/// list returned are cached and [`is_populated`](Self::is_populated) is
/// `false`. [`ensure_populated`](Self::ensure_populated) fetches the detail
/// view once and caches every declared field; [`get`](Self::get) does this
/// on demand for a field that is not cached yet.
///
/// Two objects are equal when they have the same resource type and id,
/// whatever their population state.
///
/// # Example
///
/// ```rust,ignore
/// use linode_api::objects::resources::INSTANCE;
///
/// let mut instance = client.linode().instances(&[]).await?.first(&client).await?.clone();
/// let ipv4 = instance.get(&client, "ipv4").await?;
/// ```
#[derive(Clone, Debug)]
pub struct ApiObject {
    schema: &'static ResourceSchema,
    id: Option<ObjectId>,
    parent_id: Option<ObjectId>,
    populated: bool,
    fields: BTreeMap<&'static str, FieldValue>,
    /// Mutable field values as of the last time the server was read.
    snapshot: Map<String, Value>,
}

impl ApiObject {
    /// Creates an unpopulated object that knows only its id.
    #[must_use]
    pub fn with_id(
        schema: &'static ResourceSchema,
        id: impl Into<ObjectId>,
        parent_id: Option<ObjectId>,
    ) -> Self {
        Self {
            schema,
            id: Some(id.into()),
            parent_id,
            populated: false,
            fields: BTreeMap::new(),
            snapshot: Map::new(),
        }
    }

    /// Creates an unpopulated handle for a singleton resource such as the
    /// account.
    #[must_use]
    pub fn singleton(schema: &'static ResourceSchema) -> Self {
        Self {
            schema,
            id: None,
            parent_id: None,
            populated: false,
            fields: BTreeMap::new(),
            snapshot: Map::new(),
        }
    }

    /// Builds a summary object from a list element.
    ///
    /// Only declared fields present in `json` are set; unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the id attribute is missing (for
    /// non-singletons) or a present field fails to coerce.
    pub fn from_summary(
        schema: &'static ResourceSchema,
        json: &Value,
        parent_id: Option<ObjectId>,
    ) -> Result<Self, FormatError> {
        let mut object = Self::decode_id(schema, json, parent_id)?;
        for property in schema.properties {
            if let Some(raw) = json.get(property.name) {
                let value = coerce(property.name, property.kind, raw)?;
                object.fields.insert(property.name, value);
            }
        }
        object.snapshot = object.mutable_json();
        Ok(object)
    }

    /// Builds a fully populated object from a detail response.
    ///
    /// Missing optional fields take their kind's default.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingField`] if the id attribute or a
    /// required property is missing, or another [`FormatError`] if a field
    /// fails to coerce.
    pub fn from_detail(
        schema: &'static ResourceSchema,
        json: &Value,
        parent_id: Option<ObjectId>,
    ) -> Result<Self, FormatError> {
        let mut object = Self::decode_id(schema, json, parent_id)?;
        for property in schema.properties {
            let value = match json.get(property.name) {
                Some(raw) => coerce(property.name, property.kind, raw)?,
                None if property.required => {
                    return Err(FormatError::MissingField {
                        resource: schema.name,
                        field: property.name.to_string(),
                    })
                }
                None => property.kind.default_value(),
            };
            object.fields.insert(property.name, value);
        }
        object.populated = true;
        object.snapshot = object.mutable_json();
        Ok(object)
    }

    fn decode_id(
        schema: &'static ResourceSchema,
        json: &Value,
        parent_id: Option<ObjectId>,
    ) -> Result<Self, FormatError> {
        if schema.singleton {
            let mut object = Self::singleton(schema);
            object.parent_id = parent_id;
            return Ok(object);
        }
        let id = json
            .get(schema.id_attribute)
            .and_then(ObjectId::from_json)
            .ok_or_else(|| FormatError::MissingField {
                resource: schema.name,
                field: schema.id_attribute.to_string(),
            })?;
        Ok(Self::with_id(schema, id, parent_id))
    }

    /// Returns the resource description.
    #[must_use]
    pub const fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    /// Returns the id; `None` only for singletons.
    #[must_use]
    pub const fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    /// Returns the parent id for nested resources.
    #[must_use]
    pub const fn parent_id(&self) -> Option<&ObjectId> {
        self.parent_id.as_ref()
    }

    /// Returns `true` once every declared field has been loaded.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.populated
    }

    /// Returns a cached field without any I/O.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the canonical path of this object.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] if a nested object lacks
    /// its parent id.
    pub fn api_path(&self) -> Result<String, LinodeError> {
        let collection = self.schema.collection_path(self.parent_id.as_ref())?;
        Ok(match &self.id {
            Some(id) => format!("{collection}/{}", encode_path_segments(&id.to_string())),
            None => collection,
        })
    }

    /// Returns a field, fetching the detail view first if it is not cached.
    ///
    /// At most one detail fetch happens per object: once populated, every
    /// declared field is cached.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] for an undeclared field, or
    /// any error from [`ensure_populated`](Self::ensure_populated).
    pub async fn get(
        &mut self,
        client: &LinodeClient,
        name: &str,
    ) -> Result<&FieldValue, LinodeError> {
        let property = self.schema.property(name).ok_or_else(|| {
            LinodeError::invalid("get", format!("{} has no field '{name}'", self.schema.name))
        })?;
        if !self.fields.contains_key(property.name) {
            self.ensure_populated(client).await?;
        }
        Ok(self.fields.get(property.name).unwrap_or(&NULL_VALUE))
    }

    /// Fetches the detail view unless the object is already populated.
    ///
    /// The response is decoded into a fresh cache that replaces the current
    /// one only on success; a failed fetch leaves the object untouched.
    /// Values changed through [`set`](Self::set) and not yet saved are kept.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::NotFound`] on 404, [`LinodeError::Api`] on any
    /// other non-2xx status and [`LinodeError::Format`] if the response
    /// does not match the schema.
    pub async fn ensure_populated(&mut self, client: &LinodeClient) -> Result<(), LinodeError> {
        if self.populated {
            return Ok(());
        }

        let path = self.api_path()?;
        tracing::debug!(resource = self.schema.name, path = %path, "fetching detail");

        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        let id = self.id.as_ref().map(ToString::to_string);
        let body = client
            .execute(request, self.schema.name, id.as_deref())
            .await?;

        let mut fresh = Self::from_detail(self.schema, &body, self.parent_id.clone())?;
        for name in self.changed_fields().keys() {
            if let Some((key, local)) = self.fields.get_key_value(name.as_str()) {
                fresh.fields.insert(*key, local.clone());
            }
        }
        *self = fresh;
        Ok(())
    }

    /// Changes a mutable field in the local cache.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] if the field is unknown or
    /// read-only, or [`LinodeError::Format`] if the value does not fit its
    /// declared kind.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), LinodeError> {
        let property = self.schema.property(name).ok_or_else(|| {
            LinodeError::invalid("set", format!("{} has no field '{name}'", self.schema.name))
        })?;
        if !property.mutable {
            return Err(LinodeError::invalid(
                "set",
                format!("{}.{name} is read-only", self.schema.name),
            ));
        }
        let value = coerce(property.name, property.kind, &value.into())?;
        self.fields.insert(property.name, value);
        Ok(())
    }

    /// Returns the mutable fields whose value differs from what the server
    /// last returned.
    #[must_use]
    pub fn changed_fields(&self) -> Map<String, Value> {
        self.mutable_json()
            .into_iter()
            .filter(|(name, value)| self.snapshot.get(name) != Some(value))
            .collect()
    }

    /// Returns `true` if [`changed_fields`](Self::changed_fields) is
    /// non-empty.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    /// Serializes the id and every cached field.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert(self.schema.id_attribute.to_string(), id.to_json());
        }
        for (name, value) in &self.fields {
            map.insert((*name).to_string(), value.to_json());
        }
        Value::Object(map)
    }

    fn mutable_json(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|(name, _)| self.schema.property(name).is_some_and(|p| p.mutable))
            .map(|(name, value)| ((*name).to_string(), value.to_json()))
            .collect()
    }
}

impl PartialEq for ApiObject {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name && self.id == other.id
    }
}
