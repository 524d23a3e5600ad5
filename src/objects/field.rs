//! Field coercion: raw JSON values into typed field values.
//!
//! Coercion is pure. [`coerce`] converts one JSON value according to its
//! declared [`FieldKind`]; [`FieldValue::to_json`] is the inverse.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::objects::errors::FormatError;
use crate::objects::object::ApiObject;
use crate::objects::schema::{ObjectId, ResourceSchema};

/// The date-time format the Linode API uses (`2018-09-14T13:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Declared semantic type of a property.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A JSON integer.
    Integer,
    /// Any JSON number.
    Float,
    /// A JSON boolean.
    Boolean,
    /// A string in [`TIMESTAMP_FORMAT`].
    Timestamp,
    /// A string restricted to the listed values.
    Enum(&'static [&'static str]),
    /// Another resource, embedded as an id or a summary object.
    Reference(&'static ResourceSchema),
    /// An array whose elements share one kind.
    List(&'static FieldKind),
    /// Any JSON, kept as is.
    Raw,
}

impl FieldKind {
    /// The value a missing optional field takes on full population.
    #[must_use]
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::String => FieldValue::String(String::new()),
            Self::Integer => FieldValue::Integer(0),
            Self::Float => FieldValue::Float(0.0),
            Self::Boolean => FieldValue::Boolean(false),
            Self::List(_) => FieldValue::List(Vec::new()),
            Self::Timestamp | Self::Enum(_) | Self::Reference(_) | Self::Raw => FieldValue::Null,
        }
    }

    const fn expected(&self) -> &'static str {
        match self {
            Self::String | Self::Timestamp | Self::Enum(_) => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Boolean => "boolean",
            Self::Reference(_) => "id or object",
            Self::List(_) => "array",
            Self::Raw => "any",
        }
    }
}

/// A coerced field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// JSON null.
    Null,
    /// A string.
    String(String),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A parsed timestamp.
    Timestamp(NaiveDateTime),
    /// One of an enum's declared values.
    Enum(String),
    /// A referenced resource, usually unpopulated.
    Object(Box<ApiObject>),
    /// An ordered list.
    List(Vec<FieldValue>),
    /// Uninterpreted JSON.
    Raw(Value),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string for `String` and `Enum` values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of `Float` and `Integer` values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp value.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the referenced object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ApiObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the list elements.
    #[must_use]
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the raw JSON.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(v) => Some(v),
            _ => None,
        }
    }

    /// Converts back to JSON. References become their id.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::String(s) | Self::Enum(s) => Value::from(s.as_str()),
            Self::Integer(n) => Value::from(*n),
            Self::Float(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Timestamp(t) => Value::from(t.format(TIMESTAMP_FORMAT).to_string()),
            Self::Object(o) => o.id().map_or(Value::Null, ObjectId::to_json),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Raw(v) => v.clone(),
        }
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerces one raw JSON value into the declared kind.
///
/// JSON null becomes [`FieldValue::Null`], except for lists where it becomes
/// an empty list.
///
/// # Errors
///
/// Returns [`FormatError`] when the value does not fit the kind.
///
/// # Example
///
/// ```rust
/// use linode_api::objects::{coerce, FieldKind, FieldValue};
/// use serde_json::json;
///
/// let created = coerce("created", FieldKind::Timestamp, &json!("2018-09-14T13:00:00")).unwrap();
/// assert_eq!(created.to_json(), json!("2018-09-14T13:00:00"));
///
/// let tags = coerce("tags", FieldKind::List(&FieldKind::String), &json!(null)).unwrap();
/// assert_eq!(tags, FieldValue::List(vec![]));
/// ```
pub fn coerce(field: &str, kind: FieldKind, value: &Value) -> Result<FieldValue, FormatError> {
    let mismatch = || FormatError::TypeMismatch {
        field: field.to_string(),
        expected: kind.expected(),
        found: json_type(value),
    };

    if value.is_null() {
        return Ok(match kind {
            FieldKind::List(_) => FieldValue::List(Vec::new()),
            _ => FieldValue::Null,
        });
    }

    match kind {
        FieldKind::String => value
            .as_str()
            .map(|s| FieldValue::String(s.to_string()))
            .ok_or_else(mismatch),
        FieldKind::Integer => value.as_i64().map(FieldValue::Integer).ok_or_else(mismatch),
        FieldKind::Float => value.as_f64().map(FieldValue::Float).ok_or_else(mismatch),
        FieldKind::Boolean => value.as_bool().map(FieldValue::Boolean).ok_or_else(mismatch),
        FieldKind::Timestamp => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
                .map(FieldValue::Timestamp)
                .map_err(|_| FormatError::InvalidTimestamp {
                    field: field.to_string(),
                    value: raw.to_string(),
                })
        }
        FieldKind::Enum(variants) => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            if variants.contains(&raw) {
                Ok(FieldValue::Enum(raw.to_string()))
            } else {
                Err(FormatError::UnknownVariant {
                    field: field.to_string(),
                    value: raw.to_string(),
                })
            }
        }
        FieldKind::Reference(schema) => match value {
            Value::Object(_) => ApiObject::from_summary(schema, value, None)
                .map(|o| FieldValue::Object(Box::new(o))),
            _ => ObjectId::from_json(value)
                .map(|id| FieldValue::Object(Box::new(ApiObject::with_id(schema, id, None))))
                .ok_or_else(mismatch),
        },
        FieldKind::List(element) => value
            .as_array()
            .ok_or_else(mismatch)?
            .iter()
            .map(|item| coerce(field, *element, item))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List),
        FieldKind::Raw => Ok(FieldValue::Raw(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::schema::Property;
    use chrono::NaiveDate;
    use serde_json::json;

    static ZONE: ResourceSchema = ResourceSchema {
        name: "Zone",
        endpoint: "zones",
        id_attribute: "id",
        tag_key: None,
        singleton: false,
        properties: &[Property::new("country", FieldKind::String)],
    };

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(
            coerce("label", FieldKind::String, &json!("block1")).unwrap(),
            FieldValue::String("block1".to_string())
        );
        assert_eq!(
            coerce("size", FieldKind::Integer, &json!(100)).unwrap(),
            FieldValue::Integer(100)
        );
        assert_eq!(
            coerce("balance", FieldKind::Float, &json!(0)).unwrap(),
            FieldValue::Float(0.0)
        );
        assert_eq!(
            coerce("managed", FieldKind::Boolean, &json!(false)).unwrap(),
            FieldValue::Boolean(false)
        );
    }

    #[test]
    fn test_type_mismatch_names_field_and_types() {
        let err = coerce("size", FieldKind::Integer, &json!("big")).unwrap_err();
        assert_eq!(
            err,
            FormatError::TypeMismatch {
                field: "size".to_string(),
                expected: "integer",
                found: "string",
            }
        );
        assert!(coerce("ratio", FieldKind::Integer, &json!(1.5)).is_err());
    }

    #[test]
    fn test_timestamp_parses_and_round_trips() {
        let value = coerce("created", FieldKind::Timestamp, &json!("2018-09-14T13:00:00")).unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 9, 14)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        assert_eq!(value.as_datetime(), Some(&expected));
        assert_eq!(value.to_json(), json!("2018-09-14T13:00:00"));
    }

    #[test]
    fn test_timestamp_rejects_other_formats() {
        let err = coerce("created", FieldKind::Timestamp, &json!("14/09/2018")).unwrap_err();
        assert!(matches!(err, FormatError::InvalidTimestamp { ref value, .. } if value == "14/09/2018"));
    }

    #[test]
    fn test_enum_restricts_values() {
        let kind = FieldKind::Enum(&["master", "slave"]);
        assert_eq!(
            coerce("type", kind, &json!("master")).unwrap(),
            FieldValue::Enum("master".to_string())
        );
        assert!(matches!(
            coerce("type", kind, &json!("primary")),
            Err(FormatError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn test_reference_from_id_is_unpopulated_summary() {
        let value = coerce("region", FieldKind::Reference(&ZONE), &json!("us-east-1a")).unwrap();
        let region = value.as_object().unwrap();
        assert_eq!(region.id(), Some(&ObjectId::from("us-east-1a")));
        assert!(!region.is_populated());
        assert_eq!(value.to_json(), json!("us-east-1a"));
    }

    #[test]
    fn test_reference_from_embedded_object() {
        let value = coerce(
            "region",
            FieldKind::Reference(&ZONE),
            &json!({"id": "us-east-1a", "country": "us"}),
        )
        .unwrap();
        let region = value.as_object().unwrap();
        assert!(!region.is_populated());
        assert_eq!(region.field("country").and_then(FieldValue::as_str), Some("us"));
    }

    #[test]
    fn test_null_reference_and_null_list() {
        assert!(coerce("region", FieldKind::Reference(&ZONE), &json!(null))
            .unwrap()
            .is_null());
        assert_eq!(
            coerce("tags", FieldKind::List(&FieldKind::String), &json!(null)).unwrap(),
            FieldValue::List(vec![])
        );
    }

    #[test]
    fn test_list_preserves_order_and_checks_elements() {
        let kind = FieldKind::List(&FieldKind::String);
        let value = coerce("ipv4", kind, &json!(["10.0.0.1", "10.0.0.2"])).unwrap();
        let items: Vec<&str> = value
            .as_list()
            .unwrap()
            .iter()
            .filter_map(FieldValue::as_str)
            .collect();
        assert_eq!(items, ["10.0.0.1", "10.0.0.2"]);

        assert!(coerce("ipv4", kind, &json!(["ok", 1])).is_err());
    }

    #[test]
    fn test_raw_is_opaque() {
        let raw = json!({"hourly": 0.0075, "monthly": 5.0});
        assert_eq!(
            coerce("price", FieldKind::Raw, &raw).unwrap(),
            FieldValue::Raw(raw.clone())
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FieldKind::String.default_value(), FieldValue::String(String::new()));
        assert_eq!(FieldKind::Integer.default_value(), FieldValue::Integer(0));
        assert_eq!(
            FieldKind::List(&FieldKind::String).default_value(),
            FieldValue::List(vec![])
        );
        assert!(FieldKind::Timestamp.default_value().is_null());
        assert!(FieldKind::Reference(&ZONE).default_value().is_null());
    }
}
