//! Path building for resource endpoints.
//!
//! Endpoint templates use `{name}` placeholders:
//! - `linode/instances` - top-level collection
//! - `domains/{parent_id}/records` - collection nested under a parent
//!
//! Interpolated values are percent-encoded one path segment at a time, so a
//! tag label with spaces is escaped while a composite id such as
//! `private/123` keeps its slash.

use std::collections::HashMap;
use std::fmt::Display;

/// Percent-encodes each `/`-separated segment of `value`.
///
/// # Example
///
/// ```rust
/// use linode_api::objects::encode_path_segments;
///
/// assert_eq!(encode_path_segments("private/123"), "private/123");
/// assert_eq!(encode_path_segments("my tag"), "my%20tag");
/// ```
#[must_use]
pub fn encode_path_segments(value: &str) -> String {
    value
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds a path from a template by interpolating ids.
///
/// Placeholders without a value are left untouched; callers check
/// [`has_placeholders`] when a missing id is an error.
///
/// # Example
///
/// ```rust
/// use linode_api::objects::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("parent_id", "12345");
///
/// assert_eq!(build_path("domains/{parent_id}/records", &ids), "domains/12345/records");
/// ```
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();
    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &encode_path_segments(&value.to_string()));
    }
    result
}

/// Returns `true` if `path` still contains a `{placeholder}`.
#[must_use]
pub fn has_placeholders(path: &str) -> bool {
    path.find('{')
        .is_some_and(|open| path[open..].contains('}'))
}
