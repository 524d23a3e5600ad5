//! The object layer: typed fields, lazily populated objects and paginated
//! lists, all driven by static resource descriptions.
//!
//! # Overview
//!
//! - [`ResourceSchema`]: where a resource lives and what fields it declares
//! - [`FieldKind`] / [`FieldValue`]: declared field types and decoded values
//! - [`coerce`]: JSON to [`FieldValue`] conversion for one field
//! - [`ApiObject`]: one resource instance, populated on first access
//! - [`PaginatedList`]: a list endpoint, fetched page by page
//! - [`LinodeError`]: every error the object layer reports
//!
//! Network access always goes through a [`LinodeClient`](crate::LinodeClient)
//! passed in by the caller.

mod errors;
mod field;
mod object;
mod paginated;
mod path;
mod schema;

pub mod resources;

pub use errors::{ApiErrorReason, FormatError, LinodeError};
pub use field::{coerce, FieldKind, FieldValue, TIMESTAMP_FORMAT};
pub use object::ApiObject;
pub use paginated::PaginatedList;
pub use path::{build_path, encode_path_segments};
pub use schema::{ObjectId, Property, ResourceSchema};
