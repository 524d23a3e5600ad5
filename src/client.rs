//! The client facade: generic resource operations plus the top-level
//! convenience calls.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
use crate::config::LinodeConfig;
use crate::groups::{AccountGroup, LinodeGroup, LongviewGroup, ProfileGroup};
use crate::objects::resources::{
    DomainCreateOptions, TagCreate, VolumeCreateOptions, DOMAIN, DOMAIN_RECORD, IMAGE,
    NODEBALANCER, REGION, TAG, VOLUME,
};
use crate::objects::{ApiObject, FormatError, LinodeError, ObjectId, PaginatedList, ResourceSchema};

/// Entry point for the Linode API.
///
/// `LinodeClient` is cheap to clone; clones share one transport. Objects
/// and lists never hold a client, so every call that may touch the network
/// takes one explicitly.
///
/// # Example
///
/// ```rust,ignore
/// use linode_api::{ApiToken, LinodeClient, LinodeConfig};
///
/// let config = LinodeConfig::builder()
///     .token(ApiToken::new(std::env::var("LINODE_TOKEN")?)?)
///     .build()?;
/// let client = LinodeClient::new(&config)?;
///
/// let mut regions = client.regions().await?;
/// let first = regions.first(&client).await?;
/// ```
#[derive(Clone, Debug)]
pub struct LinodeClient {
    config: LinodeConfig,
    transport: Arc<dyn Transport>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinodeClient>();
};

impl LinodeClient {
    /// Creates a client that talks to the configured API over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &LinodeConfig) -> Result<Self, LinodeError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(config.clone(), Arc::new(transport)))
    }

    /// Creates a client on top of an existing transport.
    #[must_use]
    pub fn with_transport(config: LinodeConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LinodeConfig {
        &self.config
    }

    /// Sends a request and maps a non-2xx status to [`LinodeError`].
    pub(crate) async fn execute(
        &self,
        request: HttpRequest,
        resource: &'static str,
        id: Option<&str>,
    ) -> Result<Value, LinodeError> {
        let response = self.transport.send(request).await?;
        if response.is_ok() {
            if let Some(body) = response.raw_body() {
                return Err(FormatError::NotJson {
                    resource,
                    body: body.to_string(),
                }
                .into());
            }
            Ok(response.body)
        } else {
            Err(LinodeError::from_http_response(
                response.code,
                &response.body,
                resource,
                id,
            ))
        }
    }

    // Generic operations

    /// Lists a top-level collection.
    ///
    /// Filters are sent as query parameters after `page` and `page_size`.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn list(
        &self,
        schema: &'static ResourceSchema,
        filters: &[(&str, &str)],
    ) -> Result<PaginatedList, LinodeError> {
        PaginatedList::fetch(self, schema, None, owned_filters(filters)).await
    }

    /// Lists a collection nested under `parent`.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn list_nested(
        &self,
        schema: &'static ResourceSchema,
        parent: impl Into<ObjectId>,
        filters: &[(&str, &str)],
    ) -> Result<PaginatedList, LinodeError> {
        PaginatedList::fetch(self, schema, Some(parent.into()), owned_filters(filters)).await
    }

    /// Fetches one object by id, fully populated.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::NotFound`] if no such object exists.
    pub async fn load(
        &self,
        schema: &'static ResourceSchema,
        id: impl Into<ObjectId>,
    ) -> Result<ApiObject, LinodeError> {
        let mut object = ApiObject::with_id(schema, id, None);
        object.ensure_populated(self).await?;
        Ok(object)
    }

    /// Fetches one nested object by parent id and id, fully populated.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::NotFound`] if no such object exists.
    pub async fn load_nested(
        &self,
        schema: &'static ResourceSchema,
        parent: impl Into<ObjectId>,
        id: impl Into<ObjectId>,
    ) -> Result<ApiObject, LinodeError> {
        let mut object = ApiObject::with_id(schema, id, Some(parent.into()));
        object.ensure_populated(self).await?;
        Ok(object)
    }

    /// Fetches a singleton resource, fully populated.
    ///
    /// # Errors
    ///
    /// Returns any error from the detail fetch.
    pub async fn load_singleton(
        &self,
        schema: &'static ResourceSchema,
    ) -> Result<ApiObject, LinodeError> {
        let mut object = ApiObject::singleton(schema);
        object.ensure_populated(self).await?;
        Ok(object)
    }

    /// Creates an object from the given fields.
    ///
    /// Only the given fields are sent. Each must be a declared, mutable
    /// property of `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] before any I/O for an
    /// unknown or read-only field, and [`LinodeError::Format`] if the
    /// response lacks the id attribute.
    pub async fn create(
        &self,
        schema: &'static ResourceSchema,
        fields: Map<String, Value>,
    ) -> Result<ApiObject, LinodeError> {
        for name in fields.keys() {
            match schema.property(name) {
                Some(property) if property.mutable => {}
                Some(_) => {
                    return Err(LinodeError::invalid(
                        "create",
                        format!("{}.{name} is read-only", schema.name),
                    ))
                }
                None => {
                    return Err(LinodeError::invalid(
                        "create",
                        format!("{} has no field '{name}'", schema.name),
                    ))
                }
            }
        }
        self.post_create(schema, None, Value::Object(fields)).await
    }

    /// Sets each field on `object`, then saves it.
    ///
    /// # Errors
    ///
    /// Returns the first [`set`](ApiObject::set) error before any I/O, or
    /// any error from [`save`](Self::save).
    pub async fn update<'a>(
        &self,
        object: &mut ApiObject,
        fields: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<(), LinodeError> {
        for (name, value) in fields {
            object.set(name, value)?;
        }
        self.save(object).await
    }

    /// Sends the object's changed fields and re-populates it from the
    /// response.
    ///
    /// Nothing is sent when no field changed.
    ///
    /// # Errors
    ///
    /// Returns the status errors of the `PUT`, or [`LinodeError::Format`]
    /// if the response does not match the schema.
    pub async fn save(&self, object: &mut ApiObject) -> Result<(), LinodeError> {
        let changes = object.changed_fields();
        if changes.is_empty() {
            return Ok(());
        }

        let path = object.api_path()?;
        tracing::debug!(resource = object.schema().name, path = %path, "saving changes");

        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(Value::Object(changes))
            .build()?;
        let id = object.id().map(ToString::to_string);
        let body = self
            .execute(request, object.schema().name, id.as_deref())
            .await?;

        *object = ApiObject::from_detail(object.schema(), &body, object.parent_id().cloned())?;
        Ok(())
    }

    /// Deletes the object on the server.
    ///
    /// # Errors
    ///
    /// Returns the status errors of the `DELETE`.
    pub async fn delete(&self, object: &ApiObject) -> Result<(), LinodeError> {
        let path = object.api_path()?;
        tracing::debug!(resource = object.schema().name, path = %path, "deleting");

        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        let id = object.id().map(ToString::to_string);
        self.execute(request, object.schema().name, id.as_deref())
            .await?;
        Ok(())
    }

    pub(crate) async fn post_create(
        &self,
        schema: &'static ResourceSchema,
        parent_id: Option<ObjectId>,
        body: Value,
    ) -> Result<ApiObject, LinodeError> {
        let path = schema.collection_path(parent_id.as_ref())?;
        tracing::debug!(resource = schema.name, path = %path, "creating");

        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        let response = self.execute(request, schema.name, None).await?;
        Ok(ApiObject::from_detail(schema, &response, parent_id)?)
    }

    // Top-level collections

    /// Lists regions.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn regions(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&REGION, &[]).await
    }

    /// Lists public and private images.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn images(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&IMAGE, &[]).await
    }

    /// Lists domains.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn domains(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&DOMAIN, &[]).await
    }

    /// Lists volumes.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn volumes(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&VOLUME, &[]).await
    }

    /// Lists tags.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn tags(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&TAG, &[]).await
    }

    /// Lists NodeBalancers.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn nodebalancers(&self) -> Result<PaginatedList, LinodeError> {
        self.list(&NODEBALANCER, &[]).await
    }

    /// Lists the records of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] if `domain` is not a domain
    /// or has no id.
    pub async fn domain_records(&self, domain: &ApiObject) -> Result<PaginatedList, LinodeError> {
        if domain.schema().name != DOMAIN.name {
            return Err(LinodeError::invalid(
                "domain_records",
                format!("expected a Domain, got {}", domain.schema().name),
            ));
        }
        let id = domain
            .id()
            .cloned()
            .ok_or_else(|| LinodeError::invalid("domain_records", "domain has no id"))?;
        self.list_nested(&DOMAIN_RECORD, id, &[]).await
    }

    // Creation

    /// Creates a private image from a disk.
    ///
    /// # Errors
    ///
    /// Returns the status errors of the `POST`.
    pub async fn image_create(
        &self,
        disk_id: u64,
        label: Option<&str>,
        description: Option<&str>,
    ) -> Result<ApiObject, LinodeError> {
        let mut body = Map::new();
        body.insert("disk_id".to_string(), Value::from(disk_id));
        if let Some(label) = label {
            body.insert("label".to_string(), Value::from(label));
        }
        if let Some(description) = description {
            body.insert("description".to_string(), Value::from(description));
        }
        self.post_create(&IMAGE, None, Value::Object(body)).await
    }

    /// Creates a domain. `master` selects a master or a slave zone.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] for an empty domain name.
    pub async fn domain_create(
        &self,
        domain: &str,
        master: bool,
        options: DomainCreateOptions,
    ) -> Result<ApiObject, LinodeError> {
        if domain.trim().is_empty() {
            return Err(LinodeError::invalid("domain_create", "domain cannot be empty"));
        }
        let mut body = request_body("domain_create", &options)?;
        body.insert("domain".to_string(), Value::from(domain));
        body.insert(
            "type".to_string(),
            Value::from(if master { "master" } else { "slave" }),
        );
        self.post_create(&DOMAIN, None, Value::Object(body)).await
    }

    /// Creates a block storage volume.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] when neither a region nor
    /// an instance to attach to is given.
    pub async fn volume_create(
        &self,
        label: &str,
        options: VolumeCreateOptions,
    ) -> Result<ApiObject, LinodeError> {
        if options.region.is_none() && options.linode_id.is_none() {
            return Err(LinodeError::invalid(
                "volume_create",
                "either a region or a linode_id is required",
            ));
        }
        let mut body = request_body("volume_create", &options)?;
        body.insert("label".to_string(), Value::from(label));
        self.post_create(&VOLUME, None, Value::Object(body)).await
    }

    /// Creates a tag, optionally attaching it to resources.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] before any I/O if a target
    /// cannot be tagged, and [`LinodeError::Format`] if the response has no
    /// label.
    pub async fn tag_create(&self, request: TagCreate) -> Result<ApiObject, LinodeError> {
        let body = request.to_body()?;
        self.post_create(&TAG, None, body).await
    }

    // Groups

    /// Instances and instance types.
    #[must_use]
    pub const fn linode(&self) -> LinodeGroup<'_> {
        LinodeGroup::new(self)
    }

    /// The account and its settings.
    #[must_use]
    pub const fn account(&self) -> AccountGroup<'_> {
        AccountGroup::new(self)
    }

    /// Longview clients and subscriptions.
    #[must_use]
    pub const fn longview(&self) -> LongviewGroup<'_> {
        LongviewGroup::new(self)
    }

    /// The profile of the token's user.
    #[must_use]
    pub const fn profile(&self) -> ProfileGroup<'_> {
        ProfileGroup::new(self)
    }
}

fn owned_filters(filters: &[(&str, &str)]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Serializes creation options into a JSON object, dropping nulls.
pub(crate) fn request_body<T: Serialize>(
    operation: &'static str,
    options: &T,
) -> Result<Map<String, Value>, LinodeError> {
    let value = serde_json::to_value(options)
        .map_err(|e| LinodeError::invalid(operation, format!("failed to serialize options: {e}")))?;

    match value {
        Value::Object(map) => Ok(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        Value::Null => Ok(Map::new()),
        _ => Err(LinodeError::invalid(
            operation,
            "options must serialize to a JSON object",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::resources::{TaggableKind, ACCOUNT, INSTANCE};
    use crate::objects::FieldValue;
    use crate::testing::FixtureTransport;
    use serde_json::json;

    fn domain_json() -> Value {
        json!({
            "id": 12345,
            "domain": "example.org",
            "type": "master",
            "status": "active",
            "soa_email": "admin@example.org",
            "description": "",
            "ttl_sec": 300,
            "tags": []
        })
    }

    #[tokio::test]
    async fn test_load_fetches_populated_object() {
        let transport = FixtureTransport::new().with_json("domains/12345", domain_json());
        let client = transport.client();

        let domain = client.load(&DOMAIN, 12345).await.unwrap();

        assert!(domain.is_populated());
        assert_eq!(domain.field("domain").and_then(FieldValue::as_str), Some("example.org"));
        assert_eq!(transport.requests()[0].path, "domains/12345");
    }

    #[tokio::test]
    async fn test_load_missing_object_is_not_found() {
        let transport = FixtureTransport::new();
        let client = transport.client();

        let err = client.load(&VOLUME, 9).await.unwrap_err();
        assert!(matches!(err, LinodeError::NotFound { resource: "Volume", .. }));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_format_error() {
        let html = json!({"raw_body": "<html>gateway</html>"});
        let transport = FixtureTransport::new()
            .with_json("account", html.clone())
            .with_json("domains/1", html);
        let client = transport.client();

        let err = client.load_singleton(&ACCOUNT).await.unwrap_err();
        assert!(matches!(
            err,
            LinodeError::Format(FormatError::NotJson { resource: "Account", ref body })
                if body == "<html>gateway</html>"
        ));

        let err = client.load(&DOMAIN, 1).await.unwrap_err();
        assert!(matches!(
            err,
            LinodeError::Format(FormatError::NotJson { resource: "Domain", .. })
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_and_read_only_fields_without_io() {
        let transport = FixtureTransport::new();
        let client = transport.client();

        let mut unknown = Map::new();
        unknown.insert("color".to_string(), json!("red"));
        assert!(matches!(
            client.create(&DOMAIN, unknown).await,
            Err(LinodeError::InvalidParameter { operation: "create", .. })
        ));

        let mut read_only = Map::new();
        read_only.insert("status".to_string(), json!("active"));
        assert!(matches!(
            client.create(&VOLUME, read_only).await,
            Err(LinodeError::InvalidParameter { operation: "create", .. })
        ));

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_sends_only_given_fields() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Post,
            "domains",
            200,
            domain_json(),
        );
        let client = transport.client();

        let mut fields = Map::new();
        fields.insert("domain".to_string(), json!("example.org"));
        fields.insert("soa_email".to_string(), json!("admin@example.org"));
        let domain = client.create(&DOMAIN, fields).await.unwrap();

        assert_eq!(domain.id(), Some(&ObjectId::Int(12345)));
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"domain": "example.org", "soa_email": "admin@example.org"}))
        );
    }

    #[tokio::test]
    async fn test_create_response_without_id_is_format_error() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Post,
            "domains",
            200,
            json!({"domain": "example.org"}),
        );
        let client = transport.client();

        let mut fields = Map::new();
        fields.insert("domain".to_string(), json!("example.org"));
        assert!(matches!(
            client.create(&DOMAIN, fields).await,
            Err(LinodeError::Format(FormatError::MissingField { .. }))
        ));
    }

    #[tokio::test]
    async fn test_save_sends_changed_fields_only() {
        let mut updated = domain_json();
        updated["description"] = json!("updated");
        let transport = FixtureTransport::new()
            .with_json("domains/12345", domain_json())
            .with_response(HttpMethod::Put, "domains/12345", 200, updated);
        let client = transport.client();

        let mut domain = client.load(&DOMAIN, 12345).await.unwrap();
        client.save(&mut domain).await.unwrap();
        assert_eq!(transport.call_count(), 1);

        client
            .update(&mut domain, [("description", json!("updated"))])
            .await
            .unwrap();

        let request = &transport.requests()[1];
        assert_eq!(request.http_method, HttpMethod::Put);
        assert_eq!(request.body, Some(json!({"description": "updated"})));
        assert!(!domain.is_dirty());
        assert_eq!(
            domain.field("description").and_then(FieldValue::as_str),
            Some("updated")
        );
    }

    #[tokio::test]
    async fn test_update_rejects_read_only_field_without_io() {
        let transport = FixtureTransport::new();
        let client = transport.client();
        let mut volume = ApiObject::with_id(&VOLUME, 1, None);

        assert!(matches!(
            client.update(&mut volume, [("size", json!(40))]).await,
            Err(LinodeError::InvalidParameter { operation: "set", .. })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_issues_delete_without_body() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Delete,
            "volumes/1",
            200,
            json!({}),
        );
        let client = transport.client();

        client
            .delete(&ApiObject::with_id(&VOLUME, 1, None))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.http_method, HttpMethod::Delete);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_domain_records_are_nested() {
        let transport = FixtureTransport::new().with_json(
            "domains/12345/records",
            json!({"data": [{"id": 1, "type": "A", "name": "www"}], "pages": 1, "results": 1}),
        );
        let client = transport.client();
        let domain = ApiObject::with_id(&DOMAIN, 12345, None);

        let mut records = client.domain_records(&domain).await.unwrap();
        let record = records.only(&client).await.unwrap();
        assert_eq!(record.parent_id(), Some(&ObjectId::Int(12345)));
        assert_eq!(record.api_path().unwrap(), "domains/12345/records/1");

        let not_a_domain = ApiObject::with_id(&INSTANCE, 1, None);
        assert!(client.domain_records(&not_a_domain).await.is_err());
    }

    #[tokio::test]
    async fn test_image_create_omits_missing_label_and_description() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Post,
            "images",
            200,
            json!({"id": "private/123", "label": "", "type": "manual"}),
        );
        let client = transport.client();

        let image = client.image_create(5, None, Some("backup")).await.unwrap();

        assert_eq!(image.id(), Some(&ObjectId::Str("private/123".to_string())));
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"disk_id": 5, "description": "backup"}))
        );
    }

    #[tokio::test]
    async fn test_domain_create_sets_zone_type() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Post,
            "domains",
            200,
            domain_json(),
        );
        let client = transport.client();

        client
            .domain_create("example.org", false, DomainCreateOptions::default())
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"domain": "example.org", "type": "slave"}))
        );
    }

    #[tokio::test]
    async fn test_volume_create_requires_placement() {
        let transport = FixtureTransport::new();
        let client = transport.client();

        assert!(matches!(
            client
                .volume_create("data", VolumeCreateOptions::default())
                .await,
            Err(LinodeError::InvalidParameter { operation: "volume_create", .. })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_tag_create_posts_normalized_body() {
        let transport = FixtureTransport::new().with_response(
            HttpMethod::Post,
            "tags",
            200,
            json!({"label": "pytest"}),
        );
        let client = transport.client();

        let tag = client
            .tag_create(TagCreate::new("pytest").id(TaggableKind::Domain, 12345))
            .await
            .unwrap();

        assert_eq!(tag.id(), Some(&ObjectId::Str("pytest".to_string())));
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"label": "pytest", "domains": [12345]}))
        );
    }

    #[test]
    fn test_request_body_drops_nulls() {
        let options = VolumeCreateOptions {
            region: Some("us-east".to_string()),
            ..Default::default()
        };
        let body = request_body("volume_create", &options).unwrap();
        assert_eq!(Value::Object(body), json!({"region": "us-east"}));
    }
}
