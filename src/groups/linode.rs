//! The compute group: instances and instance types.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

use crate::client::{request_body, LinodeClient};
use crate::groups::profile::load_public_key;
use crate::objects::resources::{InstanceCreateOptions, INSTANCE, INSTANCE_TYPE};
use crate::objects::{ApiObject, LinodeError, PaginatedList};

/// Length of generated root passwords.
pub const ROOT_PASSWORD_LENGTH: usize = 32;

/// Calls under `/linode`.
#[derive(Clone, Copy, Debug)]
pub struct LinodeGroup<'a> {
    client: &'a LinodeClient,
}

impl<'a> LinodeGroup<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists instances, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn instances(&self, filters: &[(&str, &str)]) -> Result<PaginatedList, LinodeError> {
        self.client.list(&INSTANCE, filters).await
    }

    /// Lists instance types.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn types(&self) -> Result<PaginatedList, LinodeError> {
        self.client.list(&INSTANCE_TYPE, &[]).await
    }

    /// Creates an instance.
    ///
    /// When an image is given without a root password, a random password is
    /// generated and returned alongside the instance. It is not stored
    /// anywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] before any I/O for an empty
    /// type or region or an unusable authorized key.
    pub async fn instance_create(
        &self,
        instance_type: &str,
        region: &str,
        options: InstanceCreateOptions,
    ) -> Result<(ApiObject, Option<String>), LinodeError> {
        if instance_type.trim().is_empty() {
            return Err(LinodeError::invalid("instance_create", "type cannot be empty"));
        }
        if region.trim().is_empty() {
            return Err(LinodeError::invalid("instance_create", "region cannot be empty"));
        }

        let mut options = options;
        let generated = match (&options.image, &options.root_pass) {
            (Some(_), None) => {
                let password = generate_root_password();
                options.root_pass = Some(password.clone());
                Some(password)
            }
            _ => None,
        };
        let mut authorized_keys = Vec::with_capacity(options.authorized_keys.len());
        for key in &options.authorized_keys {
            authorized_keys.push(load_public_key(key).await?);
        }
        options.authorized_keys = authorized_keys;

        let mut body = request_body("instance_create", &options)?;
        body.insert("type".to_string(), Value::from(instance_type));
        body.insert("region".to_string(), Value::from(region));

        tracing::debug!(
            instance_type,
            region,
            generated_password = generated.is_some(),
            "creating instance"
        );
        let instance = self
            .client
            .post_create(&INSTANCE, None, Value::Object(body))
            .await?;
        Ok((instance, generated))
    }
}

/// Generates a random alphanumeric root password.
#[must_use]
pub fn generate_root_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ROOT_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
