//! The Longview group.

use serde_json::{Map, Value};

use crate::client::LinodeClient;
use crate::objects::resources::{LONGVIEW_CLIENT, LONGVIEW_SUBSCRIPTION};
use crate::objects::{ApiObject, LinodeError, PaginatedList};

/// Calls under `/longview`.
#[derive(Clone, Copy, Debug)]
pub struct LongviewGroup<'a> {
    client: &'a LinodeClient,
}

impl<'a> LongviewGroup<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists Longview clients.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn clients(&self) -> Result<PaginatedList, LinodeError> {
        self.client.list(&LONGVIEW_CLIENT, &[]).await
    }

    /// Creates a Longview client. Without a label the API picks one.
    ///
    /// # Errors
    ///
    /// Returns the status errors of the `POST`.
    pub async fn client_create(&self, label: Option<&str>) -> Result<ApiObject, LinodeError> {
        let mut body = Map::new();
        if let Some(label) = label {
            body.insert("label".to_string(), Value::from(label));
        }
        self.client
            .post_create(&LONGVIEW_CLIENT, None, Value::Object(body))
            .await
    }

    /// Lists Longview subscription plans.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn subscriptions(&self) -> Result<PaginatedList, LinodeError> {
        self.client.list(&LONGVIEW_SUBSCRIPTION, &[]).await
    }
}
