//! The account group.

use crate::client::LinodeClient;
use crate::objects::resources::{ACCOUNT, ACCOUNT_SETTINGS};
use crate::objects::{ApiObject, LinodeError};

/// Calls under `/account`.
#[derive(Clone, Copy, Debug)]
pub struct AccountGroup<'a> {
    client: &'a LinodeClient,
}

impl<'a> AccountGroup<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Fetches the account.
    ///
    /// # Errors
    ///
    /// Returns any error from the detail fetch.
    pub async fn get(&self) -> Result<ApiObject, LinodeError> {
        self.client.load_singleton(&ACCOUNT).await
    }

    /// Fetches the account settings.
    ///
    /// # Errors
    ///
    /// Returns any error from the detail fetch.
    pub async fn settings(&self) -> Result<ApiObject, LinodeError> {
        self.client.load_singleton(&ACCOUNT_SETTINGS).await
    }
}
