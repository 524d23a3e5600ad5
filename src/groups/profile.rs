//! The profile group and SSH public key loading.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::client::LinodeClient;
use crate::objects::resources::SSH_KEY;
use crate::objects::{ApiObject, LinodeError, PaginatedList};

/// Key type prefixes accepted as inline public keys.
pub const SSH_KEY_PREFIXES: &[&str] = &[
    "ssh-dss",
    "ssh-rsa",
    "ssh-ed25519",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
];

/// Calls under `/profile`.
#[derive(Clone, Copy, Debug)]
pub struct ProfileGroup<'a> {
    client: &'a LinodeClient,
}

impl<'a> ProfileGroup<'a> {
    pub(crate) const fn new(client: &'a LinodeClient) -> Self {
        Self { client }
    }

    /// Lists the SSH keys stored on the profile.
    ///
    /// # Errors
    ///
    /// Returns any error from fetching the first page.
    pub async fn ssh_keys(&self) -> Result<PaginatedList, LinodeError> {
        self.client.list(&SSH_KEY, &[]).await
    }

    /// Uploads a public key. `key` may be the key itself or a path to a
    /// public key file.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] before any I/O if `key` is
    /// neither a public key nor a readable file containing one.
    pub async fn ssh_key_upload(
        &self,
        key: &str,
        label: Option<&str>,
    ) -> Result<ApiObject, LinodeError> {
        let key = load_public_key(key).await?;

        let mut body = Map::new();
        body.insert("ssh_key".to_string(), Value::from(key));
        if let Some(label) = label {
            body.insert("label".to_string(), Value::from(label));
        }
        self.client
            .post_create(&SSH_KEY, None, Value::Object(body))
            .await
    }
}

/// Resolves a public key given inline or as a file path.
///
/// A value starting with a known key type is returned trimmed. Anything
/// else is read as a path, with a leading `~` expanded to the home
/// directory, and the file content must itself be a public key. The file
/// is read through `tokio::fs`.
///
/// # Example
///
/// ```rust
/// use linode_api::groups::load_public_key;
///
/// tokio_test::block_on(async {
///     let key = load_public_key("ssh-ed25519 AAAAC3Nza user@host\n").await.unwrap();
///     assert_eq!(key, "ssh-ed25519 AAAAC3Nza user@host");
///
///     assert!(load_public_key("not-a-key-or-a-file").await.is_err());
/// });
/// ```
///
/// # Errors
///
/// Returns [`LinodeError::InvalidParameter`] if the file cannot be read or
/// does not contain a public key.
pub async fn load_public_key(key: &str) -> Result<String, LinodeError> {
    let trimmed = key.trim();
    if is_public_key(trimmed) {
        return Ok(trimmed.to_string());
    }

    let path = expand_home(trimmed);
    let content = tokio::fs::read_to_string(&path).await.map_err(|_| {
        LinodeError::invalid(
            "load_public_key",
            format!("'{trimmed}' is not a public key or a readable key file"),
        )
    })?;

    let content = content.trim();
    if is_public_key(content) {
        Ok(content.to_string())
    } else {
        Err(LinodeError::invalid(
            "load_public_key",
            format!("{} does not contain a public key", path.display()),
        ))
    }
}

fn is_public_key(value: &str) -> bool {
    SSH_KEY_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}
