//! Integration tests for the resource groups.

mod common;

use std::io::Write;

use chrono::NaiveDate;
use common::{client_for, fixture, mount_get, mount_post, sent_body};
use linode_api::objects::resources::{InstanceCreateOptions, LONGVIEW_SUBSCRIPTION};
use linode_api::objects::{FieldValue, FormatError, ObjectId};
use linode_api::{ApiObject, LinodeError};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn str_field<'a>(object: &'a ApiObject, name: &str) -> Option<&'a str> {
    object.field(name).and_then(FieldValue::as_str)
}

fn public_key() -> String {
    fixture("sshkey_72")["ssh_key"]
        .as_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
async fn test_get_account() {
    let server = MockServer::start().await;
    mount_get(&server, "account", "account").await;
    let client = client_for(&server);

    let account = assert_ok!(client.account().get().await);

    assert!(account.is_populated());
    assert_eq!(str_field(&account, "first_name"), Some("Test"));
    assert_eq!(str_field(&account, "last_name"), Some("Guy"));
    assert_eq!(str_field(&account, "email"), Some("support@linode.com"));
    assert_eq!(str_field(&account, "phone"), Some("123-456-7890"));
    assert_eq!(str_field(&account, "company"), Some("Linode"));
    assert_eq!(str_field(&account, "address_1"), Some("3rd & Arch St"));
    assert_eq!(str_field(&account, "address_2"), Some(""));
    assert_eq!(str_field(&account, "city"), Some("Philadelphia"));
    assert_eq!(str_field(&account, "state"), Some("PA"));
    assert_eq!(str_field(&account, "country"), Some("US"));
    assert_eq!(str_field(&account, "zip"), Some("19106"));
    assert_eq!(str_field(&account, "tax_id"), Some(""));
    assert_eq!(account.field("balance").and_then(FieldValue::as_f64), Some(0.0));
}

#[tokio::test]
async fn test_get_settings() {
    let server = MockServer::start().await;
    mount_get(&server, "account/settings", "account_settings").await;
    let client = client_for(&server);

    let settings = assert_ok!(client.account().settings().await);

    assert!(settings.is_populated());
    assert_eq!(settings.field("network_helper").and_then(FieldValue::as_bool), Some(false));
    assert_eq!(settings.field("managed").and_then(FieldValue::as_bool), Some(false));

    let subscription = settings
        .field("longview_subscription")
        .and_then(FieldValue::as_object)
        .unwrap();
    assert_eq!(subscription.schema().name, LONGVIEW_SUBSCRIPTION.name);
    assert_eq!(
        subscription.id(),
        Some(&ObjectId::Str("longview-100".to_string()))
    );
}

#[tokio::test]
async fn test_get_account_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/account"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = assert_err!(client.account().get().await);

    assert!(matches!(
        err,
        LinodeError::Format(FormatError::NotJson { resource: "Account", .. })
    ));
}

// ============================================================================
// Linode
// ============================================================================

#[tokio::test]
async fn test_instance_create() {
    let server = MockServer::start().await;
    mount_post(&server, "linode/instances", fixture("instance_123")).await;
    let client = client_for(&server);

    let (instance, password) = assert_ok!(
        client
            .linode()
            .instance_create("g5-standard-1", "us-east-1a", InstanceCreateOptions::default())
            .await
    );

    assert_eq!(instance.id(), Some(&ObjectId::Int(123)));
    assert!(password.is_none());
    assert_eq!(
        sent_body(&server, "linode/instances").await,
        json!({"region": "us-east-1a", "type": "g5-standard-1"})
    );
}

#[tokio::test]
async fn test_instance_create_with_image() {
    let server = MockServer::start().await;
    mount_post(&server, "linode/instances", fixture("instance_123")).await;
    let client = client_for(&server);
    let options = InstanceCreateOptions {
        image: Some("linode/debian9".to_string()),
        ..Default::default()
    };

    let (instance, password) = assert_ok!(
        client
            .linode()
            .instance_create("g5-standard-1", "us-east-1a", options)
            .await
    );

    assert_eq!(instance.id(), Some(&ObjectId::Int(123)));
    let password = password.unwrap();
    assert_eq!(
        sent_body(&server, "linode/instances").await,
        json!({
            "region": "us-east-1a",
            "type": "g5-standard-1",
            "image": "linode/debian9",
            "root_pass": password
        })
    );
}

#[tokio::test]
async fn test_instance_create_reads_authorized_key_files() {
    let server = MockServer::start().await;
    mount_post(&server, "linode/instances", fixture("instance_123")).await;
    let client = client_for(&server);

    let mut key_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(key_file, "{}", public_key()).unwrap();
    let options = InstanceCreateOptions {
        authorized_keys: vec![key_file.path().to_string_lossy().into_owned()],
        ..Default::default()
    };

    assert_ok!(
        client
            .linode()
            .instance_create("g5-standard-1", "us-east-1a", options)
            .await
    );

    let body = sent_body(&server, "linode/instances").await;
    assert_eq!(body["authorized_keys"], json!([public_key()]));
}

#[tokio::test]
async fn test_get_types() {
    let server = MockServer::start().await;
    mount_get(&server, "linode/types", "types").await;
    let client = client_for(&server);

    let mut types = assert_ok!(client.linode().types().await);

    assert_eq!(types.len(), 2);
    let standard = assert_ok!(types.first(&client).await);
    assert_eq!(standard.id(), Some(&ObjectId::Str("g5-standard-1".to_string())));
    assert_eq!(standard.field("memory").and_then(FieldValue::as_i64), Some(2048));
}

// ============================================================================
// Longview
// ============================================================================

#[tokio::test]
async fn test_get_clients() {
    let server = MockServer::start().await;
    mount_get(&server, "longview/clients", "longview_clients").await;
    let client = client_for(&server);

    let mut clients = assert_ok!(client.longview().clients().await);

    assert_eq!(clients.len(), 2);
    let all = assert_ok!(clients.to_vec(&client).await);
    assert_eq!(str_field(&all[0], "label"), Some("test_client_1"));
    assert_eq!(all[0].id(), Some(&ObjectId::Int(1234)));
    assert_eq!(str_field(&all[1], "label"), Some("longview5678"));
    assert_eq!(all[1].id(), Some(&ObjectId::Int(5678)));
}

#[tokio::test]
async fn test_client_create() {
    let server = MockServer::start().await;
    mount_post(&server, "longview/clients", fixture("longview_client_5678")).await;
    let client = client_for(&server);

    let created = assert_ok!(client.longview().client_create(None).await);

    assert_eq!(created.id(), Some(&ObjectId::Int(5678)));
    assert_eq!(str_field(&created, "label"), Some("longview5678"));
    assert_eq!(sent_body(&server, "longview/clients").await, json!({}));
}

#[tokio::test]
async fn test_get_subscriptions() {
    let server = MockServer::start().await;
    mount_get(&server, "longview/subscriptions", "longview_subscriptions").await;
    let client = client_for(&server);

    let mut subscriptions = assert_ok!(client.longview().subscriptions().await);
    assert_eq!(subscriptions.len(), 4);

    let expected = [
        ("longview-10", "Longview Pro 10 pack"),
        ("longview-100", "Longview Pro 100 pack"),
        ("longview-3", "Longview Pro 3 pack"),
        ("longview-40", "Longview Pro 40 pack"),
    ];
    let all = assert_ok!(subscriptions.to_vec(&client).await);
    for (subscription, (id, label)) in all.iter().zip(expected) {
        assert_eq!(subscription.id(), Some(&ObjectId::Str(id.to_string())));
        assert_eq!(str_field(subscription, "label"), Some(label));
    }
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_get_sshkeys() {
    let server = MockServer::start().await;
    mount_get(&server, "profile/sshkeys", "sshkeys").await;
    let client = client_for(&server);

    let mut keys = assert_ok!(client.profile().ssh_keys().await);
    assert_eq!(keys.len(), 2);

    let key = assert_ok!(keys.first(&client).await);
    assert_eq!(key.id(), Some(&ObjectId::Int(22)));
    assert_eq!(str_field(key, "label"), Some("Home Ubuntu PC"));
    assert_eq!(
        key.field("created").and_then(FieldValue::as_datetime),
        Some(
            &NaiveDate::from_ymd_opt(2018, 9, 14)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap()
        )
    );
    assert_eq!(str_field(key, "ssh_key"), Some(public_key().as_str()));
}

#[tokio::test]
async fn test_ssh_key_upload() {
    let server = MockServer::start().await;
    mount_post(&server, "profile/sshkeys", fixture("sshkey_72")).await;
    let client = client_for(&server);

    let key = assert_ok!(
        client
            .profile()
            .ssh_key_upload(&public_key(), Some("Work Laptop"))
            .await
    );

    assert_eq!(key.id(), Some(&ObjectId::Int(72)));
    assert_eq!(str_field(&key, "label"), Some("Work Laptop"));
    assert_eq!(
        sent_body(&server, "profile/sshkeys").await,
        json!({"ssh_key": public_key(), "label": "Work Laptop"})
    );
}

#[tokio::test]
async fn test_ssh_key_upload_rejects_garbage_without_io() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = assert_err!(client.profile().ssh_key_upload("not a key", None).await);

    assert!(matches!(err, LinodeError::InvalidParameter { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
