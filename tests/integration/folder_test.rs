//! Integration tests for the folder resource.

mod helpers;

use chrono::{TimeZone, Utc};
use serde_json::json;

use qilin_sdk::qilin_core::types::HttpMethod;
use qilin_sdk::{ErrorKind, Folder, FolderResponse, Persistable, ResourceId};

fn hydrate(value: serde_json::Value) -> Folder {
    let response: FolderResponse = serde_json::from_value(value).expect("folder response");
    Folder::from_response(response, None)
}

#[test]
fn test_fresh_folder() {
    let before = Utc::now();
    let folder = Folder::new();
    let after = Utc::now();

    assert!(folder.id().is_none());
    assert!(folder.name().is_none());
    assert!(folder.client().is_none());
    assert!(folder.parent().is_none());
    assert!(folder.children().is_empty());
    assert!(folder.documents().is_empty());
    assert!(folder.created_at() >= before && folder.created_at() <= after);
    assert!(folder.updated_at() >= before && folder.updated_at() <= after);
}

#[test]
fn test_hydrated_folder_fields() {
    let folder = hydrate(helpers::folder_json(1, "Test Folder"));

    assert_eq!(folder.id(), Some(ResourceId(1)));
    assert_eq!(folder.name(), Some("Test Folder"));
    assert_eq!(
        folder.created_at(),
        Utc.with_ymd_and_hms(2019, 4, 5, 10, 0, 0).unwrap()
    );
    assert_eq!(
        folder.updated_at(),
        Utc.with_ymd_and_hms(2019, 4, 6, 11, 0, 0).unwrap()
    );
    assert!(folder.client().is_none());
}

#[test]
fn test_hydrated_folder_neighbourhood() {
    let folder = hydrate(helpers::nested_folder_json());

    assert_eq!(folder.parent().and_then(Folder::name), Some("Parent Folder"));
    assert_eq!(folder.children().len(), 2);
    assert_eq!(folder.documents().len(), 1);
    assert_eq!(folder.children()[1].id(), Some(ResourceId(3)));
    assert_eq!(folder.documents()[0].id(), Some(ResourceId(1)));
    assert!(!folder.is_root());
}

#[test]
fn test_nested_objects_do_not_get_the_client() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    let response: FolderResponse =
        serde_json::from_value(helpers::nested_folder_json()).expect("folder response");
    let folder = Folder::from_response(response, Some(ctx.client.clone()));

    assert!(folder.client().is_some());
    assert!(folder.parent().and_then(Folder::client).is_none());
    assert!(folder.children().iter().all(|c| c.client().is_none()));
    assert!(folder.documents().iter().all(|d| d.client().is_none()));
}

#[test]
fn test_setters() {
    let mut folder = Folder::new();
    let created = Utc.with_ymd_and_hms(2019, 4, 5, 10, 0, 0).unwrap();
    let updated = Utc.with_ymd_and_hms(2019, 4, 6, 11, 0, 0).unwrap();

    folder.set_name("Test Folder");
    folder.set_created_at(created);
    folder.set_updated_at(updated);

    assert_eq!(folder.name(), Some("Test Folder"));
    assert_eq!(folder.created_at(), created);
    assert_eq!(folder.updated_at(), updated);
    assert!(folder.client().is_none());
}

#[test]
fn test_path_is_constant() {
    assert_eq!(Folder::new().path(), "folders");
    assert_eq!(hydrate(helpers::nested_folder_json()).path(), "folders");
}

#[tokio::test]
async fn test_save_and_destroy_without_client() {
    let folder = Folder::new();

    let err = folder.save().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);

    let err = folder.destroy().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[tokio::test]
async fn test_create_posts_payload() {
    let ctx = helpers::TestClient::new("http://localhost:3000/api");
    ctx.transport.reply_json(201, helpers::folder_json(7, "Reports"));

    let mut folder = Folder::new().with_client(ctx.client.clone());
    folder.set_name("Reports");
    let mut parent = Folder::new();
    parent.set_id(Some(ResourceId(4)));
    folder.set_parent(Some(parent));

    let response = folder.save().await.expect("save");

    assert_eq!(response.status, 201);
    assert_eq!(response.data.id, ResourceId(7));
    assert!(folder.id().is_none(), "save must not assign the id itself");

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "http://localhost:3000/api/folders");
    assert_eq!(
        requests[0].data,
        Some(json!({"attrs": {"name": "Reports"}, "parent": 4}))
    );

    folder.hydrate(response.data);
    assert_eq!(folder.id(), Some(ResourceId(7)));
    assert!(folder.client().is_some());
}

#[tokio::test]
async fn test_update_puts_to_id_url() {
    let ctx = helpers::TestClient::new("http://localhost:3000/api");
    ctx.transport.reply_json(200, helpers::folder_json(1, "Renamed"));

    let response: FolderResponse =
        serde_json::from_value(helpers::nested_folder_json()).expect("folder response");
    let mut folder = Folder::from_response(response, Some(ctx.client.clone()));
    folder.set_name("Renamed");

    let response = folder.save().await.expect("save");
    assert_eq!(response.data.name, "Renamed");

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Put);
    assert_eq!(requests[0].url, "http://localhost:3000/api/folders/1");
    assert_eq!(
        requests[0].data,
        Some(json!({
            "attrs": {"name": "Renamed"},
            "parent": 4,
            "children": [{"id": 2}, {"id": 3}]
        }))
    );
}

#[tokio::test]
async fn test_save_with_moves_to_root() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    ctx.transport.reply_json(200, helpers::folder_json(5, "Moved"));

    let mut folder = Folder::new().with_client(ctx.client.clone());
    folder.set_id(Some(ResourceId(5)));
    let mut payload = folder.save_payload();
    payload.parent = Some(None);

    folder.save_with(&payload).await.expect("save");

    assert_eq!(
        ctx.transport.requests()[0].data,
        Some(json!({"parent": null}))
    );
}

#[tokio::test]
async fn test_destroy_keeps_local_id() {
    let ctx = helpers::TestClient::new("http://localhost:3000");

    let mut folder = Folder::new().with_client(ctx.client.clone());
    folder.set_id(Some(ResourceId(9)));

    let response = folder.destroy().await.expect("destroy");

    assert_eq!(response.status, 204);
    assert!(response.data.is_none());
    assert_eq!(folder.id(), Some(ResourceId(9)));
    let requests = ctx.transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[0].url, "http://localhost:3000/folders/9");
}

#[tokio::test]
async fn test_destroy_unsaved_folder_is_state_error() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    let folder = Folder::new().with_client(ctx.client.clone());

    let err = folder.destroy().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::State);
    assert!(ctx.transport.requests().is_empty());
}
