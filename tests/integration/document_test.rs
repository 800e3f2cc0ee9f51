//! Integration tests for the document resource.

mod helpers;

use chrono::{TimeZone, Utc};
use serde_json::json;

use qilin_sdk::qilin_core::types::HttpMethod;
use qilin_sdk::qilin_entity::DocumentResponse;
use qilin_sdk::{Document, ErrorKind, Persistable, ResourceId};

#[test]
fn test_fresh_document() {
    let before = Utc::now();
    let doc = Document::new();

    assert!(doc.id().is_none());
    assert!(doc.client().is_none());
    assert!(doc.versions().is_empty());
    assert!(doc.created_at() >= before);
    assert!(doc.updated_at() >= before);
}

#[test]
fn test_hydrated_document() {
    let response: DocumentResponse =
        serde_json::from_value(helpers::document_json(1, 0)).expect("document response");
    let doc = Document::from_response(response, None);

    assert_eq!(doc.id(), Some(ResourceId(1)));
    assert_eq!(
        doc.created_at(),
        Utc.with_ymd_and_hms(2019, 4, 5, 10, 0, 0).unwrap()
    );
    assert_eq!(
        doc.updated_at(),
        Utc.with_ymd_and_hms(2019, 4, 6, 11, 0, 0).unwrap()
    );
    assert!(doc.client().is_none());
    assert_eq!(doc.versions().len(), 0);
}

#[test]
fn test_versions_keep_backend_order() {
    let response: DocumentResponse =
        serde_json::from_value(helpers::document_json(2, 3)).expect("document response");
    let doc = Document::from_response(response, None);

    let ids: Vec<u64> = doc
        .versions()
        .iter()
        .filter_map(|v| v.as_value()["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_path_is_constant() {
    assert_eq!(Document::new().path(), "documents");
}

#[tokio::test]
async fn test_save_and_destroy_without_client() {
    let doc = Document::new();

    assert_eq!(doc.save().await.unwrap_err().kind, ErrorKind::Configuration);
    assert_eq!(doc.destroy().await.unwrap_err().kind, ErrorKind::Configuration);
}

#[tokio::test]
async fn test_create_sends_empty_object() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    ctx.transport.reply_json(201, helpers::document_json(11, 1));

    let doc = Document::new().with_client(ctx.client.clone());
    let response = doc.save().await.expect("save");

    assert_eq!(response.data.id, ResourceId(11));
    assert_eq!(response.data.document_versions.len(), 1);

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "http://localhost:3000/documents");
    assert_eq!(requests[0].data, Some(json!({})));
}

#[tokio::test]
async fn test_destroy_decodes_reply() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    ctx.transport.reply_json(200, helpers::document_json(11, 0));

    let mut doc = Document::new().with_client(ctx.client.clone());
    doc.set_id(Some(ResourceId(11)));
    let response = doc.destroy().await.expect("destroy");

    assert_eq!(response.data.map(|d| d.id), Some(ResourceId(11)));
    assert_eq!(ctx.transport.requests()[0].url, "http://localhost:3000/documents/11");
}

#[tokio::test]
async fn test_destroy_unsaved_document_is_state_error() {
    let ctx = helpers::TestClient::new("http://localhost:3000");
    let doc = Document::new().with_client(ctx.client.clone());

    assert_eq!(doc.destroy().await.unwrap_err().kind, ErrorKind::State);
    assert!(ctx.transport.requests().is_empty());
}
