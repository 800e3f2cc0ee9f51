//! End-to-end tests of the reqwest transport against an in-process server.

mod helpers;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post, put};
use axum::Json;
use parking_lot::Mutex;
use serde_json::{Value, json};

use qilin_sdk::{
    BearerToken, Document, ErrorKind, Folder, Persistable, QilinClient, ResourceId,
};

/// Requests seen by the test server: method, path, authorization header, body.
type Seen = Arc<Mutex<Vec<(String, String, Option<String>, Value)>>>;

fn record(seen: &Seen, method: &str, path: String, headers: &HeaderMap, body: Value) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().push((method.to_string(), path, auth, body));
}

async fn create_folder(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&seen, "POST", "/api/folders".to_string(), &headers, body.clone());
    let name = body["attrs"]["name"].as_str().unwrap_or("Untitled");
    let mut folder = helpers::folder_json(42, name);
    folder["children"] = json!([helpers::folder_json(43, "Child")]);
    (StatusCode::CREATED, Json(folder)).into_response()
}

async fn update_folder(
    State(seen): State<Seen>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&seen, "PUT", format!("/api/folders/{id}"), &headers, body.clone());
    let name = body["attrs"]["name"].as_str().unwrap_or("Unchanged");
    Json(helpers::folder_json(id, name)).into_response()
}

async fn delete_folder(
    State(seen): State<Seen>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    record(&seen, "DELETE", format!("/api/folders/{id}"), &headers, Value::Null);
    if id == 404 {
        (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn delete_document(
    State(seen): State<Seen>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    record(&seen, "DELETE", format!("/api/documents/{id}"), &headers, Value::Null);
    Json(helpers::document_json(id, 2)).into_response()
}

/// Start the test server and return its API endpoint.
async fn spawn_server() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/api/folders", post(create_folder))
        .route("/api/folders/{id}", put(update_folder).delete(delete_folder))
        .route("/api/documents/{id}", delete(delete_document))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    (format!("http://{addr}/api"), seen)
}

fn client(endpoint: &str) -> Arc<QilinClient> {
    Arc::new(
        QilinClient::builder(endpoint)
            .auth(BearerToken::new("integration"))
            .build()
            .expect("client"),
    )
}

#[tokio::test]
async fn test_create_folder_over_http() {
    let (endpoint, seen) = spawn_server().await;

    let mut folder = Folder::new().with_client(client(&endpoint));
    folder.set_name("Quarterly");
    let response = folder.save().await.expect("save");

    assert_eq!(response.status, 201);
    assert_eq!(response.data.id, ResourceId(42));
    assert_eq!(response.data.name, "Quarterly");
    assert!(
        response
            .headers
            .get("content-type")
            .is_some_and(|ct| ct.starts_with("application/json"))
    );

    folder.hydrate(response.data);
    assert_eq!(folder.child_count(), 1);

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "POST");
    assert_eq!(seen[0].2.as_deref(), Some("Bearer integration"));
    assert_eq!(seen[0].3, json!({"attrs": {"name": "Quarterly"}}));
}

#[tokio::test]
async fn test_update_folder_over_http() {
    let (endpoint, seen) = spawn_server().await;

    let mut folder = Folder::new().with_client(client(&endpoint));
    folder.set_id(Some(ResourceId(7)));
    folder.set_name("Renamed");
    let response = folder.save().await.expect("save");

    assert_eq!(response.status, 200);
    assert_eq!(response.data.id, ResourceId(7));
    assert_eq!(seen.lock()[0].1, "/api/folders/7");
}

#[tokio::test]
async fn test_delete_with_empty_reply() {
    let (endpoint, _) = spawn_server().await;

    let mut folder = Folder::new().with_client(client(&endpoint));
    folder.set_id(Some(ResourceId(8)));
    let response = folder.destroy().await.expect("destroy");

    assert_eq!(response.status, 204);
    assert!(response.data.is_none());
    assert_eq!(folder.id(), Some(ResourceId(8)));
}

#[tokio::test]
async fn test_delete_document_with_body() {
    let (endpoint, _) = spawn_server().await;

    let mut doc = Document::new().with_client(client(&endpoint));
    doc.set_id(Some(ResourceId(5)));
    let response = doc.destroy().await.expect("destroy");

    let data = response.data.expect("document body");
    assert_eq!(data.id, ResourceId(5));
    assert_eq!(data.document_versions.len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let (endpoint, _) = spawn_server().await;

    let mut folder = Folder::new().with_client(client(&endpoint));
    folder.set_id(Some(ResourceId(404)));
    let err = folder.destroy().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(err.status, Some(404));
    assert!(err.message.contains(r#"{"error":"not found"}"#));
}

#[tokio::test]
async fn test_unknown_route_is_transport_error() {
    let (endpoint, _) = spawn_server().await;

    let doc = Document::new().with_client(client(&endpoint));
    let err = doc.save().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status, Some(404));
}
