//! Integration tests for Folder API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, create_router};
use crate::db::{Database, SqliteDatabase};

async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().unwrap();
    create_router(AppState::new(db))
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn folder_crud_flow() {
    let app = test_app().await;

    // Initially empty
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/folders"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "Work"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Work");

    // Get
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/v1/folders/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": id, "name": "Work"}));

    // Rename
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/folders/{}", id),
            json!({"name": "Office"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Office");

    // Delete
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/v1/folders/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/v1/folders/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await["error"],
        format!("Folder '{}' not found", id)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_folder_missing_name_is_bad_request() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Missing `name` in request body"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_folder_duplicate_name_is_conflict() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "Work"})))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "Work"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_folder_not_found() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/folders/55",
            json!({"name": "Nowhere"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_folder_leaves_notes_without_folder() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/folders", json!({"name": "Work"})))
        .await
        .unwrap();
    let folder_id = json_body(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/notes",
            json!({"title": "Filed", "folder_id": folder_id}),
        ))
        .await
        .unwrap();
    let note_id = json_body(response).await["id"].as_i64().unwrap();

    app.clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/v1/folders/{}", folder_id),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/v1/notes/{}", note_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["folder"], Value::Null);
}
