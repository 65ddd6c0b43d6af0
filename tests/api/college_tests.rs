//! College API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::TestApp;

fn mit() -> serde_json::Value {
    json!({ "name": "MIT", "location": "Cambridge", "establishedYear": 1861 })
}

#[tokio::test]
async fn test_create_college_returns_success_envelope() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/colleges", &mit()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.location.as_deref(), Some("/api/v1/colleges/1"));
    assert_eq!(
        response.body,
        json!({
            "status": "success",
            "message": "College created successfully",
            "data": { "name": "MIT", "location": "Cambridge", "establishedYear": 1861 },
            "errors": null
        })
    );
    assert_eq!(app.repository.len(), 1);
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;

    let response = app.get(&format!("/api/v1/colleges/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "College fetched successfully");
    assert_eq!(response.body["data"], mit());
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;
    let uri = format!("/api/v1/colleges/{}", id);

    let first = app.get(&uri).await;
    let second = app.get(&uri).await;

    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;
    let uri = format!("/api/v1/colleges/{}", id);
    let replacement = json!({ "name": "Harvard", "location": "Boston", "establishedYear": 1636 });

    let updated = app.put_json(&uri, &replacement).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["message"], "College updated successfully");
    assert_eq!(updated.body["data"], replacement);

    let fetched = app.get(&uri).await;
    assert_eq!(fetched.body["data"], replacement);
}

#[tokio::test]
async fn test_update_with_missing_fields_stores_null() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;
    let uri = format!("/api/v1/colleges/{}", id);

    app.put_json(&uri, &json!({ "name": "MIT" })).await;

    let fetched = app.get(&uri).await;
    assert_eq!(
        fetched.body["data"],
        json!({ "name": "MIT", "location": null, "establishedYear": null })
    );
}

#[tokio::test]
async fn test_delete_removes_college() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;
    let uri = format!("/api/v1/colleges/{}", id);

    let deleted = app.delete(&uri).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({
            "status": "success",
            "message": "College deleted successfully",
            "data": null,
            "errors": null
        })
    );

    let fetched = app.get(&uri).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_unknown_id_returns_not_found_envelope() {
    let app = TestApp::new();

    let response = app.get("/api/v1/colleges/999999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({
            "status": "error",
            "message": "College not found with id: 999999",
            "data": null,
            "errors": [{ "field": "id", "message": "College not found with id: 999999" }]
        })
    );
}

#[test_case("PUT" ; "update")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_mutating_unknown_id_returns_not_found(method: &str) {
    let app = TestApp::new();
    let uri = "/api/v1/colleges/42";

    let response = match method {
        "PUT" => app.put_json(uri, &mit()).await,
        _ => app.delete(uri).await,
    };

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "error");
    assert!(response.body["data"].is_null());
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_list_returns_all_in_creation_order() {
    let app = TestApp::new();
    for name in ["A", "B", "C"] {
        app.create_college(&json!({ "name": name, "location": "X", "establishedYear": 1900 }))
            .await;
    }

    let response = app.get("/api/v1/colleges").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Colleges fetched successfully");
    let names: Vec<_> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new();

    let response = app.get("/api/v1/colleges").await;

    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/v1/colleges/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "error");
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_raw("/api/v1/colleges", "{ not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "body");
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_wrongly_typed_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/colleges", &json!({ "name": "MIT", "establishedYear": "old" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.repository.is_empty());
}

#[test_case("/api/v2/colleges" ; "unknown version")]
#[test_case("/api/v1/universities" ; "unknown resource")]
#[test_case("/api/v1/colleges/1/campuses" ; "unknown subresource")]
#[tokio::test]
async fn test_unknown_route_returns_not_found_envelope(uri: &str) {
    let app = TestApp::new();

    let response = app.get(uri).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "error");
    assert!(response.body["data"].is_null());
    assert_eq!(response.body["errors"][0]["field"], "path");
}

#[tokio::test]
async fn test_unsupported_method_returns_envelope() {
    let app = TestApp::new();
    let id = app.create_college(&mit()).await;

    let response = app
        .request("PATCH", &format!("/api/v1/colleges/{}", id))
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["status"], "error");
    assert!(response.body["data"].is_null());
    assert_eq!(
        response.body["message"],
        format!("Method PATCH not allowed for /api/v1/colleges/{}", id)
    );
}
