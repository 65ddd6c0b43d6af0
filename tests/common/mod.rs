//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use college_api::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use college_api::infrastructure::repositories::InMemoryCollegeRepository;
use college_api::startup::{build_router, AppState};

/// Test application backed by the in-memory repository
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryCollegeRepository>,
}

/// Status, headers and parsed JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryCollegeRepository::new());
        let state = AppState::new(repository.clone(), test_settings());

        Self {
            router: build_router(state),
            repository,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Send a bodyless request with any method
    pub async fn request(&self, method: &str, uri: &str) -> TestResponse {
        self.send(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    /// Send a request with a raw (possibly malformed) JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    /// Create a college and return the id from the `Location` header
    pub async fn create_college(&self, body: &Value) -> i64 {
        let response = self.post_json("/api/v1/colleges", body).await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .location
            .as_deref()
            .and_then(|l| l.rsplit('/').next())
            .and_then(|id| id.parse().ok())
            .expect("create response carries a Location header with the id")
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        into_test_response(response).await
    }
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn into_test_response(response: Response) -> TestResponse {
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        location,
        body,
    }
}

/// Settings for tests; the database section is unused by the in-memory store
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 1,
            run_migrations: false,
        },
        cors: CorsSettings {
            allowed_origins: vec!["http://localhost:3000".into()],
        },
        environment: "test".into(),
    }
}
