//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::router::build_router;
use catalog_api::state::{AppState, CategoryStore};
use catalog_core::config::AppConfig;
use catalog_core::traits::Repository;
use catalog_entity::{Category, NewCategory};
use catalog_service::{SharedRepository, share};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Category store behind the router, for seeding and inspection
    pub store: SharedRepository<CategoryStore>,
    /// Base time for seeded categories
    pub epoch: DateTime<Utc>,
}

impl TestApp {
    /// Create a new test application over an empty store
    pub fn new() -> Self {
        let store = share(CategoryStore::empty());
        let router = build_router(AppState::new(AppConfig::default(), store.clone()));
        Self {
            router,
            store,
            epoch: Utc::now(),
        }
    }

    /// Insert a category created `seconds` after the epoch and return it
    pub async fn seed(&self, name: &str, seconds: i64) -> Category {
        let category = Category::new(
            NewCategory::named(name).created_at(self.epoch + Duration::seconds(seconds)),
        )
        .expect("Invalid seed category");
        self.store
            .write()
            .await
            .insert(category.clone())
            .expect("Failed to seed category");
        category
    }

    /// Number of stored categories
    pub async fn stored(&self) -> usize {
        self.store.read().await.items().len()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Names of the categories in a list response, in order
    pub fn names(&self) -> Vec<&str> {
        self.body["data"]["items"]
            .as_array()
            .expect("items array")
            .iter()
            .map(|item| item["name"].as_str().expect("name"))
            .collect()
    }
}
