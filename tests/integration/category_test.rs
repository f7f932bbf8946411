//! Integration tests for category endpoints.

use http::StatusCode;
use serde_json::json;

use catalog_core::traits::{Entity, Repository};

use crate::helpers::TestApp;

const MISSING_ID: &str = "8e65b539-6bdb-42eb-b782-1470846e9cbf";

#[tokio::test]
async fn test_create_category() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "Movie", "description": "some description" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["name"], "Movie");
    assert_eq!(data["description"], "some description");
    assert_eq!(data["is_active"], true);
    assert_eq!(data["id"].as_str().expect("id").len(), 36);
    assert_eq!(app.stored().await, 1);
}

#[tokio::test]
async fn test_create_category_with_blank_name() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/categories", Some(json!({ "name": "  " })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["name"].is_array());
    assert_eq!(app.stored().await, 0);
}

#[tokio::test]
async fn test_get_category() {
    let app = TestApp::new();
    let category = app.seed("Movie", 0).await;

    let response = app
        .request("GET", &format!("/api/categories/{}", category.id()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], category.id().to_string());
    assert_eq!(response.body["data"]["name"], "Movie");
}

#[tokio::test]
async fn test_get_category_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", &format!("/api/categories/{MISSING_ID}"), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(
        response.body["message"],
        format!("Entity not found using id '{MISSING_ID}'")
    );
}

#[tokio::test]
async fn test_get_category_with_malformed_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/categories/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_defaults() {
    let app = TestApp::new();
    app.seed("oldest", 0).await;
    app.seed("middle", 10).await;
    app.seed("newest", 20).await;

    let response = app.request("GET", "/api/categories", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names(), vec!["newest", "middle", "oldest"]);
    let data = &response.body["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["current_page"], 1);
    assert_eq!(data["last_page"], 1);
    assert_eq!(data["per_page"], 15);
}

#[tokio::test]
async fn test_list_with_filter_sort_and_pages() {
    let app = TestApp::new();
    for (i, name) in ["a", "AAA", "AaA", "b", "c"].into_iter().enumerate() {
        app.seed(name, i as i64).await;
    }

    let first = app
        .request(
            "GET",
            "/api/categories?page=1&per_page=2&sort=name&sort_dir=asc&filter=a",
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.names(), vec!["AAA", "AaA"]);
    assert_eq!(first.body["data"]["total"], 3);
    assert_eq!(first.body["data"]["last_page"], 2);

    let second = app
        .request(
            "GET",
            "/api/categories?page=2&per_page=2&sort=name&sort_dir=asc&filter=a",
            None,
        )
        .await;
    assert_eq!(second.names(), vec!["a"]);
    assert_eq!(second.body["data"]["current_page"], 2);
}

#[tokio::test]
async fn test_list_with_malformed_paging_uses_defaults() {
    let app = TestApp::new();
    app.seed("Movie", 0).await;

    let response = app
        .request(
            "GET",
            "/api/categories?page=-3&per_page=lots&sort=&sort_dir=sideways",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.names(), vec!["Movie"]);
    assert_eq!(response.body["data"]["current_page"], 1);
    assert_eq!(response.body["data"]["per_page"], 15);
}

#[tokio::test]
async fn test_update_category() {
    let app = TestApp::new();
    let category = app.seed("Movie", 0).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/categories/{}", category.id()),
            Some(json!({ "name": "Documentary", "description": "real", "is_active": false })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Documentary");
    assert_eq!(response.body["data"]["description"], "real");
    assert_eq!(response.body["data"]["is_active"], false);

    let stored = app
        .store
        .read()
        .await
        .find_by_id(category.id())
        .expect("stored");
    assert_eq!(stored.name(), "Documentary");
    assert!(!stored.is_active());
}

#[tokio::test]
async fn test_update_category_not_found() {
    let app = TestApp::new();
    app.seed("Movie", 0).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/categories/{MISSING_ID}"),
            Some(json!({ "name": "Documentary" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.read().await.items()[0].name(), "Movie");
}

#[tokio::test]
async fn test_delete_category() {
    let app = TestApp::new();
    let keep = app.seed("keep", 0).await;
    let remove = app.seed("remove", 1).await;

    let response = app
        .request("DELETE", &format!("/api/categories/{}", remove.id()), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.stored().await, 1);
    assert_eq!(app.store.read().await.items()[0].id(), keep.id());

    let again = app
        .request("DELETE", &format!("/api/categories/{}", remove.id()), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(app.stored().await, 1);
}

#[tokio::test]
async fn test_create_category_with_bad_body() {
    let app = TestApp::new();

    for body in [json!({}), json!({ "name": 5 }), json!([])] {
        let response = app.request("POST", "/api/categories", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert!(response.body["message"].is_string());
    }
    assert_eq!(app.stored().await, 0);
}

#[tokio::test]
async fn test_update_category_without_name() {
    let app = TestApp::new();
    let category = app.seed("Movie", 0).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/categories/{}", category.id()),
            Some(json!({ "description": "no name" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.store.read().await.items()[0].name(), "Movie");
}
