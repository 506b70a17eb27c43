//! Integration tests for API endpoints.
//!
//! Each test builds the full router over a fresh in-memory database and
//! drives it with `tower::ServiceExt::oneshot`.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use tokio::time::timeout;

use classroom_api::Session;
use common::{app_over, delete, get, post, post_raw, put, test_app, test_database};

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn create_user_assigns_first_identity() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Ann", "email": "a@x.com", "job": "eng" })
    );
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/users/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn collection_served_with_and_without_trailing_slash() {
    let app = test_app().await;
    post(
        &app,
        "/users",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;
    post(
        &app,
        "/users/",
        json!({ "name": "Bo", "email": "b@x.com", "job": "ops" }),
    )
    .await;

    let (status, with_slash) = get(&app, "/users/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, without_slash) = get(&app, "/users").await;
    assert_eq!(with_slash, without_slash);

    let names: Vec<&str> = with_slash
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Bo"]);
}

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let app = test_app().await;

    let (status, body) = get(&app, "/products/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn user_update_touches_only_present_fields() {
    let app = test_app().await;
    post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    let (status, body) = put(&app, "/users/1", json!({ "job": "manager" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Ann", "email": "a@x.com", "job": "manager" })
    );

    let (_, fetched) = get(&app, "/users/1").await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn empty_update_returns_record_unchanged() {
    let app = test_app().await;
    let (_, created) = post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    let (status, body) = put(&app, "/users/1", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn updating_missing_user_is_not_found() {
    let app = test_app().await;

    let (status, body) = put(&app, "/users/7", json!({ "name": "Ghost" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
}

#[tokio::test]
async fn delete_user_then_second_delete_is_not_found() {
    let app = test_app().await;
    post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    let (status, body) = delete(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = delete(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identities_are_not_reused_across_entities() {
    let app = test_app().await;
    post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    let (_, product) = post(&app, "/products/", json!({ "name": "Pen", "price": 1.5 })).await;

    // Each table keeps its own sequence
    assert_eq!(product["id"], 1);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn malformed_email_is_rejected_with_field_location() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "not-an-email", "job": "eng" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "email"]));
    assert_eq!(body["detail"][0]["type"], "email");

    let (_, users) = get(&app, "/users/").await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = test_app().await;

    let (status, body) = post(&app, "/users/", json!({ "name": "Ann", "email": "a@x.com" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "detail": [
            { "loc": ["body", "job"], "msg": "Field required", "type": "missing" }
        ] })
    );
}

#[tokio::test]
async fn every_missing_field_is_listed() {
    let app = test_app().await;

    let (status, body) = post(&app, "/users/", json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let locs: Vec<&serde_json::Value> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| &e["loc"])
        .collect();
    assert_eq!(
        locs,
        vec![
            &json!(["body", "name"]),
            &json!(["body", "email"]),
            &json!(["body", "job"]),
        ]
    );
}

#[tokio::test]
async fn wrong_type_is_rejected_at_its_field() {
    let app = test_app().await;

    let (status, body) = post(&app, "/products/", json!({ "name": "Pen", "price": "cheap" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "price"]));
    assert_eq!(body["detail"][0]["type"], "invalid_type");
}

#[tokio::test]
async fn null_for_non_nullable_column_is_rejected() {
    let app = test_app().await;
    post(
        &app,
        "/users/",
        json!({ "name": "Ann", "email": "a@x.com", "job": "eng" }),
    )
    .await;

    let (status, body) = put(&app, "/users/1", json!({ "name": null })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));

    let (_, user) = get(&app, "/users/1").await;
    assert_eq!(user["name"], "Ann");
}

#[tokio::test]
async fn unparseable_body_is_rejected() {
    let app = test_app().await;

    let (status, body) = post_raw(&app, "/users/", "{not json").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn non_integer_identity_is_rejected() {
    let app = test_app().await;

    let (status, body) = get(&app, "/users/abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path"]));
}

#[tokio::test]
async fn malformed_requests_do_not_wait_for_a_connection() {
    let database = test_database().await;
    let app = app_over(database.clone());

    // Occupies the only pooled connection
    let held = Session::begin(database.connection()).await.unwrap();

    let limit = Duration::from_secs(2);

    let (status, _) = timeout(limit, get(&app, "/users/abc")).await.unwrap();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = timeout(limit, put(&app, "/products/abc", json!({ "price": 1.0 })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = timeout(limit, post(&app, "/users/", json!({ "name": "Ann" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    drop(held);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn price_only_update_keeps_name_and_description() {
    let app = test_app().await;
    post(
        &app,
        "/products/",
        json!({ "name": "Notebook", "description": "A5", "price": 4.5 }),
    )
    .await;

    let (status, body) = put(&app, "/products/1", json!({ "price": 9.99 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Notebook", "description": "A5", "price": 9.99 })
    );
}

#[tokio::test]
async fn explicit_null_clears_description() {
    let app = test_app().await;
    post(
        &app,
        "/products/",
        json!({ "name": "Notebook", "description": "A5", "price": 4.5 }),
    )
    .await;

    let (status, body) = put(&app, "/products/1", json!({ "description": null })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["description"].is_null());
    assert_eq!(body["name"], "Notebook");
}

#[tokio::test]
async fn product_without_description_serializes_null() {
    let app = test_app().await;

    let (status, body) = post(&app, "/products/", json!({ "name": "Pen", "price": 1.25 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Pen", "description": null, "price": 1.25 })
    );
}

#[tokio::test]
async fn deleted_product_is_gone() {
    let app = test_app().await;
    post(&app, "/products/", json!({ "name": "Pen", "price": 1.25 })).await;

    let (status, _) = delete(&app, "/products/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/products/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Product not found" }));
}

// =============================================================================
// Service routes
// =============================================================================

#[tokio::test]
async fn root_and_health() {
    let app = test_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Hello": "World" }));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
    assert!(body["components"]["schemas"]["Product"].is_object());
}
