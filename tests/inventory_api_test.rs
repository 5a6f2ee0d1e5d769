mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_inventory_item() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/inventory",
            Some(json!({"sku": "FUR001", "name": "Wooden Chair", "quantity": 30})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sku"], "FUR001");
    assert_eq!(body["name"], "Wooden Chair");
    assert_eq!(body["quantity"], 30);

    let (status, body) = app
        .request_json(Method::GET, "/inventory/FUR001", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 30);
}

#[tokio::test]
async fn sku_is_normalized_on_create_and_lookup() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/inventory",
            Some(json!({"sku": "  fur002 ", "name": "Office Chair", "quantity": 5})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sku"], "FUR002");

    // Lowercase lookup resolves to the same row
    let (status, body) = app
        .request_json(Method::GET, "/inventory/fur002", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sku"], "FUR002");
}

#[tokio::test]
async fn duplicate_sku_returns_conflict() {
    let app = TestApp::new().await;
    app.seed_item("FUR003", "Recliner Chair", 40).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/inventory",
            Some(json!({"sku": "fur003", "name": "Recliner Chair", "quantity": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn create_rejects_negative_quantity_and_empty_fields() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request_json(
            Method::POST,
            "/inventory",
            Some(json!({"sku": "FUR004", "name": "Dining Table", "quantity": -1})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request_json(
            Method::POST,
            "/inventory",
            Some(json!({"sku": "", "name": "Nameless", "quantity": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_inventory_is_sorted_by_sku() {
    let app = TestApp::new().await;
    app.seed_item("FUR010", "Wardrobe", 18).await;
    app.seed_item("FUR002", "Office Chair", 60).await;
    app.seed_item("FUR005", "Coffee Table", 36).await;

    let (status, body) = app.request_json(Method::GET, "/inventory", None).await;
    assert_eq!(status, StatusCode::OK);

    let skus: Vec<&str> = body
        .as_array()
        .expect("list response should be an array")
        .iter()
        .map(|item| item["sku"].as_str().unwrap())
        .collect();
    assert_eq!(skus, vec!["FUR002", "FUR005", "FUR010"]);
}

#[tokio::test]
async fn unknown_sku_returns_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_json(Method::GET, "/inventory/NOPE", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (status, _) = app
        .request_json(Method::PUT, "/inventory/NOPE", Some(json!({"quantity": 5})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request_json(Method::PATCH, "/inventory/NOPE", Some(json!({"delta": 1})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_quantity_absolutely() {
    let app = TestApp::new().await;
    app.seed_item("FUR006", "Side Table", 40).await;

    let (status, body) = app
        .request_json(
            Method::PUT,
            "/inventory/FUR006",
            Some(json!({"quantity": 7})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 7);

    let (status, _) = app
        .request_json(
            Method::PUT,
            "/inventory/FUR006",
            Some(json!({"quantity": -2})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Failed set leaves the row unchanged
    let (_, body) = app
        .request_json(Method::GET, "/inventory/FUR006", None)
        .await;
    assert_eq!(body["quantity"], 7);
}

#[tokio::test]
async fn patch_applies_signed_deltas() {
    let app = TestApp::new().await;
    app.seed_item("FUR007", "Study Desk", 5).await;

    let (status, body) = app
        .request_json(
            Method::PATCH,
            "/inventory/FUR007",
            Some(json!({"delta": -3})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 2);

    let (status, body) = app
        .request_json(Method::PATCH, "/inventory/FUR007", Some(json!({"delta": 4})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 6);
}

#[tokio::test]
async fn decrement_below_zero_is_rejected_and_stock_unchanged() {
    let app = TestApp::new().await;
    app.seed_item("FUR008", "Office Desk", 5).await;

    let (status, _) = app
        .request_json(
            Method::PATCH,
            "/inventory/FUR008",
            Some(json!({"delta": -3})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // 2 left; another -3 must fail without touching the row
    let (status, body) = app
        .request_json(
            Method::PATCH,
            "/inventory/FUR008",
            Some(json!({"delta": -3})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    let (_, body) = app
        .request_json(Method::GET, "/inventory/FUR008", None)
        .await;
    assert_eq!(body["quantity"], 2);
}

#[tokio::test]
async fn error_responses_carry_request_id_field_shape() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_json(Method::GET, "/inventory/MISSING", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"]
        .as_str()
        .expect("message should be a string")
        .contains("MISSING"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new().await;

    let (status, body) = app.request_json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
