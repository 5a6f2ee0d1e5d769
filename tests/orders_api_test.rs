mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_order_decrements_stock() {
    let app = TestApp::new().await;
    app.seed_item("FUR001", "Wooden Chair", 30).await;
    app.seed_item("FUR002", "Office Chair", 60).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [
                {"sku": "FUR001", "quantity": 2},
                {"sku": "fur002", "quantity": 3},
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "created");
    assert_eq!(body["total_items"], 5);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert!(body["order_id"].is_string());

    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR001", None)
        .await;
    assert_eq!(item["quantity"], 28);
    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR002", None)
        .await;
    assert_eq!(item["quantity"], 57);
}

#[tokio::test]
async fn order_with_unknown_sku_rolls_back_entirely() {
    let app = TestApp::new().await;
    app.seed_item("FUR003", "Recliner Chair", 40).await;

    let (status, _) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [
                {"sku": "FUR003", "quantity": 5},
                {"sku": "GHOST", "quantity": 1},
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // First line must not have been decremented
    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR003", None)
        .await;
    assert_eq!(item["quantity"], 40);
}

#[tokio::test]
async fn order_exceeding_stock_rolls_back_entirely() {
    let app = TestApp::new().await;
    app.seed_item("FUR004", "Dining Table", 16).await;
    app.seed_item("FUR005", "Coffee Table", 2).await;

    let (status, body) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [
                {"sku": "FUR004", "quantity": 1},
                {"sku": "FUR005", "quantity": 3},
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("insufficient stock"));

    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR004", None)
        .await;
    assert_eq!(item["quantity"], 16);
    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR005", None)
        .await;
    assert_eq!(item["quantity"], 2);
}

#[tokio::test]
async fn order_rejects_empty_zero_quantity_and_duplicate_lines() {
    let app = TestApp::new().await;
    app.seed_item("FUR006", "Side Table", 40).await;

    let (status, _) = app
        .request_json(Method::POST, "/orders", Some(json!({"items": []})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [{"sku": "FUR006", "quantity": 0}]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Same SKU twice, even with different casing
    let (status, body) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [
                {"sku": "FUR006", "quantity": 1},
                {"sku": "fur006", "quantity": 2},
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("duplicate"));

    let (_, item) = app
        .request_json(Method::GET, "/inventory/FUR006", None)
        .await;
    assert_eq!(item["quantity"], 40);
}

#[tokio::test]
async fn get_order_returns_lines_and_404_for_unknown() {
    let app = TestApp::new().await;
    app.seed_item("FUR007", "Study Desk", 24).await;

    let (_, created) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [{"sku": "FUR007", "quantity": 4}]})),
        )
        .await;
    let order_id = created["order_id"].as_str().unwrap();

    let (status, body) = app
        .request_json(Method::GET, &format!("/orders/{}", order_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_id"], created["order_id"]);
    assert_eq!(body["items"][0]["sku"], "FUR007");
    assert_eq!(body["items"][0]["quantity"], 4);
    assert!(body["created_at"].is_string());

    let (status, _) = app
        .request_json(
            Method::GET,
            "/orders/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_advances_forward_only() {
    let app = TestApp::new().await;
    app.seed_item("FUR008", "Office Desk", 20).await;

    let (_, created) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [{"sku": "FUR008", "quantity": 1}]})),
        )
        .await;
    let order_id = created["order_id"].as_str().unwrap().to_string();
    let status_uri = format!("/orders/{}/status", order_id);

    let (status, body) = app
        .request_json(Method::PUT, &status_uri, Some(json!({"status": "fulfilled"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fulfilled");

    let (status, body) = app
        .request_json(Method::PUT, &status_uri, Some(json!({"status": "delivered"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");

    // Backwards move is a conflict
    let (status, _) = app
        .request_json(Method::PUT, &status_uri, Some(json!({"status": "fulfilled"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancellation_only_from_created() {
    let app = TestApp::new().await;
    app.seed_item("FUR009", "Bookshelf", 28).await;

    let (_, first) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [{"sku": "FUR009", "quantity": 1}]})),
        )
        .await;
    let first_uri = format!("/orders/{}/status", first["order_id"].as_str().unwrap());

    let (status, body) = app
        .request_json(Method::PUT, &first_uri, Some(json!({"status": "cancelled"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    // A fulfilled order can no longer be cancelled
    let (_, second) = app
        .request_json(
            Method::POST,
            "/orders",
            Some(json!({"items": [{"sku": "FUR009", "quantity": 1}]})),
        )
        .await;
    let second_uri = format!("/orders/{}/status", second["order_id"].as_str().unwrap());

    let (status, _) = app
        .request_json(Method::PUT, &second_uri, Some(json!({"status": "fulfilled"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request_json(Method::PUT, &second_uri, Some(json!({"status": "cancelled"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
