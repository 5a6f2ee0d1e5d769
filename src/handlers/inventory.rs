use crate::entities::inventory_item;
use crate::errors::ServiceError;
use crate::services::inventory::CreateInventoryItemRequest;
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inventory item as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryItemResponse {
    pub sku: String,
    pub name: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<inventory_item::Model> for InventoryItemResponse {
    fn from(model: inventory_item::Model) -> Self {
        InventoryItemResponse {
            sku: model.sku,
            name: model.name,
            quantity: model.quantity,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetQuantityRequest {
    /// New absolute quantity, must be non-negative
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdjustQuantityRequest {
    /// Signed quantity change; negative values decrement stock
    pub delta: i32,
}

/// Create the inventory router
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory).post(create_inventory_item))
        .route(
            "/:sku",
            get(get_inventory_item)
                .put(set_quantity)
                .patch(adjust_quantity),
        )
}

/// List the full inventory, sorted by SKU
#[utoipa::path(
    get,
    path = "/inventory",
    responses(
        (status = 200, description = "Inventory snapshot", body = [InventoryItemResponse])
    ),
    tag = "inventory"
)]
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItemResponse>>, ServiceError> {
    let items = state.inventory_service.list_items().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Create a new inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryItemResponse),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "SKU already exists")
    ),
    tag = "inventory"
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> Result<(StatusCode, Json<InventoryItemResponse>), ServiceError> {
    let item = state.inventory_service.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Fetch a single inventory item by SKU
#[utoipa::path(
    get,
    path = "/inventory/{sku}",
    params(
        ("sku" = String, Path, description = "Stock keeping unit")
    ),
    responses(
        (status = 200, description = "Inventory item", body = InventoryItemResponse),
        (status = 404, description = "Unknown SKU")
    ),
    tag = "inventory"
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    let item = state.inventory_service.get_item(&sku).await?;
    Ok(Json(item.into()))
}

/// Set the absolute stock level of an item
#[utoipa::path(
    put,
    path = "/inventory/{sku}",
    params(
        ("sku" = String, Path, description = "Stock keeping unit")
    ),
    request_body = SetQuantityRequest,
    responses(
        (status = 200, description = "Stock level replaced", body = InventoryItemResponse),
        (status = 400, description = "Negative quantity"),
        (status = 404, description = "Unknown SKU")
    ),
    tag = "inventory"
)]
pub async fn set_quantity(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Json(payload): Json<SetQuantityRequest>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    let item = state
        .inventory_service
        .set_quantity(&sku, payload.quantity)
        .await?;
    Ok(Json(item.into()))
}

/// Apply a signed delta to the stock level of an item
#[utoipa::path(
    patch,
    path = "/inventory/{sku}",
    params(
        ("sku" = String, Path, description = "Stock keeping unit")
    ),
    request_body = AdjustQuantityRequest,
    responses(
        (status = 200, description = "Stock level adjusted", body = InventoryItemResponse),
        (status = 400, description = "Insufficient stock for the decrement"),
        (status = 404, description = "Unknown SKU")
    ),
    tag = "inventory"
)]
pub async fn adjust_quantity(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Json(payload): Json<AdjustQuantityRequest>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    let item = state
        .inventory_service
        .adjust_quantity(&sku, payload.delta)
        .await?;
    Ok(Json(item.into()))
}
