use crate::errors::ServiceError;
use crate::services::orders::{CreateOrderRequest, OrderResponse, UpdateOrderStatusRequest};
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

/// Create the orders router
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/:id", get(get_order))
        .route("/:id/status", put(update_order_status))
}

/// Create an order, reserving stock for every line
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Invalid payload or insufficient stock"),
        (status = 404, description = "Order references an unknown SKU")
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ServiceError> {
    let order = state.order_service.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch an order with its item lines
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order identifier")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Unknown order")
    ),
    tag = "orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ServiceError> {
    let order = state.order_service.get_order(id).await?;
    Ok(Json(order))
}

/// Advance an order's lifecycle status
#[utoipa::path(
    put,
    path = "/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order identifier")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 404, description = "Unknown order"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, ServiceError> {
    let order = state.order_service.update_status(id, payload.status).await?;
    Ok(Json(order))
}
