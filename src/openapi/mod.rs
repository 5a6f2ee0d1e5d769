use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom API",
        version = "1.0.0",
        description = r#"
# Stockroom API

Order and inventory management for a small storefront.

## Features

- **Inventory Management**: SKU-keyed stock levels with absolute and relative adjustments
- **Order Management**: Atomic order creation that reserves stock per line
- **Order Lifecycle**: Monotonic status transitions with cancellation from the initial state

## Error Handling

Failing endpoints return a consistent body with appropriate HTTP status codes:

```json
{
  "error": "Not Found",
  "message": "inventory item FUR001 not found",
  "request_id": "7f1a9c3e-...",
  "timestamp": "2026-01-01T00:00:00Z"
}
```
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "inventory", description = "Inventory management endpoints"),
        (name = "orders", description = "Order management endpoints"),
        (name = "health", description = "Service health probes")
    ),
    paths(
        crate::handlers::inventory::list_inventory,
        crate::handlers::inventory::create_inventory_item,
        crate::handlers::inventory::get_inventory_item,
        crate::handlers::inventory::set_quantity,
        crate::handlers::inventory::adjust_quantity,
        crate::handlers::orders::create_order,
        crate::handlers::orders::get_order,
        crate::handlers::orders::update_order_status,
        crate::health::health_check,
    ),
    components(schemas(
        crate::handlers::inventory::InventoryItemResponse,
        crate::handlers::inventory::SetQuantityRequest,
        crate::handlers::inventory::AdjustQuantityRequest,
        crate::services::inventory::CreateInventoryItemRequest,
        crate::services::orders::CreateOrderRequest,
        crate::services::orders::OrderLineRequest,
        crate::services::orders::OrderLineResponse,
        crate::services::orders::OrderResponse,
        crate::services::orders::UpdateOrderStatusRequest,
        crate::entities::order::OrderStatus,
        crate::errors::ErrorResponse,
        crate::health::HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Builds the interactive documentation routes served under `/docs`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
