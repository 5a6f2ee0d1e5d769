use crate::{
    db::DbPool,
    entities::order::{self, Entity as OrderEntity, OrderStatus},
    entities::order_item,
    errors::ServiceError,
    events::{Event, EventSender},
    services::inventory::apply_stock_delta,
    validation::{normalize_sku, validate_request},
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One requested line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderLineRequest {
    #[validate(length(min = 1, max = 64, message = "SKU is required"))]
    pub sku: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Request payload for creating an order.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    pub items: Vec<OrderLineRequest>,
}

/// Request payload for advancing an order's status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// One line of an order as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    pub sku: String,
    pub quantity: i32,
}

/// Full order representation returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub status: String,
    pub total_items: i32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLineResponse>,
}

impl OrderResponse {
    fn from_models(order: order::Model, items: Vec<order_item::Model>) -> Self {
        OrderResponse {
            order_id: order.id,
            status: order.status,
            total_items: order.total_items,
            created_at: order.created_at,
            items: items
                .into_iter()
                .map(|item| OrderLineResponse {
                    sku: item.sku,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Service for creating and querying orders.
///
/// Creation reserves stock for every line inside one database transaction;
/// if any line cannot be satisfied the whole order rolls back and no stock
/// moves.
#[derive(Clone)]
pub struct OrderService {
    db: Arc<DbPool>,
    event_sender: EventSender,
}

impl OrderService {
    /// Creates a new order service instance
    pub fn new(db: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    /// Creates an order, decrementing stock for each line atomically
    #[instrument(skip(self, request), fields(lines = request.items.len()))]
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        validate_request(&request)?;

        let mut lines: Vec<(String, i32)> = Vec::with_capacity(request.items.len());
        let mut seen = HashSet::new();
        for line in &request.items {
            validate_request(line)?;
            let sku = normalize_sku(&line.sku);
            if !seen.insert(sku.clone()) {
                return Err(ServiceError::InvalidInput(format!(
                    "duplicate SKU {} in order",
                    sku
                )));
            }
            lines.push((sku, line.quantity));
        }

        let total_items: i32 = lines.iter().map(|(_, qty)| qty).sum();
        let db = &*self.db;
        let txn = db.begin().await?;

        let order_model = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            status: Set(OrderStatus::Created.to_string()),
            total_items: Set(total_items),
            ..Default::default()
        };
        let order = order_model.insert(&txn).await?;

        let mut item_models = Vec::with_capacity(lines.len());
        for (sku, quantity) in &lines {
            // Fails the whole transaction when the row is missing or short
            apply_stock_delta(&txn, sku, -quantity).await?;

            let item = order_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order.id),
                sku: Set(sku.clone()),
                quantity: Set(*quantity),
            };
            item_models.push(item.insert(&txn).await?);
        }

        txn.commit().await?;

        info!(order_id = %order.id, total_items, "order created");

        if let Err(e) = self.event_sender.send(Event::OrderCreated(order.id)).await {
            warn!(order_id = %order.id, error = %e, "failed to send order created event");
        }

        Ok(OrderResponse::from_models(order, item_models))
    }

    /// Retrieves an order with its item lines
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: Uuid) -> Result<OrderResponse, ServiceError> {
        let db = &*self.db;

        let mut results = OrderEntity::find_by_id(order_id)
            .find_with_related(order_item::Entity)
            .all(db)
            .await?;

        match results.pop() {
            Some((order, items)) => Ok(OrderResponse::from_models(order, items)),
            None => Err(ServiceError::NotFound(format!(
                "order {} not found",
                order_id
            ))),
        }
    }

    /// Advances an order to a new status, enforcing monotonic transitions
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        order_id: Uuid,
        new_status: OrderStatus,
    ) -> Result<OrderResponse, ServiceError> {
        let db = &*self.db;

        let order = OrderEntity::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {} not found", order_id)))?;

        let current = OrderStatus::parse(&order.status).ok_or_else(|| {
            ServiceError::InternalError(format!(
                "order {} has unrecognized status {}",
                order_id, order.status
            ))
        })?;

        if !current.can_transition_to(new_status) {
            return Err(ServiceError::InvalidTransition(format!(
                "cannot move order {} from {} to {}",
                order_id, current, new_status
            )));
        }

        let old_status = order.status.clone();
        let mut active: order::ActiveModel = order.into();
        active.status = Set(new_status.to_string());
        active.updated_at = Set(Some(Utc::now()));
        let updated = active.update(db).await?;

        info!(order_id = %order_id, from = %old_status, to = %new_status, "order status changed");

        if let Err(e) = self
            .event_sender
            .send(Event::OrderStatusChanged {
                order_id,
                old_status,
                new_status: new_status.to_string(),
            })
            .await
        {
            warn!(order_id = %order_id, error = %e, "failed to send status change event");
        }

        self.get_order(updated.id).await
    }
}
