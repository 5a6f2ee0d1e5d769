use crate::{
    db::DbPool,
    entities::inventory_item::{self, Entity as InventoryItemEntity},
    errors::ServiceError,
    events::{Event, EventSender},
    validation::{normalize_sku, validate_request},
};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating an inventory item.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 64, message = "SKU is required"))]
    pub sku: String,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

/// Service for managing inventory items and their stock levels.
///
/// All quantity mutations go through single conditional UPDATE statements so
/// the `quantity >= 0` invariant holds under concurrent modification; there
/// is no application-level read-modify-write.
#[derive(Clone)]
pub struct InventoryService {
    db: Arc<DbPool>,
    event_sender: EventSender,
}

impl InventoryService {
    /// Creates a new inventory service instance
    pub fn new(db: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new inventory item
    #[instrument(skip(self, request), fields(sku = %request.sku))]
    pub async fn create_item(
        &self,
        request: CreateInventoryItemRequest,
    ) -> Result<inventory_item::Model, ServiceError> {
        validate_request(&request)?;

        let sku = normalize_sku(&request.sku);
        let db = &*self.db;

        let item = inventory_item::ActiveModel {
            sku: Set(sku.clone()),
            name: Set(request.name.trim().to_string()),
            quantity: Set(request.quantity),
            ..Default::default()
        };

        let model = item.insert(db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                warn!(sku = %sku, "duplicate SKU rejected");
                ServiceError::Conflict(format!("inventory item {} already exists", sku))
            } else {
                ServiceError::DatabaseError(e)
            }
        })?;

        info!(sku = %model.sku, quantity = model.quantity, "inventory item created");

        if let Err(e) = self
            .event_sender
            .send(Event::InventoryItemCreated {
                sku: model.sku.clone(),
                quantity: model.quantity,
            })
            .await
        {
            warn!(sku = %model.sku, error = %e, "failed to send inventory created event");
        }

        Ok(model)
    }

    /// Retrieves a single inventory item by SKU
    #[instrument(skip(self))]
    pub async fn get_item(&self, sku: &str) -> Result<inventory_item::Model, ServiceError> {
        let sku = normalize_sku(sku);
        let db = &*self.db;

        InventoryItemEntity::find_by_id(sku.as_str())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("inventory item {} not found", sku)))
    }

    /// Lists the full inventory snapshot, sorted by SKU for stable output
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<inventory_item::Model>, ServiceError> {
        let db = &*self.db;

        let items = InventoryItemEntity::find()
            .order_by_asc(inventory_item::Column::Sku)
            .all(db)
            .await?;

        info!(count = items.len(), "inventory snapshot fetched");
        Ok(items)
    }

    /// Sets the absolute quantity of an item (PUT semantics)
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        sku: &str,
        quantity: i32,
    ) -> Result<inventory_item::Model, ServiceError> {
        if quantity < 0 {
            return Err(ServiceError::InvalidInput(
                "quantity cannot be negative".to_string(),
            ));
        }

        let sku = normalize_sku(sku);
        let db = &*self.db;

        // Read the previous value only for the event payload; the write
        // itself is a single UPDATE keyed by SKU.
        let old_quantity = self.get_item(&sku).await?.quantity;

        let result = InventoryItemEntity::update_many()
            .col_expr(inventory_item::Column::Quantity, Expr::value(quantity))
            .col_expr(inventory_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(inventory_item::Column::Sku.eq(sku.clone()))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "inventory item {} not found",
                sku
            )));
        }

        let updated = InventoryItemEntity::find_by_id(sku.as_str())
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!("inventory item {} vanished after update", sku))
            })?;

        info!(sku = %sku, old_quantity, new_quantity = updated.quantity, "stock set");

        if let Err(e) = self
            .event_sender
            .send(Event::StockAdjusted {
                sku: sku.clone(),
                old_quantity,
                new_quantity: updated.quantity,
            })
            .await
        {
            warn!(sku = %sku, error = %e, "failed to send stock adjusted event");
        }

        Ok(updated)
    }

    /// Applies a relative delta to an item's quantity (PATCH semantics)
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        sku: &str,
        delta: i32,
    ) -> Result<inventory_item::Model, ServiceError> {
        let sku = normalize_sku(sku);
        let db = &*self.db;

        let updated = apply_stock_delta(db, &sku, delta).await?;
        let old_quantity = updated.quantity - delta;

        info!(sku = %sku, delta, new_quantity = updated.quantity, "stock adjusted");

        if let Err(e) = self
            .event_sender
            .send(Event::StockAdjusted {
                sku: sku.clone(),
                old_quantity,
                new_quantity: updated.quantity,
            })
            .await
        {
            warn!(sku = %sku, error = %e, "failed to send stock adjusted event");
        }

        Ok(updated)
    }
}

/// Applies `delta` to the quantity of `sku` as one conditional UPDATE.
///
/// Negative deltas carry the predicate `quantity >= -delta`, so the storage
/// layer is what rejects a decrement that would drive the quantity negative.
/// Zero rows affected resolves to `NotFound` (row absent) or `InvalidInput`
/// (insufficient stock). Generic over the connection so order creation can
/// run it inside a transaction.
pub(crate) async fn apply_stock_delta<C: ConnectionTrait>(
    conn: &C,
    sku: &str,
    delta: i32,
) -> Result<inventory_item::Model, ServiceError> {
    let mut update = InventoryItemEntity::update_many()
        .col_expr(
            inventory_item::Column::Quantity,
            Expr::col(inventory_item::Column::Quantity).add(delta),
        )
        .col_expr(inventory_item::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(inventory_item::Column::Sku.eq(sku));

    if delta < 0 {
        update = update.filter(inventory_item::Column::Quantity.gte(-delta));
    }

    let result = update.exec(conn).await?;

    if result.rows_affected == 0 {
        // Classify the failure with one follow-up read
        return match InventoryItemEntity::find_by_id(sku).one(conn).await? {
            None => Err(ServiceError::NotFound(format!(
                "inventory item {} not found",
                sku
            ))),
            Some(item) => Err(ServiceError::InvalidInput(format!(
                "insufficient stock for {}: available {}, requested {}",
                sku, item.quantity, -delta
            ))),
        };
    }

    InventoryItemEntity::find_by_id(sku)
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::InternalError(format!("inventory item {} vanished after update", sku))
        })
}
