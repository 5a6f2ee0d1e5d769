use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: String,
    /// Denormalized sum of requested quantities across the item list
    pub total_items: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        let now = Utc::now();

        if insert {
            if let ActiveValue::NotSet = active_model.created_at {
                active_model.created_at = Set(now);
            }
        }

        if let ActiveValue::NotSet = active_model.updated_at {
            active_model.updated_at = Set(Some(now));
        }

        Ok(active_model)
    }
}

/// Order lifecycle status. Transitions are monotonic: an order only ever
/// moves to a status with a strictly higher rank, except `Cancelled`, which
/// is reachable only from `Created`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    Fulfilled,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    fn rank(self) -> u8 {
        match self {
            OrderStatus::Created => 0,
            OrderStatus::Fulfilled => 1,
            OrderStatus::Delivered => 2,
            OrderStatus::Cancelled => 3,
        }
    }

    /// Whether moving from `self` to `next` is a legal forward transition.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        match next {
            OrderStatus::Cancelled => self == OrderStatus::Created,
            _ => self != OrderStatus::Cancelled && next.rank() > self.rank(),
        }
    }

    /// Parses a stored status string, treating unknown values as corrupt data.
    pub fn parse(value: &str) -> Option<OrderStatus> {
        OrderStatus::from_str(value).ok()
    }
}
