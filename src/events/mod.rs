use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// Domain events emitted by the services. These feed an in-process logging
/// drain; they are observability plumbing, not a persistence mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    OrderCreated(Uuid),
    OrderStatusChanged {
        order_id: Uuid,
        old_status: String,
        new_status: String,
    },
    InventoryItemCreated {
        sku: String,
        quantity: i32,
    },
    StockAdjusted {
        sku: String,
        old_quantity: i32,
        new_quantity: i32,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Drains the event channel, logging each event. Runs until every sender is
/// dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::OrderCreated(order_id) => {
                info!(order_id = %order_id, "event: order created");
            }
            Event::OrderStatusChanged {
                order_id,
                old_status,
                new_status,
            } => {
                info!(
                    order_id = %order_id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "event: order status changed"
                );
            }
            Event::InventoryItemCreated { sku, quantity } => {
                info!(sku = %sku, quantity = %quantity, "event: inventory item created");
            }
            Event::StockAdjusted {
                sku,
                old_quantity,
                new_quantity,
            } => {
                info!(
                    sku = %sku,
                    old_quantity = %old_quantity,
                    new_quantity = %new_quantity,
                    "event: stock adjusted"
                );
            }
        }
    }
    info!("Event channel closed; event processor exiting");
}
